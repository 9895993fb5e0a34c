//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory image, executes one
//! instruction and checks the invariants every step must uphold.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{
    lookup, BrkBehavior, Cpu, CpuConfig, ExecutionError, FlatMemory, MemoryBus, StepOutcome,
};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    decimal_mode: bool,
    brk_interrupts: bool,
}

/// Memory regions the instruction can reach
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Loaded at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(0x8000, &input.memory.instruction_bytes);

    let state = &input.cpu_state;
    let brk_behavior = if state.brk_interrupts {
        BrkBehavior::Interrupt
    } else {
        BrkBehavior::Halt
    };
    let config = CpuConfig::default()
        .with_decimal_mode(state.decimal_mode)
        .with_brk_behavior(brk_behavior);

    let mut cpu = Cpu::power_on_with_config(memory, config);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);

    let opcode = input.memory.instruction_bytes[0];
    let result = cpu.step();

    match lookup(opcode) {
        Some(metadata) => {
            assert!(result.is_ok());
            // Branch penalties add at most two cycles, page crosses at most one
            assert!(cpu.cycles() >= metadata.base_cycles as u64);
            assert!(cpu.cycles() <= metadata.base_cycles as u64 + 2);
            if result == Ok(StepOutcome::Halt) {
                assert!(cpu.is_halted());
            }
        }
        None => {
            assert_eq!(result, Err(ExecutionError::IllegalOpcode { opcode, pc: 0x8000 }));
            assert_eq!(cpu.pc(), 0x8000);
            assert_eq!(cpu.cycles(), 0);
        }
    }

    assert!(cpu.status() & 0x20 != 0);
});
