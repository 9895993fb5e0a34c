//! Fuzz target for running arbitrary programs.
//!
//! Loads the input as a program at 0x8000 and runs it for a bounded number
//! of steps. Every outcome is acceptable as long as nothing panics and a
//! halted CPU stays put.

#![no_main]

use emu6502::{Cpu, FlatMemory, MemoryBus, StepOutcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|program: &[u8]| {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, &program[..program.len().min(0x7FFA)]);

    let mut cpu = Cpu::power_on(memory);
    let halted = matches!(cpu.run(10_000), Ok(StepOutcome::Halt) | Err(_));

    if halted {
        let pc = cpu.pc();
        let cycles = cpu.cycles();
        assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
        assert_eq!(cpu.pc(), pc);
        assert_eq!(cpu.cycles(), cycles);
    }
});
