//! Countdown example
//!
//! Runs a small loop that counts X down from 5, storing each value into a
//! buffer at $0200, then halts on BRK.
//!
//! This example shows:
//! - Setting up the reset vector and loading a program
//! - Stepping instructions with a trace of PC, mnemonic and cycles
//! - Inspecting memory and registers after the CPU halts

use emu6502::{lookup, Cpu, FlatMemory, MemoryBus, StepOutcome};

const PROGRAM: &[u8] = &[
    0xA2, 0x05, // LDX #$05
    0x8A, // loop: TXA
    0x9D, 0xFF, 0x01, // STA $01FF,X
    0xCA, // DEX
    0xD0, 0xF9, // BNE loop
    0x00, // BRK
];

fn main() {
    println!("emu6502 - Countdown Example");
    println!("===========================\n");

    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, PROGRAM);

    let mut cpu = Cpu::power_on(memory);

    println!("  PC       Opcode  Instr  A   X   Cycles");
    println!("  -------  ------  -----  --  --  ------");

    loop {
        let pc = cpu.pc();
        let opcode = cpu.memory().read(pc);
        let mnemonic = lookup(opcode).map_or("???", |metadata| metadata.mnemonic());

        let outcome = match cpu.step() {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("\nExecution stopped: {}", err);
                return;
            }
        };

        println!(
            "  ${:04X}    0x{:02X}    {}    {:02X}  {:02X}  {}",
            pc,
            opcode,
            mnemonic,
            cpu.a(),
            cpu.x(),
            cpu.cycles()
        );

        if outcome == StepOutcome::Halt {
            break;
        }
    }

    println!("\nBuffer at $0200:");
    for addr in 0x0200..0x0205u16 {
        println!("  ${:04X}: {}", addr, cpu.memory().read(addr));
    }
    println!("\nHalted after {} cycles", cpu.cycles());
}
