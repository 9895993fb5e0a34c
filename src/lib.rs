//! # 6502 Instruction Interpreter
//!
//! An instruction-stepped NMOS 6502 CPU interpreter. Given a memory image and a
//! register/flag state, [`Cpu::step`] fetches the byte at the program counter,
//! decodes it through a 256-entry opcode table, resolves the operand through one
//! of the 13 addressing modes, performs the operation, and reports whether
//! execution may continue.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{Cpu, FlatMemory, StepOutcome};
//!
//! let mut memory = FlatMemory::new();
//! // LDA #$50; ADC #$10; BRK
//! memory.load(0x0000, &[0xA9, 0x50, 0x69, 0x10, 0x00]);
//!
//! let mut cpu = Cpu::new(memory);
//! while cpu.step().unwrap() == StepOutcome::Continue {}
//!
//! assert_eq!(cpu.a(), 0x60);
//! assert!(cpu.is_halted());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute step
//! - `addressing` - Addressing modes and the operand resolver
//! - `opcodes` - Opcode metadata table
//! - `flags` - Status register
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `config` - Variant and host behavior switches
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Every executed instruction is logged at `trace` level.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{BrkBehavior, CpuConfig};
pub use cpu::{Cpu, RunState};
pub use flags::StatusFlags;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, OpcodeMetadata, Operation, OPCODE_TABLE};

/// Result of a successful [`Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction executed and the CPU may be stepped again.
    Continue,

    /// The CPU is halted. Further steps do nothing.
    Halt,
}

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `pc` is not a documented opcode.
    ///
    /// The CPU halts without modifying any register, flag or memory.
    IllegalOpcode { opcode: u8, pc: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at ${:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
