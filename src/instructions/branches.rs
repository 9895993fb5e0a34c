//! # Branch Instructions
//!
//! This module implements the conditional branches:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing. The resolver has already
//! computed the target as the address after the instruction plus the signed
//! offset, wrapping at 16 bits.

use crate::{Cpu, MemoryBus, Operand, Operation, StatusFlags};

/// Whether the branch `operation` is taken under `flags`.
pub(crate) fn condition(operation: Operation, flags: StatusFlags) -> bool {
    match operation {
        Operation::Bcc => !flags.carry,
        Operation::Bcs => flags.carry,
        Operation::Bne => !flags.zero,
        Operation::Beq => flags.zero,
        Operation::Bpl => !flags.negative,
        Operation::Bmi => flags.negative,
        Operation::Bvc => !flags.overflow,
        Operation::Bvs => flags.overflow,
        other => {
            log::error!("{} dispatched as a branch", other);
            false
        }
    }
}

/// Executes a conditional branch.
///
/// When the condition holds, PC moves to the resolved target. Otherwise PC
/// stays at the next instruction.
///
/// Cycle timing:
/// - base cycles if branch not taken
/// - +1 cycle if branch taken to same page
/// - +2 cycles if branch taken to different page
///
/// No flags are affected.
pub(crate) fn branch<M: MemoryBus>(cpu: &mut Cpu<M>, operation: Operation, operand: Operand) {
    if !condition(operation, cpu.flags) {
        return;
    }

    let Some(target_pc) = operand.address() else {
        log::error!("{} with non-address operand {:?}", operation, operand);
        return;
    };

    // A page boundary is crossed if the high byte changes
    let page_crossed = (cpu.pc & 0xFF00) != (target_pc & 0xFF00);

    cpu.cycles += 1;
    if page_crossed {
        cpu.cycles += 1;
    }

    cpu.pc = target_pc;
}
