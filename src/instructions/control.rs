//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt (or halt, see [`BrkBehavior`])
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//!
//! JMP indirect resolves its pointer with the NMOS page-wrap bug: JMP ($10FF)
//! reads the target from $10FF and $1000, not $1100. That happens in the
//! resolver, so JMP itself only loads the resolved address into PC.

use crate::cpu::IRQ_VECTOR;
use crate::{BrkBehavior, Cpu, MemoryBus, Operand, StepOutcome};

/// Executes the BRK (Force Interrupt) instruction.
///
/// B is always set. What follows depends on the configured behavior:
///
/// - [`BrkBehavior::Halt`]: PC stays just past the opcode and the CPU halts.
/// - [`BrkBehavior::Interrupt`]: the hardware sequence runs:
///   1. Push PC+2 relative to the opcode (BRK skips a padding byte), high byte first
///   2. Push the status byte with B and bit 5 set
///   3. Set the I flag
///   4. Load PC from the IRQ vector at $FFFE/F
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.flags.break_command = true;

    match cpu.config.brk_behavior {
        BrkBehavior::Halt => {
            log::debug!("BRK at ${:04X}, halting", cpu.pc.wrapping_sub(1));
            StepOutcome::Halt
        }
        BrkBehavior::Interrupt => {
            // PC already points one past the opcode; the padding byte makes it two
            let return_address = cpu.pc.wrapping_add(1);
            cpu.push_word(return_address);
            let status = cpu.flags.to_pushed_byte();
            cpu.push(status);

            cpu.flags.interrupt_disable = true;
            cpu.pc = cpu.read_word(IRQ_VECTOR);

            StepOutcome::Continue
        }
    }
}

/// Executes the JMP (Jump) instruction.
///
/// - Absolute (0x4C): JMP $1234
/// - Indirect (0x6C): JMP ($1234)
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let Some(target) = operand.address() else {
        log::error!("JMP with non-address operand {:?}", operand);
        return;
    };
    cpu.pc = target;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return point
/// minus one), high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let Some(target) = operand.address() else {
        log::error!("JSR with non-address operand {:?}", operand);
        return;
    };
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B and bit 5 are unaffected, as with PLP), then
/// pulls PC. Unlike RTS, the pulled address is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.flags.restore_from_stack(status);
    cpu.pc = cpu.pull_word();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_jumps_ignore_non_address_operands() {
        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.pc = 0x1234;
        cpu.sp = 0xFD;

        execute_jmp(&mut cpu, Operand::Immediate(0x56));
        execute_jsr(&mut cpu, Operand::Implied);

        assert_eq!(cpu.pc, 0x1234);
        assert_eq!(cpu.sp, 0xFD);
    }
}
