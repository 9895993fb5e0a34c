//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes to 0x0100 | SP and then decrements SP; a pull increments SP and
//! then reads. SP wraps within the page.

use crate::{Cpu, MemoryBus};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.flags.to_pushed_byte();
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.pull();
    cpu.flags.update_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is replaced from the pulled byte except B, which keeps its
/// current value. Bit 5 stays set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.flags.restore_from_stack(status);
}
