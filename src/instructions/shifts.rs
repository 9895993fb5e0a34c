//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory (read-modify-write), and updates
//! C, Z and N.

use crate::{Cpu, MemoryBus, Operand};

/// Reads the operand, applies `shift` (value, carry in) -> (result, carry out),
/// writes the result back and updates C, Z, N.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    operand: Operand,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) {
    let value = cpu.read_operand(operand);
    let (result, carry) = shift(value, cpu.flags.carry);

    cpu.write_operand(operand, result);
    cpu.flags.carry = carry;
    cpu.flags.update_zn(result);
}

/// Executes ASL: bit 7 into carry, bit 0 cleared.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes LSR: bit 0 into carry, bit 7 cleared (so N is always cleared).
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes ROL: bit 7 into carry, old carry into bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes ROR: bit 0 into carry, old carry into bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    read_modify_write(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
