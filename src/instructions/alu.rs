//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Register compares
//!
//! ADC and SBC honor the Decimal flag when the CPU is configured for BCD
//! arithmetic, following NMOS flag behavior.

use crate::{Cpu, MemoryBus, Operand};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Binary mode flags:
/// - C: Set if the 9-bit sum exceeds 0xFF
/// - Z, N: From the result
/// - V: Set if both inputs share a sign that the result does not
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.flags.decimal && cpu.config.decimal_mode {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (borrow) from the accumulator.
/// In binary mode this is ADC of the one's complement of the operand.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.flags.decimal && cpu.config.decimal_mode {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }
}

fn add_binary<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flags.carry as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.flags.carry = result16 > 0xFF;
    // V = (A^result) & (M^result) & 0x80: both operands had the same sign
    // and the result has the other one.
    cpu.flags.overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.flags.update_zn(result);

    cpu.a = result;
}

/// NMOS decimal add. Z comes from the binary sum; N and V are taken from the
/// intermediate result before the high digit is adjusted.
fn add_decimal<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flags.carry as u16;

    let binary = (a as u16 + value as u16 + carry_in) as u8;

    let mut low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if low > 0x09 {
        low += 0x06;
    }

    let mut high = (a >> 4) as u16 + (value >> 4) as u16 + (low > 0x0F) as u16;
    let intermediate = ((high << 4) | (low & 0x0F)) as u8;

    cpu.flags.zero = binary == 0;
    cpu.flags.negative = intermediate & 0x80 != 0;
    cpu.flags.overflow = ((a ^ intermediate) & (value ^ intermediate) & 0x80) != 0;

    if high > 0x09 {
        high += 0x06;
    }
    cpu.flags.carry = high > 0x0F;

    cpu.a = ((high << 4) | (low & 0x0F)) as u8;
}

/// NMOS decimal subtract. All flags match binary SBC; only the result digits
/// are adjusted.
fn subtract_decimal<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let borrow = (!cpu.flags.carry) as i16;

    add_binary(cpu, !value);

    let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut high = (a >> 4) as i16 - (value >> 4) as i16;
    if low < 0 {
        low += 10;
        high -= 1;
    }
    if high < 0 {
        high += 10;
    }

    cpu.a = (((high & 0x0F) << 4) | (low & 0x0F)) as u8;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - Z: Set if A & M is zero
/// - N: Bit 7 of M
/// - V: Bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.flags.zero = (cpu.a & value) == 0;
    cpu.flags.negative = value & 0x80 != 0;
    cpu.flags.overflow = value & 0x40 != 0;
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let register = cpu.a;
    compare(cpu, register, operand);
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let register = cpu.x;
    compare(cpu, register, operand);
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let register = cpu.y;
    compare(cpu, register, operand);
}

/// Shared compare logic for CMP, CPX and CPY.
///
/// Flags affected:
/// - C: Set if register >= M (unsigned)
/// - Z: Set if register == M
/// - N: Bit 7 of (register - M)
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = register.wrapping_sub(value);

    cpu.flags.carry = register >= value;
    cpu.flags.update_zn(result);
}
