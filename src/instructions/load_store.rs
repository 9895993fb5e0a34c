//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update Z and N from the loaded value. Stores affect no flags.

use crate::{Cpu, MemoryBus, Operand};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.flags.update_zn(cpu.y);
}

pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.a;
    cpu.write_operand(operand, value);
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.x;
    cpu.write_operand(operand, value);
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.y;
    cpu.write_operand(operand, value);
}
