//! # 6502 Instruction Implementations
//!
//! Operation handlers, organized by category. The CPU has already resolved the
//! operand and moved PC past the instruction by the time a handler runs, so a
//! handler only applies the operation, its flag updates, and any PC override.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//!
//! Flag set/clear instructions (CLC, SEC, CLI, SEI, CLD, SED, CLV) are single
//! assignments and live in the dispatcher.

pub mod alu;
pub mod branches;
pub mod control;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{Cpu, MemoryBus, Operand, Operation, StepOutcome};

/// Dispatches an operation to its handler.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    operation: Operation,
    operand: Operand,
) -> StepOutcome {
    match operation {
        Operation::Brk => return control::execute_brk(cpu),

        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Bit => alu::execute_bit(cpu, operand),
        Operation::Cmp => alu::execute_cmp(cpu, operand),
        Operation::Cpx => alu::execute_cpx(cpu, operand),
        Operation::Cpy => alu::execute_cpy(cpu, operand),

        Operation::Bcc
        | Operation::Bcs
        | Operation::Bne
        | Operation::Beq
        | Operation::Bpl
        | Operation::Bmi
        | Operation::Bvc
        | Operation::Bvs => branches::branch(cpu, operation, operand),

        Operation::Asl => shifts::execute_asl(cpu, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, operand),
        Operation::Rol => shifts::execute_rol(cpu, operand),
        Operation::Ror => shifts::execute_ror(cpu, operand),

        Operation::Lda => load_store::execute_lda(cpu, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, operand),
        Operation::Sta => load_store::execute_sta(cpu, operand),
        Operation::Stx => load_store::execute_stx(cpu, operand),
        Operation::Sty => load_store::execute_sty(cpu, operand),

        Operation::Inc => inc_dec::execute_inc(cpu, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Nop => {}

        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        Operation::Clc => cpu.flags.carry = false,
        Operation::Sec => cpu.flags.carry = true,
        Operation::Cli => cpu.flags.interrupt_disable = false,
        Operation::Sei => cpu.flags.interrupt_disable = true,
        Operation::Cld => cpu.flags.decimal = false,
        Operation::Sed => cpu.flags.decimal = true,
        Operation::Clv => cpu.flags.overflow = false,

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
    }

    StepOutcome::Continue
}
