//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that is the single source of
//! truth for decoding. Each byte maps either to `None` (an illegal opcode) or to
//! the operation it performs, its addressing mode, and its base cycle cost.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105 byte
//! values are undocumented and are rejected by the CPU with
//! [`ExecutionError::IllegalOpcode`](crate::ExecutionError::IllegalOpcode).

use std::fmt;

use crate::addressing::AddressingMode;

/// Operation performed by an opcode, independent of its addressing mode.
///
/// One variant per documented 6502 mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }

    /// Read instructions pay one extra cycle when indexing crosses a page.
    ///
    /// Stores and read-modify-write instructions always take the fixed cost
    /// listed in the table.
    pub const fn has_page_cross_penalty(self) -> bool {
        matches!(
            self,
            Operation::Adc
                | Operation::And
                | Operation::Cmp
                | Operation::Eor
                | Operation::Lda
                | Operation::Ldx
                | Operation::Ldy
                | Operation::Ora
                | Operation::Sbc
        )
    }

    /// Whether the operation writes its result back through its operand.
    pub const fn writes_operand(self) -> bool {
        matches!(
            self,
            Operation::Asl
                | Operation::Lsr
                | Operation::Rol
                | Operation::Ror
                | Operation::Inc
                | Operation::Dec
                | Operation::Sta
                | Operation::Stx
                | Operation::Sty
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Metadata for a single documented 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{lookup, AddressingMode, Operation};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    const fn new(operation: Operation, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            operation,
            addressing_mode,
            base_cycles,
        }
    }

    /// Instruction mnemonic (e.g. "LDA").
    pub const fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(&self) -> u8 {
        self.addressing_mode.operand_bytes()
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks an illegal (undocumented) opcode.
///
/// # Examples
///
/// ```
/// use emu6502::OPCODE_TABLE;
///
/// assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the metadata for an opcode byte, returning `None` for illegal opcodes.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Operation::*;

    const DOCUMENTED: [(u8, Operation, AddressingMode, u8); 151] = [
        (0x00, Brk, Implied, 7),
        (0x01, Ora, IndexedIndirect, 6),
        (0x05, Ora, ZeroPage, 3),
        (0x06, Asl, ZeroPage, 5),
        (0x08, Php, Implied, 3),
        (0x09, Ora, Immediate, 2),
        (0x0A, Asl, Accumulator, 2),
        (0x0D, Ora, Absolute, 4),
        (0x0E, Asl, Absolute, 6),
        (0x10, Bpl, Relative, 2),
        (0x11, Ora, IndirectIndexed, 5),
        (0x15, Ora, ZeroPageX, 4),
        (0x16, Asl, ZeroPageX, 6),
        (0x18, Clc, Implied, 2),
        (0x19, Ora, AbsoluteY, 4),
        (0x1D, Ora, AbsoluteX, 4),
        (0x1E, Asl, AbsoluteX, 7),
        (0x20, Jsr, Absolute, 6),
        (0x21, And, IndexedIndirect, 6),
        (0x24, Bit, ZeroPage, 3),
        (0x25, And, ZeroPage, 3),
        (0x26, Rol, ZeroPage, 5),
        (0x28, Plp, Implied, 4),
        (0x29, And, Immediate, 2),
        (0x2A, Rol, Accumulator, 2),
        (0x2C, Bit, Absolute, 4),
        (0x2D, And, Absolute, 4),
        (0x2E, Rol, Absolute, 6),
        (0x30, Bmi, Relative, 2),
        (0x31, And, IndirectIndexed, 5),
        (0x35, And, ZeroPageX, 4),
        (0x36, Rol, ZeroPageX, 6),
        (0x38, Sec, Implied, 2),
        (0x39, And, AbsoluteY, 4),
        (0x3D, And, AbsoluteX, 4),
        (0x3E, Rol, AbsoluteX, 7),
        (0x40, Rti, Implied, 6),
        (0x41, Eor, IndexedIndirect, 6),
        (0x45, Eor, ZeroPage, 3),
        (0x46, Lsr, ZeroPage, 5),
        (0x48, Pha, Implied, 3),
        (0x49, Eor, Immediate, 2),
        (0x4A, Lsr, Accumulator, 2),
        (0x4C, Jmp, Absolute, 3),
        (0x4D, Eor, Absolute, 4),
        (0x4E, Lsr, Absolute, 6),
        (0x50, Bvc, Relative, 2),
        (0x51, Eor, IndirectIndexed, 5),
        (0x55, Eor, ZeroPageX, 4),
        (0x56, Lsr, ZeroPageX, 6),
        (0x58, Cli, Implied, 2),
        (0x59, Eor, AbsoluteY, 4),
        (0x5D, Eor, AbsoluteX, 4),
        (0x5E, Lsr, AbsoluteX, 7),
        (0x60, Rts, Implied, 6),
        (0x61, Adc, IndexedIndirect, 6),
        (0x65, Adc, ZeroPage, 3),
        (0x66, Ror, ZeroPage, 5),
        (0x68, Pla, Implied, 4),
        (0x69, Adc, Immediate, 2),
        (0x6A, Ror, Accumulator, 2),
        (0x6C, Jmp, Indirect, 5),
        (0x6D, Adc, Absolute, 4),
        (0x6E, Ror, Absolute, 6),
        (0x70, Bvs, Relative, 2),
        (0x71, Adc, IndirectIndexed, 5),
        (0x75, Adc, ZeroPageX, 4),
        (0x76, Ror, ZeroPageX, 6),
        (0x78, Sei, Implied, 2),
        (0x79, Adc, AbsoluteY, 4),
        (0x7D, Adc, AbsoluteX, 4),
        (0x7E, Ror, AbsoluteX, 7),
        (0x81, Sta, IndexedIndirect, 6),
        (0x84, Sty, ZeroPage, 3),
        (0x85, Sta, ZeroPage, 3),
        (0x86, Stx, ZeroPage, 3),
        (0x88, Dey, Implied, 2),
        (0x8A, Txa, Implied, 2),
        (0x8C, Sty, Absolute, 4),
        (0x8D, Sta, Absolute, 4),
        (0x8E, Stx, Absolute, 4),
        (0x90, Bcc, Relative, 2),
        (0x91, Sta, IndirectIndexed, 6),
        (0x94, Sty, ZeroPageX, 4),
        (0x95, Sta, ZeroPageX, 4),
        (0x96, Stx, ZeroPageY, 4),
        (0x98, Tya, Implied, 2),
        (0x99, Sta, AbsoluteY, 5),
        (0x9A, Txs, Implied, 2),
        (0x9D, Sta, AbsoluteX, 5),
        (0xA0, Ldy, Immediate, 2),
        (0xA1, Lda, IndexedIndirect, 6),
        (0xA2, Ldx, Immediate, 2),
        (0xA4, Ldy, ZeroPage, 3),
        (0xA5, Lda, ZeroPage, 3),
        (0xA6, Ldx, ZeroPage, 3),
        (0xA8, Tay, Implied, 2),
        (0xA9, Lda, Immediate, 2),
        (0xAA, Tax, Implied, 2),
        (0xAC, Ldy, Absolute, 4),
        (0xAD, Lda, Absolute, 4),
        (0xAE, Ldx, Absolute, 4),
        (0xB0, Bcs, Relative, 2),
        (0xB1, Lda, IndirectIndexed, 5),
        (0xB4, Ldy, ZeroPageX, 4),
        (0xB5, Lda, ZeroPageX, 4),
        (0xB6, Ldx, ZeroPageY, 4),
        (0xB8, Clv, Implied, 2),
        (0xB9, Lda, AbsoluteY, 4),
        (0xBA, Tsx, Implied, 2),
        (0xBC, Ldy, AbsoluteX, 4),
        (0xBD, Lda, AbsoluteX, 4),
        (0xBE, Ldx, AbsoluteY, 4),
        (0xC0, Cpy, Immediate, 2),
        (0xC1, Cmp, IndexedIndirect, 6),
        (0xC4, Cpy, ZeroPage, 3),
        (0xC5, Cmp, ZeroPage, 3),
        (0xC6, Dec, ZeroPage, 5),
        (0xC8, Iny, Implied, 2),
        (0xC9, Cmp, Immediate, 2),
        (0xCA, Dex, Implied, 2),
        (0xCC, Cpy, Absolute, 4),
        (0xCD, Cmp, Absolute, 4),
        (0xCE, Dec, Absolute, 6),
        (0xD0, Bne, Relative, 2),
        (0xD1, Cmp, IndirectIndexed, 5),
        (0xD5, Cmp, ZeroPageX, 4),
        (0xD6, Dec, ZeroPageX, 6),
        (0xD8, Cld, Implied, 2),
        (0xD9, Cmp, AbsoluteY, 4),
        (0xDD, Cmp, AbsoluteX, 4),
        (0xDE, Dec, AbsoluteX, 7),
        (0xE0, Cpx, Immediate, 2),
        (0xE1, Sbc, IndexedIndirect, 6),
        (0xE4, Cpx, ZeroPage, 3),
        (0xE5, Sbc, ZeroPage, 3),
        (0xE6, Inc, ZeroPage, 5),
        (0xE8, Inx, Implied, 2),
        (0xE9, Sbc, Immediate, 2),
        (0xEA, Nop, Implied, 2),
        (0xEC, Cpx, Absolute, 4),
        (0xED, Sbc, Absolute, 4),
        (0xEE, Inc, Absolute, 6),
        (0xF0, Beq, Relative, 2),
        (0xF1, Sbc, IndirectIndexed, 5),
        (0xF5, Sbc, ZeroPageX, 4),
        (0xF6, Inc, ZeroPageX, 6),
        (0xF8, Sed, Implied, 2),
        (0xF9, Sbc, AbsoluteY, 4),
        (0xFD, Sbc, AbsoluteX, 4),
        (0xFE, Inc, AbsoluteX, 7),
    ];

    let mut table = [None; 256];
    let mut i = 0;
    while i < DOCUMENTED.len() {
        let (code, operation, mode, cycles) = DOCUMENTED[i];
        table[code as usize] = Some(OpcodeMetadata::new(operation, mode, cycles));
        i += 1;
    }
    table
}
