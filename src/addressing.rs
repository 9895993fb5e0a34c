//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns an instruction's operand bytes into an
//! effective [`Operand`].
//!
//! Resolution is a pure function of the register file, memory contents and
//! operand bytes. It reads memory (for the indirect forms) but never writes.
//!
//! ## Wraparound
//!
//! All address arithmetic wraps: 16-bit forms modulo 0x10000 and zero-page
//! indexed forms modulo 0x100. The indirect forms also reproduce the NMOS
//! page-wrap behavior when a pointer straddles a page boundary.

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndexedIndirect, IndirectIndexed
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirect,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// The effective operand of an instruction after address resolution.
///
/// Memory operands are carried as an owned address rather than a reference,
/// so the same resolved value serves both the read and the write half of a
/// read-modify-write instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,

    /// The accumulator register (readable and writable).
    Accumulator,

    /// A literal value taken from the instruction stream (read-only).
    Immediate(u8),

    /// A memory location (readable and writable).
    ///
    /// `page_crossed` is set when indexing moved the address onto a
    /// different page than its base, which costs read instructions a cycle.
    Address { addr: u16, page_crossed: bool },
}

impl Operand {
    /// Returns the memory address of this operand, if it has one.
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Address { addr, .. } => Some(addr),
            _ => None,
        }
    }

    /// Returns true if indexing crossed a page boundary.
    pub fn page_crossed(self) -> bool {
        matches!(
            self,
            Operand::Address {
                page_crossed: true,
                ..
            }
        )
    }
}

/// Index register snapshot consumed by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexRegisters {
    pub x: u8,
    pub y: u8,
}

/// Builds a 16-bit address from little-endian bytes.
#[inline]
pub(crate) fn word(low: u8, high: u8) -> u16 {
    u16::from_le_bytes([low, high])
}

#[inline]
fn crosses_page(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

/// Reads a 16-bit pointer whose high byte is fetched from the same page as
/// the low byte.
///
/// This models the NMOS behavior where the pointer increment never carries
/// into the high byte: a pointer at `0x02FF` reads its high byte from
/// `0x0200`, and a zero-page pointer at `0xFF` reads its high byte from
/// `0x00`.
pub fn read_pointer_same_page<M: MemoryBus + ?Sized>(memory: &M, ptr: u16) -> u16 {
    let low = memory.read(ptr);
    let high_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let high = memory.read(high_addr);
    word(low, high)
}

/// Resolves an addressing mode into an effective operand.
///
/// # Arguments
///
/// * `mode` - Addressing mode of the instruction
/// * `index` - Current X and Y registers
/// * `memory` - Memory used to dereference indirect forms
/// * `next_pc` - Address immediately after the full instruction
/// * `operands` - The operand bytes (`[low, high]`); unused bytes are ignored
///
/// # Examples
///
/// ```
/// use emu6502::addressing::{resolve, AddressingMode, IndexRegisters, Operand};
/// use emu6502::FlatMemory;
///
/// let memory = FlatMemory::new();
/// let index = IndexRegisters { x: 0x02, y: 0x00 };
///
/// // Zero page indexing wraps within page 0
/// let operand = resolve(AddressingMode::ZeroPageX, index, &memory, 0x8002, [0xFF, 0x00]);
/// assert_eq!(operand, Operand::Address { addr: 0x0001, page_crossed: false });
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    index: IndexRegisters,
    memory: &M,
    next_pc: u16,
    operands: [u8; 2],
) -> Operand {
    let [low, high] = operands;

    let at = |addr: u16| Operand::Address {
        addr,
        page_crossed: false,
    };

    let indexed = |base: u16, by: u8| {
        let addr = base.wrapping_add(by as u16);
        Operand::Address {
            addr,
            page_crossed: crosses_page(base, addr),
        }
    };

    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(low),
        AddressingMode::ZeroPage => at(low as u16),
        AddressingMode::ZeroPageX => at(low.wrapping_add(index.x) as u16),
        AddressingMode::ZeroPageY => at(low.wrapping_add(index.y) as u16),
        AddressingMode::Relative => at(next_pc.wrapping_add_signed(low as i8 as i16)),
        AddressingMode::Absolute => at(word(low, high)),
        AddressingMode::AbsoluteX => indexed(word(low, high), index.x),
        AddressingMode::AbsoluteY => indexed(word(low, high), index.y),
        AddressingMode::Indirect => at(read_pointer_same_page(memory, word(low, high))),
        AddressingMode::IndexedIndirect => {
            let zp = low.wrapping_add(index.x) as u16;
            at(read_pointer_same_page(memory, zp))
        }
        AddressingMode::IndirectIndexed => {
            let base = read_pointer_same_page(memory, low as u16);
            indexed(base, index.y)
        }
    }
}
