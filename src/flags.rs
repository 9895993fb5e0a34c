//! # Status Register
//!
//! The 6502 processor status register (P) modeled as named booleans.
//!
//! Bit layout when packed (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, always 1
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! The unused bit has no field: it cannot be cleared, and [`StatusFlags::to_byte`]
//! always reports it as set.

pub const FLAG_C: u8 = 0b0000_0001;
pub const FLAG_Z: u8 = 0b0000_0010;
pub const FLAG_I: u8 = 0b0000_0100;
pub const FLAG_D: u8 = 0b0000_1000;
pub const FLAG_B: u8 = 0b0001_0000;
pub const FLAG_UNUSED: u8 = 0b0010_0000;
pub const FLAG_V: u8 = 0b0100_0000;
pub const FLAG_N: u8 = 0b1000_0000;

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use emu6502::StatusFlags;
///
/// let flags = StatusFlags::from_byte(0x00);
/// // Bit 5 reads back as 1 even when packed from zero
/// assert_eq!(flags.to_byte(), 0x20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    /// Carry (set on unsigned overflow, clear on borrow)
    pub carry: bool,
    /// Zero (set if result is zero)
    pub zero: bool,
    /// Interrupt disable (blocks IRQ when set)
    pub interrupt_disable: bool,
    /// Decimal mode (enables BCD arithmetic)
    pub decimal: bool,
    /// Break
    pub break_command: bool,
    /// Overflow (set on signed overflow)
    pub overflow: bool,
    /// Negative (bit 7 of result)
    pub negative: bool,
}

impl StatusFlags {
    /// Unpacks a status byte. Bit 5 is ignored.
    pub fn from_byte(value: u8) -> Self {
        Self {
            carry: value & FLAG_C != 0,
            zero: value & FLAG_Z != 0,
            interrupt_disable: value & FLAG_I != 0,
            decimal: value & FLAG_D != 0,
            break_command: value & FLAG_B != 0,
            overflow: value & FLAG_V != 0,
            negative: value & FLAG_N != 0,
        }
    }

    /// Packs the flags into a status byte with bit 5 set.
    pub fn to_byte(self) -> u8 {
        let mut status = FLAG_UNUSED;
        for (set, mask) in [
            (self.carry, FLAG_C),
            (self.zero, FLAG_Z),
            (self.interrupt_disable, FLAG_I),
            (self.decimal, FLAG_D),
            (self.break_command, FLAG_B),
            (self.overflow, FLAG_V),
            (self.negative, FLAG_N),
        ] {
            if set {
                status |= mask;
            }
        }
        status
    }

    /// Byte pushed by PHP and BRK: B and bit 5 both set.
    pub fn to_pushed_byte(self) -> u8 {
        self.to_byte() | FLAG_B
    }

    /// Restores flags pulled from the stack by PLP or RTI.
    ///
    /// B is not a physical latch, so the pulled byte cannot change it.
    pub fn restore_from_stack(&mut self, value: u8) {
        let break_command = self.break_command;
        *self = Self::from_byte(value);
        self.break_command = break_command;
    }

    /// Sets Z and N from a result byte.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.zero = result == 0;
        self.negative = result & 0x80 != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unused_bit_always_packed() {
        assert_eq!(StatusFlags::default().to_byte(), 0b0010_0000);
        assert_eq!(StatusFlags::from_byte(0xFF).to_byte(), 0xFF);
    }

    #[test]
    fn test_packing_layout() {
        let flags = StatusFlags {
            carry: true,
            negative: true,
            ..StatusFlags::default()
        };
        assert_eq!(flags.to_byte(), 0b1010_0001);
        assert_eq!(flags.to_pushed_byte(), 0b1011_0001);
    }

    #[test]
    fn test_restore_keeps_break() {
        let mut flags = StatusFlags::default();
        flags.restore_from_stack(0xFF);
        assert!(!flags.break_command);
        assert!(flags.carry && flags.zero && flags.negative && flags.overflow);

        flags.break_command = true;
        flags.restore_from_stack(0x00);
        assert!(flags.break_command);
        assert!(!flags.carry);
    }

    #[test]
    fn test_update_zn() {
        let mut flags = StatusFlags::default();
        flags.update_zn(0x00);
        assert!(flags.zero && !flags.negative);
        flags.update_zn(0x80);
        assert!(!flags.zero && flags.negative);
    }
}
