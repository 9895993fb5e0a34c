//! # CPU Configuration
//!
//! Behavior switches that differ between 6502 variants and host needs.
//! Both settings default to the NMOS 6502 as a standalone interpreter: BCD
//! arithmetic enabled, BRK halts the run.

/// What BRK does when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrkBehavior {
    /// Set B, step past the opcode byte and halt the CPU.
    #[default]
    Halt,

    /// Run the hardware break sequence: push PC+2 and status, set I,
    /// and continue at the address in the IRQ/BRK vector ($FFFE/$FFFF).
    Interrupt,
}

/// Configuration for a [`Cpu`](crate::Cpu).
///
/// # Examples
///
/// ```
/// use emu6502::{BrkBehavior, CpuConfig};
///
/// // Ricoh 2A03 style core: no BCD, BRK vectors through $FFFE
/// let config = CpuConfig::default()
///     .with_decimal_mode(false)
///     .with_brk_behavior(BrkBehavior::Interrupt);
///
/// assert!(!config.decimal_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Honor the D flag in ADC/SBC.
    pub decimal_mode: bool,

    /// BRK handling.
    pub brk_behavior: BrkBehavior,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            decimal_mode: true,
            brk_behavior: BrkBehavior::Halt,
        }
    }
}

impl CpuConfig {
    pub fn with_decimal_mode(mut self, enabled: bool) -> Self {
        self.decimal_mode = enabled;
        self
    }

    pub fn with_brk_behavior(mut self, behavior: BrkBehavior) -> Self {
        self.brk_behavior = behavior;
        self
    }
}
