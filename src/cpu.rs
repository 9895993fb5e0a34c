//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state and
//! the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: [`StatusFlags`]
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Run state**: Running until BRK halts it or an illegal opcode is fetched
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute up to a number of instructions
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! A halted CPU never runs again; construct a new one to resume.

use crate::addressing::{self, IndexRegisters, Operand};
use crate::{instructions, lookup, CpuConfig, ExecutionError, MemoryBus, StatusFlags, StepOutcome};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Reset vector location (little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Whether the CPU accepts further steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Halted,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its memory exclusively.
///
/// # Examples
///
/// ```
/// use emu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let cpu = Cpu::power_on(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.cycles(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) flags: StatusFlags,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) state: RunState,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU with every register zeroed and the default configuration.
    ///
    /// PC and SP start at zero, all flags are clear (the unused status bit
    /// still reads as 1), and the CPU is running.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, FlatMemory};
    ///
    /// let cpu = Cpu::new(FlatMemory::new());
    /// assert_eq!(cpu.pc(), 0x0000);
    /// assert_eq!(cpu.sp(), 0x00);
    /// assert_eq!(cpu.status(), 0b0010_0000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a zeroed CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flags: StatusFlags::default(),
            cycles: 0,
            state: RunState::Running,
            config,
            memory,
        }
    }

    /// Creates a CPU in the 6502 power-on reset state.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFD
    /// - Interrupt Disable is set
    /// - A, X, Y are zeroed and the cycle counter starts at 0
    pub fn power_on(memory: M) -> Self {
        Self::power_on_with_config(memory, CpuConfig::default())
    }

    /// [`Cpu::power_on`] with an explicit configuration.
    pub fn power_on_with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self::with_config(memory, config);
        cpu.pc = cpu.read_word(RESET_VECTOR);
        cpu.sp = 0xFD;
        cpu.flags.interrupt_disable = true;
        log::debug!("power-on reset, PC=${:04X}", cpu.pc);
        cpu
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in the opcode table
    /// 3. Read the operand bytes and resolve the addressing mode
    /// 4. Advance PC past the instruction
    /// 5. Execute the operation (which may overwrite PC)
    /// 6. Add the instruction's cycle cost
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Continue)` if the instruction executed
    /// - `Ok(StepOutcome::Halt)` if BRK halted the CPU, or if it was already halted
    /// - `Err(ExecutionError::IllegalOpcode { .. })` if the opcode is undocumented;
    ///   the CPU halts with its state untouched
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, ExecutionError, FlatMemory, StepOutcome};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem[0x0000] = 0xEA; // NOP
    /// mem[0x0001] = 0xFF; // illegal
    ///
    /// let mut cpu = Cpu::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0xFF, pc: 0x0001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0001);
    /// assert!(cpu.is_halted());
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if self.state == RunState::Halted {
            return Ok(StepOutcome::Halt);
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc);

        let Some(metadata) = lookup(opcode) else {
            log::warn!("illegal opcode 0x{:02X} at ${:04X}, halting", opcode, pc);
            self.state = RunState::Halted;
            return Err(ExecutionError::IllegalOpcode { opcode, pc });
        };

        let mut operands = [0u8; 2];
        for (i, byte) in operands
            .iter_mut()
            .take(metadata.operand_bytes() as usize)
            .enumerate()
        {
            *byte = self.memory.read(pc.wrapping_add(1 + i as u16));
        }

        let next_pc = pc.wrapping_add(metadata.size_bytes() as u16);
        let operand = addressing::resolve(
            metadata.addressing_mode,
            IndexRegisters {
                x: self.x,
                y: self.y,
            },
            &self.memory,
            next_pc,
            operands,
        );

        log::trace!(
            "${:04X}  {:02X}  {} {:?}",
            pc,
            opcode,
            metadata.mnemonic(),
            operand
        );

        self.pc = next_pc;

        let mut cycles = metadata.base_cycles as u64;
        if metadata.operation.has_page_cross_penalty() && operand.page_crossed() {
            cycles += 1;
        }
        self.cycles += cycles;

        let outcome = instructions::execute(self, metadata.operation, operand);
        if outcome == StepOutcome::Halt {
            self.state = RunState::Halted;
        }
        Ok(outcome)
    }

    /// Executes up to `max_steps` instructions, stopping early on halt.
    ///
    /// Returns `StepOutcome::Halt` if the CPU halted and
    /// `StepOutcome::Continue` if the step limit was reached first.
    pub fn run(&mut self, max_steps: usize) -> Result<StepOutcome, ExecutionError> {
        for _ in 0..max_steps {
            if self.step()? == StepOutcome::Halt {
                return Ok(StepOutcome::Halt);
            }
        }
        Ok(StepOutcome::Continue)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted, the CPU halts,
    /// or an error occurs. Returns the number of cycles consumed (may be slightly
    /// more than budget due to instruction granularity).
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// for addr in 0x0000..0x0010 {
    ///     mem[addr] = 0xEA; // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = Cpu::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x0005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            if self.step()? == StepOutcome::Halt {
                break;
            }
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Operand and Stack Access ==========

    /// Reads the value of a resolved operand.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address { addr, .. } => self.memory.read(addr),
            Operand::Accumulator | Operand::Implied => self.a,
        }
    }

    /// Writes through a resolved operand.
    ///
    /// Literal and implied operands are not writable; the opcode table never
    /// pairs them with a writing operation, so such writes are dropped.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address { addr, .. } => self.memory.write(addr, value),
            Operand::Accumulator => self.a = value,
            Operand::Immediate(_) | Operand::Implied => {
                log::error!("write of 0x{:02X} to non-writable operand {:?}", value, operand);
            }
        }
    }

    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        addressing::word(self.memory.read(addr), self.memory.read(addr.wrapping_add(1)))
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian on the stack.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(high);
        self.push(low);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        addressing::word(low, high)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns whether the CPU is running or halted.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Returns true once BRK or an illegal opcode has halted the CPU.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus, e.g. to load a program.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flags.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    // ========== Setters (host tooling and tests) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer (offset into page 0x01).
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces every flag from a packed status byte. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flags = StatusFlags::from_byte(value);
    }

    /// Replaces every flag at once.
    pub fn set_flags(&mut self, flags: StatusFlags) {
        self.flags = flags;
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flags.negative = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flags.overflow = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flags.break_command = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flags.decimal = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flags.interrupt_disable = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_cpu_initialization() {
        let cpu = Cpu::new(FlatMemory::new());

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0x00);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.status(), 0b0010_0000);
        assert_eq!(cpu.run_state(), RunState::Running);
    }

    #[test]
    fn test_power_on_reads_reset_vector() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);

        let cpu = Cpu::power_on(mem);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert!(cpu.flag_i());
        assert_eq!(cpu.status() & 0b0010_0100, 0b0010_0100);
    }

    #[test]
    fn test_stack_wraps_within_page() {
        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_layout() {
        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.set_sp(0xFF);

        cpu.push_word(0x1234);
        assert_eq!(cpu.memory().read(0x01FF), 0x12);
        assert_eq!(cpu.memory().read(0x01FE), 0x34);
        assert_eq!(cpu.pull_word(), 0x1234);
    }

    #[test]
    fn test_operand_fetch_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xA9); // LDA #imm, operand at 0x0000
        mem.write(0x0000, 0x77);

        let mut cpu = Cpu::new(mem);
        cpu.set_pc(0xFFFF);
        cpu.step().unwrap();

        assert_eq!(cpu.a(), 0x77);
        assert_eq!(cpu.pc(), 0x0001);
    }

    #[test]
    fn test_halted_cpu_stays_halted() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0x00); // BRK
        mem.write(0x0001, 0xEA);

        let mut cpu = Cpu::new(mem);
        assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
        let pc = cpu.pc();
        let cycles = cpu.cycles();

        assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
        assert_eq!(cpu.pc(), pc);
        assert_eq!(cpu.cycles(), cycles);
    }

    #[test]
    fn test_run_for_cycles_stops_on_halt() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0xEA); // NOP
        mem.write(0x0001, 0x00); // BRK

        let mut cpu = Cpu::new(mem);
        assert_eq!(cpu.run_for_cycles(1000), Ok(9));
        assert!(cpu.is_halted());
    }
}
