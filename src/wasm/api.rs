//! WASM API for the 6502 interpreter.
//!
//! Provides JavaScript-callable interfaces for loading programs, stepping the
//! CPU, and inspecting registers, flags and memory.

use crate::{BrkBehavior, Cpu, CpuConfig, FlatMemory, MemoryBus, StepOutcome};
use wasm_bindgen::prelude::*;

/// Browser-facing emulator: one CPU over 64KB of flat memory.
#[wasm_bindgen]
pub struct Emulator {
    cpu: Cpu<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator. `brk_interrupts` makes BRK vector through $FFFE
    /// instead of halting.
    #[wasm_bindgen(constructor)]
    pub fn new(decimal_mode: bool, brk_interrupts: bool) -> Self {
        let brk_behavior = if brk_interrupts {
            BrkBehavior::Interrupt
        } else {
            BrkBehavior::Halt
        };
        let config = CpuConfig::default()
            .with_decimal_mode(decimal_mode)
            .with_brk_behavior(brk_behavior);

        Emulator {
            cpu: Cpu::with_config(FlatMemory::new(), config),
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Execute a single instruction. Returns `true` if the CPU can continue.
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.cpu
            .step()
            .map(|outcome| outcome == StepOutcome::Continue)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|c| c as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the CPU with a fresh one, keeping memory contents.
    ///
    /// PC is set back to the start of the last loaded program.
    pub fn reset(&mut self) {
        let config = *self.cpu.config();
        let memory = std::mem::take(self.cpu.memory_mut());
        self.cpu = Cpu::with_config(memory, config);
        self.cpu.set_pc(self.program_start);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy a 256-byte page of memory into a typed array (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 0x100])
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
