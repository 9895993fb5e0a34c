//! Tests for increment/decrement, register transfer and flag instructions.

use emu6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::power_on(memory)
}

// ========== Increment / Decrement ==========

#[test]
fn test_inc_memory_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_flag_c(false);
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c()); // carry untouched
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_dec_absolute_to_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCE, 0x00, 0x30]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3000), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_index_register_inc_dec() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x7F);
    cpu.set_y(0x01);
    // INX; DEY; DEX; INY
    cpu.memory_mut().load(0x8000, &[0xE8, 0x88, 0xCA, 0xC8]);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x7F);
    assert!(!cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x01);
    assert!(!cpu.flag_z());

    assert_eq!(cpu.cycles(), 8);
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().load(0x8000, &[0xAA, 0xA8]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_y(0x12);
    cpu.set_a(0xFF);
    cpu.memory_mut().load(0x8000, &[0x8A, 0x98]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x12);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tsx_sets_flags_txs_does_not() {
    let mut cpu = setup_cpu();
    // TSX; LDX #$00; TXS
    cpu.memory_mut().load(0x8000, &[0xBA, 0xA2, 0x00, 0x9A]);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert!(cpu.flag_z()); // unchanged by TXS
}

// ========== Flag Instructions ==========

#[test]
fn test_flag_set_and_clear() {
    let mut cpu = setup_cpu();
    // SEC; SED; SEI; CLC; CLD; CLI
    cpu.memory_mut()
        .load(0x8000, &[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);

    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert!(cpu.flag_c());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());

    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.set_flag_v(true);
    cpu.memory_mut().write(0x8000, 0xB8);

    cpu.step().unwrap();

    assert!(!cpu.flag_v());
}

#[test]
fn test_nop_changes_only_pc_and_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x12);
    cpu.memory_mut().write(0x8000, 0xEA);
    let status = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.cycles(), 2);
}
