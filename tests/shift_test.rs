//! Tests for ASL, LSR, ROL and ROR on the accumulator and memory.

use emu6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::power_on(memory)
}

#[test]
fn test_asl_accumulator_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x81);
    cpu.memory_mut().write(0x8000, 0x0A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_asl_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.memory_mut().load(0x8000, &[0x06, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.a(), 0x00); // accumulator untouched
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.memory_mut().write(0x8000, 0x4A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1301, 0xFF);
    cpu.set_x(0x02);
    cpu.memory_mut().load(0x8000, &[0x5E, 0xFF, 0x12]); // LSR $12FF,X

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1301), 0x7F);
    assert!(cpu.flag_c());
    assert_eq!(cpu.cycles(), 7); // read-modify-write: no page penalty on top
}

#[test]
fn test_rol_uses_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x8000, 0x2A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_ror_uses_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x8000, 0x6A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_memory_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0001, 0x02);
    cpu.set_x(0x02);
    cpu.memory_mut().load(0x8000, &[0x76, 0xFF]); // ROR $FF,X

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001), 0x01);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 6);
}
