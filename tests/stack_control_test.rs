//! Tests for stack operations and control flow: PHA, PLA, PHP, PLP,
//! JMP, JSR, RTS, RTI and BRK.

use emu6502::{BrkBehavior, Cpu, CpuConfig, FlatMemory, MemoryBus, StepOutcome};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    setup_cpu_with(CpuConfig::default())
}

fn setup_cpu_with(config: CpuConfig) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::power_on_with_config(memory, config)
}

// ========== Stack ==========

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    // PHA; LDA #$00; PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.sp(), 0xFC);

    cpu.step().unwrap();
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 3 + 2 + 4);
}

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1000_0001); // N and C only
    cpu.memory_mut().write(0x8000, 0x08);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0b1011_0001);
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_keeps_unused_bit_and_break() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x00);
    cpu.memory_mut().write(0x8000, 0x28);

    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0b0010_0000);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_plp_restores_flags() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0b1100_1011);
    cpu.memory_mut().write(0x8000, 0x28);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(!cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_stack_pointer_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);
    cpu.set_a(0x11);
    cpu.memory_mut().write(0x8000, 0x48); // PHA

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x11);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== Jumps and Subroutines ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jsr_pushes_return_minus_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(cpu.memory().read(0x01FD), 0x80); // high byte
    assert_eq!(cpu.memory().read(0x01FC), 0x02); // low byte of $8002
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();
    // JSR $9000; LDX #$01
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90, 0xA2, 0x01]);
    // $9000: LDA #$42; RTS
    cpu.memory_mut().load(0x9000, &[0xA9, 0x42, 0x60]);

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x8005);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 6 + 2 + 6 + 2);
}

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu();
    // Stack: status, PCL, PCH (as pushed by an interrupt)
    cpu.set_sp(0xFA);
    cpu.memory_mut().write(0x01FB, 0b1100_0011);
    cpu.memory_mut().write(0x01FC, 0x34);
    cpu.memory_mut().write(0x01FD, 0x12);
    cpu.memory_mut().write(0x8000, 0x40);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234); // no +1, unlike RTS
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n() && cpu.flag_v() && cpu.flag_z() && cpu.flag_c());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cycles(), 6);
}

// ========== BRK ==========

#[test]
fn test_brk_halts_by_default() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    let sp = cpu.sp();

    assert_eq!(cpu.step(), Ok(StepOutcome::Halt));

    assert!(cpu.is_halted());
    assert!(cpu.flag_b());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), sp);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_brk_interrupt_sequence() {
    let mut cpu = setup_cpu_with(CpuConfig::default().with_brk_behavior(BrkBehavior::Interrupt));
    cpu.memory_mut().write(0xFFFE, 0x00);
    cpu.memory_mut().write(0xFFFF, 0x90);
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));

    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(cpu.memory().read(0x01FD), 0x80); // PCH of $8002
    assert_eq!(cpu.memory().read(0x01FC), 0x02); // PCL
    assert_eq!(cpu.memory().read(0x01FB), 0b0011_0001); // B, unused, C
    assert!(!cpu.is_halted());
}

#[test]
fn test_brk_rti_resumes_after_padding_byte() {
    let mut cpu = setup_cpu_with(CpuConfig::default().with_brk_behavior(BrkBehavior::Interrupt));
    cpu.memory_mut().write(0xFFFE, 0x00);
    cpu.memory_mut().write(0xFFFF, 0x90);
    // BRK; padding; LDA #$07
    cpu.memory_mut().load(0x8000, &[0x00, 0xEA, 0xA9, 0x07]);
    // $9000: RTI
    cpu.memory_mut().write(0x9000, 0x40);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.pc(), 0x8004);
}
