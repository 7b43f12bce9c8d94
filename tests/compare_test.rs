//! CMP, CPX, CPY flag semantics. Registers are never modified.

use mos6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x0300);
    cpu
}

#[test]
fn test_cmp_equal_sets_carry_and_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xC9);
    cpu.memory_mut().write(0x0301, 0x42);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater_sets_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xC9);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.set_a(0x20);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cmp_less_clears_carry_sets_negative() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xC9);
    cpu.memory_mut().write(0x0301, 0x20);
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // 0x10 - 0x20 = 0xF0
}

#[test]
fn test_cpx_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xE0);
    cpu.memory_mut().write(0x0301, 0x07);
    cpu.set_x(0x07);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.x(), 0x07);
}

#[test]
fn test_cpy_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xC4);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.memory_mut().write(0x0010, 0x05);
    cpu.set_y(0x09);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.y(), 0x09);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_cmp_leaves_arithmetic_flags_alone() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xC9);
    cpu.memory_mut().write(0x0301, 0x01);
    cpu.set_a(0x80);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
}
