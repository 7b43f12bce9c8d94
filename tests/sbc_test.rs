//! SBC (Subtract with Carry) semantics, binary and decimal.

use mos6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x0300);
    cpu
}

#[test]
fn test_sbc_immediate_basic() {
    let mut cpu = setup_cpu();

    // SBC #$10 with carry set (no borrow pending)
    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow_in_subtracts_one() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();

    // A = 0x50 minus 0xB0: positive minus negative overflows to negative
    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0xB0);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_sbc_zero_result() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x42);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_borrow_clears_carry() {
    let mut cpu = setup_cpu();

    // 0x10 - 0x20 borrows
    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x20);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_bcd_basic() {
    let mut cpu = setup_cpu();

    // 10 - 01 = 09 in BCD
    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x01);
    cpu.set_a(0x10);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x09);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_bcd_borrow_wraps() {
    let mut cpu = setup_cpu();

    // 00 - 01 = 99 borrow in BCD
    cpu.memory_mut().write(0x0300, 0xE9);
    cpu.memory_mut().write(0x0301, 0x01);
    cpu.set_a(0x00);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0300, 0xE5);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.memory_mut().write(0x0010, 0x05);
    cpu.set_a(0x0A);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.cycles(), 3);
}
