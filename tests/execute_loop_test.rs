//! Run-loop behavior: budget accounting in both modes, illegal-opcode
//! halting, and the end-to-end program scenarios.

use mos6502::{CycleMethod, ExecutionError, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x0300);
    cpu
}

#[test]
fn test_nop_loop_consumes_exact_budget() {
    let mut cpu = setup_cpu();
    for addr in 0x0300..0x030F {
        cpu.memory_mut().write(addr, 0xEA);
    }

    let mut cycles = 0u64;
    cpu.run(30, &mut cycles, CycleMethod::CycleCount);

    // Fifteen NOPs at two cycles each
    assert_eq!(cpu.pc(), 0x030F);
    assert_eq!(cycles, 30);
    assert!(!cpu.illegal_opcode());
}

#[test]
fn test_addition_chain() {
    let mut cpu = setup_cpu();
    // LDA #$05; ADC #$03; BRK
    cpu.memory_mut().write(0x0300, 0xA9);
    cpu.memory_mut().write(0x0301, 0x05);
    cpu.memory_mut().write(0x0302, 0x69);
    cpu.memory_mut().write(0x0303, 0x03);
    cpu.memory_mut().write(0x0304, 0x00);

    let mut cycles = 0u64;
    cpu.run(4, &mut cycles, CycleMethod::CycleCount);

    assert_eq!(cpu.a(), 0x08);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cycles, 4);
}

#[test]
fn test_run_halts_on_illegal_opcode() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0300, 0xA9); // LDA #$01
    cpu.memory_mut().write(0x0301, 0x01);
    cpu.memory_mut().write(0x0302, 0xFF); // illegal
    cpu.memory_mut().write(0x0303, 0xA9); // never reached
    cpu.memory_mut().write(0x0304, 0x02);

    let mut cycles = 0u64;
    cpu.run(1000, &mut cycles, CycleMethod::CycleCount);

    assert!(cpu.illegal_opcode());
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x0303);
}

#[test]
fn test_run_after_halt_is_a_no_op() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0300, 0x02);

    let mut cycles = 0u64;
    cpu.run(10, &mut cycles, CycleMethod::CycleCount);
    assert!(cpu.illegal_opcode());
    let pc = cpu.pc();

    cpu.run(10, &mut cycles, CycleMethod::CycleCount);
    assert_eq!(cpu.pc(), pc);
    assert_eq!(cycles, 0);
}

#[test]
fn test_step_reports_illegal_opcode() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0300, 0x02);

    assert_eq!(cpu.step(), Err(ExecutionError::IllegalOpcode(0x02)));
    assert!(cpu.illegal_opcode());
}

#[test]
fn test_instruction_count_mode_charges_per_instruction() {
    let mut cpu = setup_cpu();
    // JSR $0310 (6 cycles) then NOPs
    cpu.memory_mut().write(0x0300, 0x20);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.memory_mut().write(0x0302, 0x03);
    for addr in 0x0310..0x0320 {
        cpu.memory_mut().write(addr, 0xEA);
    }

    let mut cycles = 0u64;
    cpu.run(3, &mut cycles, CycleMethod::InstructionCount);

    // JSR + two NOPs regardless of their cycle weights
    assert_eq!(cpu.pc(), 0x0312);
    assert_eq!(cycles, 10);
}

#[test]
fn test_budget_may_overshoot_by_final_instruction() {
    let mut cpu = setup_cpu();
    // Two JSRs of 6 cycles each against a budget of 7
    cpu.memory_mut().write(0x0300, 0x20);
    cpu.memory_mut().write(0x0301, 0x10);
    cpu.memory_mut().write(0x0302, 0x03);
    cpu.memory_mut().write(0x0310, 0x20);
    cpu.memory_mut().write(0x0311, 0x20);
    cpu.memory_mut().write(0x0312, 0x03);

    let mut cycles = 0u64;
    cpu.run(7, &mut cycles, CycleMethod::CycleCount);

    assert_eq!(cycles, 12);
    assert_eq!(cpu.pc(), 0x0320);
}

#[test]
fn test_cumulative_counter_accumulates_across_runs() {
    let mut cpu = setup_cpu();
    for addr in 0x0300..0x0310 {
        cpu.memory_mut().write(addr, 0xEA);
    }

    let mut cycles = 0u64;
    cpu.run(4, &mut cycles, CycleMethod::CycleCount);
    cpu.run(4, &mut cycles, CycleMethod::CycleCount);

    assert_eq!(cycles, 8);
    assert_eq!(cpu.cycles(), 8);
}

#[test]
fn test_countdown_program() {
    let mut cpu = setup_cpu();
    // LDX #$03; DEX; BNE -3; RTS
    cpu.memory_mut().write(0x0300, 0xA2);
    cpu.memory_mut().write(0x0301, 0x03);
    cpu.memory_mut().write(0x0302, 0xCA);
    cpu.memory_mut().write(0x0303, 0xD0);
    cpu.memory_mut().write(0x0304, 0xFD);
    cpu.memory_mut().write(0x0305, 0x60);

    // LDX, three DEX/BNE pairs, RTS
    let mut cycles = 0u64;
    cpu.run(8, &mut cycles, CycleMethod::InstructionCount);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    // Top-level RTS popped past the reset stack top
    assert_eq!(cpu.sp(), 0xFF);
}
