//! Fuzz target for one-step execution.
//!
//! Builds an arbitrary register file and memory neighborhood, executes a
//! single instruction, and checks the architectural invariants that must
//! hold afterwards regardless of input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{FlatMemory, MemoryBus, CPU};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    /// Instruction and operand bytes placed at the start address.
    instruction_bytes: [u8; 3],
    /// Zero page contents.
    zero_page: [u8; 256],
    /// Stack page contents.
    stack_page: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.instruction_bytes.iter().enumerate() {
        memory.write(0x0300 + i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.reset(0x0300);
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_sp(input.sp);
    cpu.set_status(input.status);

    // Illegal opcodes are reported, not panicked on.
    let _ = cpu.step();

    // The unused status bit survives everything that rewrites P.
    let opcode = input.instruction_bytes[0];
    if matches!(opcode, 0x28 | 0x40) {
        assert!(cpu.status() & 0x20 != 0);
    }

    // An illegal fetch latches the flag and nothing else runs.
    if cpu.illegal_opcode() {
        assert_eq!(cpu.a(), input.a);
        assert_eq!(cpu.x(), input.x);
        assert_eq!(cpu.y(), input.y);
    }
});
