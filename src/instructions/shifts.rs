//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR in both the read-modify-write memory form and the
//! accumulator form. Each pair shares the bit-twiddling through a value
//! helper so the two forms cannot drift apart.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::Status;

fn asl_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.p.set(Status::C, value & 0x80 != 0);
    let result = value << 1;
    cpu.p.set_nz(result);
    result
}

fn lsr_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.p.set(Status::C, value & 0x01 != 0);
    let result = value >> 1;
    cpu.p.set_nz(result);
    result
}

fn rol_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let mut tmp = u16::from(value) << 1;
    if cpu.p.contains(Status::C) {
        tmp |= 0x01;
    }
    cpu.p.set(Status::C, tmp > 0xFF);
    let result = (tmp & 0xFF) as u8;
    cpu.p.set_nz(result);
    result
}

fn ror_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let mut tmp = u16::from(value);
    if cpu.p.contains(Status::C) {
        tmp |= 0x100;
    }
    cpu.p.set(Status::C, tmp & 0x01 != 0);
    let result = ((tmp >> 1) & 0xFF) as u8;
    cpu.p.set_nz(result);
    result
}

/// ASL on memory: C takes bit 7, operand shifts left.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let m = cpu.memory.read(src);
    let result = asl_value(cpu, m);
    cpu.memory.write(src, result);
}

/// ASL on the accumulator.
pub(crate) fn execute_asl_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.a = asl_value(cpu, value);
}

/// LSR on memory: C takes bit 0, logical shift right clears N.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let m = cpu.memory.read(src);
    let result = lsr_value(cpu, m);
    cpu.memory.write(src, result);
}

/// LSR on the accumulator.
pub(crate) fn execute_lsr_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.a = lsr_value(cpu, value);
}

/// ROL on memory: rotate left through carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let m = cpu.memory.read(src);
    let result = rol_value(cpu, m);
    cpu.memory.write(src, result);
}

/// ROL on the accumulator.
pub(crate) fn execute_rol_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.a = rol_value(cpu, value);
}

/// ROR on memory: rotate right through carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let m = cpu.memory.read(src);
    let result = ror_value(cpu, m);
    cpu.memory.write(src, result);
}

/// ROR on the accumulator.
pub(crate) fn execute_ror_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.a = ror_value(cpu, value);
}
