//! # Increment and Decrement Instructions
//!
//! Modulo-256 arithmetic on memory (INC/DEC) or the index registers
//! (INX/INY/DEX/DEY). N and Z track the result.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// INC: M = M + 1.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let result = cpu.memory.read(src).wrapping_add(1);
    cpu.p.set_nz(result);
    cpu.memory.write(src, result);
}

/// DEC: M = M - 1.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    let result = cpu.memory.read(src).wrapping_sub(1);
    cpu.p.set_nz(result);
    cpu.memory.write(src, result);
}

/// INX: X = X + 1.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_nz(cpu.x);
}

/// INY: Y = Y + 1.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_nz(cpu.y);
}

/// DEX: X = X - 1.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_nz(cpu.x);
}

/// DEY: Y = Y - 1.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_nz(cpu.y);
}
