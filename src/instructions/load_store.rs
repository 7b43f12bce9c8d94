//! # Load and Store Instructions
//!
//! Loads update N and Z from the loaded value; stores change no flags.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// LDA: A = M.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.a = cpu.memory.read(src);
    cpu.p.set_nz(cpu.a);
}

/// LDX: X = M.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.x = cpu.memory.read(src);
    cpu.p.set_nz(cpu.x);
}

/// LDY: Y = M.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.y = cpu.memory.read(src);
    cpu.p.set_nz(cpu.y);
}

/// STA: M = A.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.memory.write(src, cpu.a);
}

/// STX: M = X.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.memory.write(src, cpu.x);
}

/// STY: M = Y.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, src: u16) {
    cpu.memory.write(src, cpu.y);
}
