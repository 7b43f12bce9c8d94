//! # Register Transfer Instructions
//!
//! Register-to-register copies. All update N and Z from the moved value
//! except TXS, which changes no flags.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// TAX: X = A.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.p.set_nz(cpu.x);
}

/// TAY: Y = A.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.p.set_nz(cpu.y);
}

/// TSX: X = SP.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.p.set_nz(cpu.x);
}

/// TXA: A = X.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.p.set_nz(cpu.a);
}

/// TYA: A = Y.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.p.set_nz(cpu.a);
}

/// TXS: SP = X. No flag changes.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
