//! # Stack Instructions
//!
//! PHA/PLA move the accumulator through the stack; PHP/PLP move the status
//! word. PHP pushes with B set in the copy, matching BRK; PLP restores
//! whatever was stored while forcing U back on.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::Status;

/// PHA: push A.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// PHP: push P with B set in the pushed byte.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.p.bits() | Status::B);
}

/// PLA: pop into A; N and Z from the popped value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop();
    cpu.p.set_nz(cpu.a);
}

/// PLP: pop into P, forcing U.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let bits = cpu.pop();
    cpu.p.restore(bits);
}
