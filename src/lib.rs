//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 CPU emulator: a fetch-decode-execute
//! interpreter covering all 151 documented opcodes, interrupt entry, and
//! per-instruction cycle accounting.
//!
//! The CPU owns no memory. All bus traffic goes through the [`MemoryBus`]
//! trait, so the host decides what lives behind every address: flat RAM,
//! ROM/RAM splits, or memory-mapped I/O. [`FlatMemory`] provides a plain
//! 64 KiB RAM for tests and simple hosts, and [`HostBus`] adapts a pair of
//! read/write closures for hosts built around raw callbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{CycleMethod, FlatMemory, MemoryBus, CPU};
//!
//! let mut memory = FlatMemory::new();
//! // LDA #$05; ADC #$03 at 0x0300
//! memory.write(0x0300, 0xA9);
//! memory.write(0x0301, 0x05);
//! memory.write(0x0302, 0x69);
//! memory.write(0x0303, 0x03);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset(0x0300); // seeds the reset vector, then resets
//!
//! let mut cycles = 0u64;
//! cpu.run(4, &mut cycles, CycleMethod::CycleCount);
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cycles, 4);
//! ```
//!
//! ## Architecture
//!
//! - `cpu` - register file, addressing-mode resolvers, step/run loop,
//!   reset and interrupt entry
//! - `status` - the packed P flag word
//! - `opcodes` - the immutable 256-entry dispatch table
//! - `addressing` - addressing mode enumeration
//! - `memory` - the `MemoryBus` trait and bundled implementations
//!
//! The dispatch table maps every opcode byte to an operation tag, an
//! addressing mode, and a base cycle count. Undocumented opcodes carry an
//! illegal sentinel: executing one latches the CPU's illegal-opcode flag and
//! terminates [`CPU::run`]. Page-crossing cycle penalties are not modeled;
//! every instruction costs its base cycle count.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of the public API).
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CycleMethod, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, HostBus, MemoryBus};
pub use opcodes::{Op, OpcodeEntry, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// An opcode byte outside the documented NMOS 6502 set was fetched.
    ///
    /// Contains the offending opcode byte. The CPU's illegal-opcode flag is
    /// latched as well, so a subsequent `run` returns without executing.
    IllegalOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode(opcode) => {
                write!(f, "Illegal opcode 0x{:02X}", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
