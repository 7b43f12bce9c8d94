//! # CPU State and Execution
//!
//! The CPU struct holds the architectural register file (A, X, Y, SP, PC, P)
//! and drives the fetch-decode-execute loop over a [`MemoryBus`].
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction
//! - `run()`: execute against a signed cycle budget, accumulating consumed
//!   cycles into a caller-owned counter
//!
//! Each iteration fetches the opcode byte at PC, indexes the dispatch table,
//! runs the addressing-mode resolver (which consumes operand bytes and
//! advances PC), then runs the operation. Interrupts are delivered by the
//! host calling [`CPU::irq`] / [`CPU::nmi`] between instructions, which
//! matches the hardware's between-instruction interrupt timing.

use crate::addressing::AddressingMode;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::MemoryBus;
use crate::opcodes::{Op, OPCODE_TABLE};
use crate::status::Status;
use crate::ExecutionError;

/// NMI vector location (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// How [`CPU::run`] charges the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMethod {
    /// Each instruction costs its base cycle count.
    CycleCount,
    /// Each instruction costs one unit regardless of its cycle count.
    InstructionCount,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait; the
/// CPU borrows all memory access through it and caches nothing.
///
/// # Examples
///
/// ```
/// use mos6502::{CycleMethod, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0300, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset(0x0300);
/// assert_eq!(cpu.pc(), 0x0300);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// let mut cycles = 0u64;
/// cpu.run(2, &mut cycles, CycleMethod::CycleCount);
/// assert_eq!(cpu.pc(), 0x0301);
/// assert_eq!(cycles, 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Program counter.
    pub(crate) pc: u16,

    /// Stack pointer; the full stack address is 0x0100 + SP.
    pub(crate) sp: u8,

    /// Packed processor status word.
    pub(crate) p: Status,

    /// Latched when an undocumented opcode is fetched; halts `run`.
    pub(crate) illegal_opcode: bool,

    /// Total cycles executed since construction.
    pub(crate) cycles: u64,

    /// Memory bus implementation.
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU bound to the given memory bus.
    ///
    /// Registers hold power-on values (A = X = Y = 0, SP = 0xFD, only U set
    /// in P, PC = 0). Call [`CPU::reset`] to seed the reset vector and start
    /// execution at a known address.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            p: Status::new(),
            illegal_opcode: false,
            cycles: 0,
            memory,
        }
    }

    /// Writes `start` to the reset vector, then performs a reset.
    ///
    /// A, X, and Y are cleared, SP becomes 0xFD, U is forced in P (other
    /// flags are left as-is), the illegal-opcode flag is cleared, and PC is
    /// loaded from the reset vector it just wrote.
    pub fn reset(&mut self, start: u16) {
        self.memory.write(RESET_VECTOR, start as u8);
        self.memory.write(RESET_VECTOR + 1, (start >> 8) as u8);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;

        self.pc = self.read_vector(RESET_VECTOR);
        self.sp = 0xFD;
        self.p.set(Status::U, true);
        self.illegal_opcode = false;
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC, resolves its addressing mode (consuming any
    /// operand bytes), executes the operation, and charges the base cycle
    /// count. Fetching an undocumented opcode latches the illegal-opcode
    /// flag and returns [`ExecutionError::IllegalOpcode`].
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let opcode = self.fetch();
        let entry = &OPCODE_TABLE[opcode as usize];
        let src = self.resolve(entry.mode);

        if entry.op == Op::Illegal {
            self.illegal_opcode = true;
            return Err(ExecutionError::IllegalOpcode(opcode));
        }

        self.execute(entry.op, src);
        self.cycles += u64::from(entry.base_cycles);
        Ok(())
    }

    /// Runs until the budget is exhausted or an illegal opcode halts the
    /// loop.
    ///
    /// Cycles consumed are added to `cycle_count` (and to the CPU's own
    /// running total). `method` selects whether the budget is charged per
    /// cycle or per instruction. The budget may be overshot by the final
    /// instruction's cycle count; it is never undershot.
    pub fn run(&mut self, budget: i32, cycle_count: &mut u64, method: CycleMethod) {
        let mut remaining = budget;
        while remaining > 0 && !self.illegal_opcode {
            let before = self.cycles;
            let _ = self.step();
            let spent = self.cycles - before;
            *cycle_count += spent;
            remaining -= match method {
                CycleMethod::CycleCount => spent as i32,
                CycleMethod::InstructionCount => 1,
            };
        }
    }

    /// Raises a maskable interrupt.
    ///
    /// Ignored while the I flag is set. Otherwise clears B, pushes PC and P,
    /// sets I, and loads PC from the IRQ vector.
    pub fn irq(&mut self) {
        if !self.p.contains(Status::I) {
            self.interrupt(IRQ_VECTOR);
        }
    }

    /// Raises a non-maskable interrupt.
    ///
    /// Same stack frame as an IRQ, but never masked and vectoring through
    /// 0xFFFA.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
    }

    fn interrupt(&mut self, vector: u16) {
        self.p.set(Status::B, false);
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);
        self.push(self.p.bits());
        self.p.set(Status::I, true);
        self.pc = self.read_vector(vector);
    }

    // ========== Fetch and Addressing-Mode Resolution ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads a little-endian word at PC and advances PC twice.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = u16::from(self.fetch());
        let hi = u16::from(self.fetch());
        (hi << 8) | lo
    }

    /// Computes the effective source address for `mode`, consuming operand
    /// bytes at PC.
    ///
    /// Implicit and Accumulator return a don't-care value; their operations
    /// never issue a bus read for the source.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => u16::from(self.fetch()),
            AddressingMode::ZeroPageX => u16::from(self.fetch().wrapping_add(self.x)),
            AddressingMode::ZeroPageY => u16::from(self.fetch().wrapping_add(self.y)),
            AddressingMode::Relative => {
                let offset = self.fetch() as i8;
                self.pc.wrapping_add(offset as u16)
            }
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(u16::from(self.x)),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(u16::from(self.y)),
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = u16::from(self.memory.read(ptr));
                // NMOS quirk: the high byte comes from the start of the same
                // page when the pointer sits at 0xXXFF.
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = u16::from(self.memory.read(hi_addr));
                (hi << 8) | lo
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                let lo = u16::from(self.memory.read(u16::from(zp)));
                let hi = u16::from(self.memory.read(u16::from(zp.wrapping_add(1))));
                (hi << 8) | lo
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch();
                let lo = u16::from(self.memory.read(u16::from(zp)));
                let hi = u16::from(self.memory.read(u16::from(zp.wrapping_add(1))));
                ((hi << 8) | lo).wrapping_add(u16::from(self.y))
            }
        }
    }

    fn execute(&mut self, op: Op, src: u16) {
        match op {
            Op::Adc => alu::execute_adc(self, src),
            Op::And => alu::execute_and(self, src),
            Op::Asl => shifts::execute_asl(self, src),
            Op::AslA => shifts::execute_asl_acc(self),
            Op::Bcc => branches::execute_bcc(self, src),
            Op::Bcs => branches::execute_bcs(self, src),
            Op::Beq => branches::execute_beq(self, src),
            Op::Bit => alu::execute_bit(self, src),
            Op::Bmi => branches::execute_bmi(self, src),
            Op::Bne => branches::execute_bne(self, src),
            Op::Bpl => branches::execute_bpl(self, src),
            Op::Brk => control::execute_brk(self),
            Op::Bvc => branches::execute_bvc(self, src),
            Op::Bvs => branches::execute_bvs(self, src),
            Op::Clc => flags::execute_clc(self),
            Op::Cld => flags::execute_cld(self),
            Op::Cli => flags::execute_cli(self),
            Op::Clv => flags::execute_clv(self),
            Op::Cmp => alu::execute_cmp(self, src),
            Op::Cpx => alu::execute_cpx(self, src),
            Op::Cpy => alu::execute_cpy(self, src),
            Op::Dec => inc_dec::execute_dec(self, src),
            Op::Dex => inc_dec::execute_dex(self),
            Op::Dey => inc_dec::execute_dey(self),
            Op::Eor => alu::execute_eor(self, src),
            Op::Inc => inc_dec::execute_inc(self, src),
            Op::Inx => inc_dec::execute_inx(self),
            Op::Iny => inc_dec::execute_iny(self),
            Op::Jmp => control::execute_jmp(self, src),
            Op::Jsr => control::execute_jsr(self, src),
            Op::Lda => load_store::execute_lda(self, src),
            Op::Ldx => load_store::execute_ldx(self, src),
            Op::Ldy => load_store::execute_ldy(self, src),
            Op::Lsr => shifts::execute_lsr(self, src),
            Op::LsrA => shifts::execute_lsr_acc(self),
            Op::Nop => control::execute_nop(self),
            Op::Ora => alu::execute_ora(self, src),
            Op::Pha => stack::execute_pha(self),
            Op::Php => stack::execute_php(self),
            Op::Pla => stack::execute_pla(self),
            Op::Plp => stack::execute_plp(self),
            Op::Rol => shifts::execute_rol(self, src),
            Op::RolA => shifts::execute_rol_acc(self),
            Op::Ror => shifts::execute_ror(self, src),
            Op::RorA => shifts::execute_ror_acc(self),
            Op::Rti => control::execute_rti(self),
            Op::Rts => control::execute_rts(self),
            Op::Sbc => alu::execute_sbc(self, src),
            Op::Sec => flags::execute_sec(self),
            Op::Sed => flags::execute_sed(self),
            Op::Sei => flags::execute_sei(self),
            Op::Sta => load_store::execute_sta(self, src),
            Op::Stx => load_store::execute_stx(self, src),
            Op::Sty => load_store::execute_sty(self, src),
            Op::Tax => transfer::execute_tax(self),
            Op::Tay => transfer::execute_tay(self),
            Op::Tsx => transfer::execute_tsx(self),
            Op::Txa => transfer::execute_txa(self),
            Op::Txs => transfer::execute_txs(self),
            Op::Tya => transfer::execute_tya(self),
            Op::Illegal => self.illegal_opcode = true,
        }
    }

    // ========== Stack and Vector Access ==========

    /// Pushes a byte at 0x0100 + SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 + u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at 0x0100 + SP.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 + u16::from(self.sp))
    }

    pub(crate) fn read_vector(&self, vector: u16) -> u16 {
        let lo = u16::from(self.memory.read(vector));
        let hi = u16::from(self.memory.read(vector.wrapping_add(1)));
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward from
    /// 0x01FF. Hosts that treat a top-level RTS as program completion can
    /// watch for SP reading 0xFF here after each instruction.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status byte (bit 7 to bit 0: N V U B D I Z C).
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns total cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True once an undocumented opcode has been fetched.
    ///
    /// Cleared only by [`CPU::reset`].
    pub fn illegal_opcode(&self) -> bool {
        self.illegal_opcode
    }

    // ========== Status Flag Getters ==========

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.p.contains(Status::N)
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.p.contains(Status::V)
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.p.contains(Status::B)
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.p.contains(Status::D)
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.p.contains(Status::I)
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.p.contains(Status::Z)
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.p.contains(Status::C)
    }

    // ========== Register Setters (host and test seams) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the packed status byte.
    pub fn set_status(&mut self, bits: u8) {
        self.p = Status::from_bits(bits);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(Status::C, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(Status::Z, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(Status::I, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(Status::D, value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set(Status::B, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(Status::V, value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(Status::N, value);
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, e.g. for loading programs.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
