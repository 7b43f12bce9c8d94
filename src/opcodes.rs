//! # Opcode Dispatch Table
//!
//! The immutable 256-entry table mapping every opcode byte to its operation
//! tag, addressing mode, and base cycle count. It is the single source of
//! truth for decoding: `CPU::step` indexes it with the fetched byte and
//! matches on the tags, so dispatch never goes through dynamic calls.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values carry [`Op::Illegal`]; fetching one latches the CPU's
//! illegal-opcode flag and halts the run loop.
//!
//! Base cycle counts are the datasheet values and exclude page-crossing
//! penalties, which this core does not model.

use crate::addressing::AddressingMode;

/// Operation tag for one of the 56 documented instructions.
///
/// Shift and rotate instructions have a separate accumulator variant so the
/// executor never has to re-inspect the addressing mode to decide between a
/// memory operand and A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    AslA,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    LsrA,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolA,
    Ror,
    RorA,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Sentinel for the 105 undocumented opcodes. Halts the run loop.
    Illegal,
}

impl Op {
    /// Three-letter assembler mnemonic, or "???" for the illegal sentinel.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Op::Adc => "ADC",
            Op::And => "AND",
            Op::Asl | Op::AslA => "ASL",
            Op::Bcc => "BCC",
            Op::Bcs => "BCS",
            Op::Beq => "BEQ",
            Op::Bit => "BIT",
            Op::Bmi => "BMI",
            Op::Bne => "BNE",
            Op::Bpl => "BPL",
            Op::Brk => "BRK",
            Op::Bvc => "BVC",
            Op::Bvs => "BVS",
            Op::Clc => "CLC",
            Op::Cld => "CLD",
            Op::Cli => "CLI",
            Op::Clv => "CLV",
            Op::Cmp => "CMP",
            Op::Cpx => "CPX",
            Op::Cpy => "CPY",
            Op::Dec => "DEC",
            Op::Dex => "DEX",
            Op::Dey => "DEY",
            Op::Eor => "EOR",
            Op::Inc => "INC",
            Op::Inx => "INX",
            Op::Iny => "INY",
            Op::Jmp => "JMP",
            Op::Jsr => "JSR",
            Op::Lda => "LDA",
            Op::Ldx => "LDX",
            Op::Ldy => "LDY",
            Op::Lsr | Op::LsrA => "LSR",
            Op::Nop => "NOP",
            Op::Ora => "ORA",
            Op::Pha => "PHA",
            Op::Php => "PHP",
            Op::Pla => "PLA",
            Op::Plp => "PLP",
            Op::Rol | Op::RolA => "ROL",
            Op::Ror | Op::RorA => "ROR",
            Op::Rti => "RTI",
            Op::Rts => "RTS",
            Op::Sbc => "SBC",
            Op::Sec => "SEC",
            Op::Sed => "SED",
            Op::Sei => "SEI",
            Op::Sta => "STA",
            Op::Stx => "STX",
            Op::Sty => "STY",
            Op::Tax => "TAX",
            Op::Tay => "TAY",
            Op::Tsx => "TSX",
            Op::Txa => "TXA",
            Op::Txs => "TXS",
            Op::Tya => "TYA",
            Op::Illegal => "???",
        }
    }
}

/// One dispatch table entry: what to do, how to address it, what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Operation tag.
    pub op: Op,

    /// Addressing mode; its resolver runs before the operation.
    pub mode: AddressingMode,

    /// Base cycle cost. Illegal entries cost 0.
    pub base_cycles: u8,
}

impl OpcodeEntry {
    /// Entry used for all undocumented opcodes.
    pub const ILLEGAL: OpcodeEntry = OpcodeEntry {
        op: Op::Illegal,
        mode: AddressingMode::Implicit,
        base_cycles: 0,
    };

    /// True for the 151 documented opcodes.
    pub const fn is_legal(&self) -> bool {
        !matches!(self.op, Op::Illegal)
    }
}

const fn e(op: Op, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        op,
        mode,
        base_cycles,
    }
}

/// Complete 256-entry dispatch table indexed by opcode byte.
///
/// Constructed once at compile time and never mutated; it is safe to share
/// across any number of CPU instances.
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    /* 0x00: BRK        */ e(Op::Brk, AddressingMode::Implicit, 7),
    /* 0x01: ORA (zp,X) */ e(Op::Ora, AddressingMode::IndirectX, 6),
    /* 0x02 */ OpcodeEntry::ILLEGAL,
    /* 0x03 */ OpcodeEntry::ILLEGAL,
    /* 0x04 */ OpcodeEntry::ILLEGAL,
    /* 0x05: ORA zp     */ e(Op::Ora, AddressingMode::ZeroPage, 3),
    /* 0x06: ASL zp     */ e(Op::Asl, AddressingMode::ZeroPage, 5),
    /* 0x07 */ OpcodeEntry::ILLEGAL,
    /* 0x08: PHP        */ e(Op::Php, AddressingMode::Implicit, 3),
    /* 0x09: ORA #imm   */ e(Op::Ora, AddressingMode::Immediate, 2),
    /* 0x0A: ASL A      */ e(Op::AslA, AddressingMode::Accumulator, 2),
    /* 0x0B */ OpcodeEntry::ILLEGAL,
    /* 0x0C */ OpcodeEntry::ILLEGAL,
    /* 0x0D: ORA abs    */ e(Op::Ora, AddressingMode::Absolute, 4),
    /* 0x0E: ASL abs    */ e(Op::Asl, AddressingMode::Absolute, 6),
    /* 0x0F */ OpcodeEntry::ILLEGAL,
    /* 0x10: BPL rel    */ e(Op::Bpl, AddressingMode::Relative, 2),
    /* 0x11: ORA (zp),Y */ e(Op::Ora, AddressingMode::IndirectY, 5),
    /* 0x12 */ OpcodeEntry::ILLEGAL,
    /* 0x13 */ OpcodeEntry::ILLEGAL,
    /* 0x14 */ OpcodeEntry::ILLEGAL,
    /* 0x15: ORA zp,X   */ e(Op::Ora, AddressingMode::ZeroPageX, 4),
    /* 0x16: ASL zp,X   */ e(Op::Asl, AddressingMode::ZeroPageX, 6),
    /* 0x17 */ OpcodeEntry::ILLEGAL,
    /* 0x18: CLC        */ e(Op::Clc, AddressingMode::Implicit, 2),
    /* 0x19: ORA abs,Y  */ e(Op::Ora, AddressingMode::AbsoluteY, 4),
    /* 0x1A */ OpcodeEntry::ILLEGAL,
    /* 0x1B */ OpcodeEntry::ILLEGAL,
    /* 0x1C */ OpcodeEntry::ILLEGAL,
    /* 0x1D: ORA abs,X  */ e(Op::Ora, AddressingMode::AbsoluteX, 4),
    /* 0x1E: ASL abs,X  */ e(Op::Asl, AddressingMode::AbsoluteX, 7),
    /* 0x1F */ OpcodeEntry::ILLEGAL,
    /* 0x20: JSR abs    */ e(Op::Jsr, AddressingMode::Absolute, 6),
    /* 0x21: AND (zp,X) */ e(Op::And, AddressingMode::IndirectX, 6),
    /* 0x22 */ OpcodeEntry::ILLEGAL,
    /* 0x23 */ OpcodeEntry::ILLEGAL,
    /* 0x24: BIT zp     */ e(Op::Bit, AddressingMode::ZeroPage, 3),
    /* 0x25: AND zp     */ e(Op::And, AddressingMode::ZeroPage, 3),
    /* 0x26: ROL zp     */ e(Op::Rol, AddressingMode::ZeroPage, 5),
    /* 0x27 */ OpcodeEntry::ILLEGAL,
    /* 0x28: PLP        */ e(Op::Plp, AddressingMode::Implicit, 4),
    /* 0x29: AND #imm   */ e(Op::And, AddressingMode::Immediate, 2),
    /* 0x2A: ROL A      */ e(Op::RolA, AddressingMode::Accumulator, 2),
    /* 0x2B */ OpcodeEntry::ILLEGAL,
    /* 0x2C: BIT abs    */ e(Op::Bit, AddressingMode::Absolute, 4),
    /* 0x2D: AND abs    */ e(Op::And, AddressingMode::Absolute, 4),
    /* 0x2E: ROL abs    */ e(Op::Rol, AddressingMode::Absolute, 6),
    /* 0x2F */ OpcodeEntry::ILLEGAL,
    /* 0x30: BMI rel    */ e(Op::Bmi, AddressingMode::Relative, 2),
    /* 0x31: AND (zp),Y */ e(Op::And, AddressingMode::IndirectY, 5),
    /* 0x32 */ OpcodeEntry::ILLEGAL,
    /* 0x33 */ OpcodeEntry::ILLEGAL,
    /* 0x34 */ OpcodeEntry::ILLEGAL,
    /* 0x35: AND zp,X   */ e(Op::And, AddressingMode::ZeroPageX, 4),
    /* 0x36: ROL zp,X   */ e(Op::Rol, AddressingMode::ZeroPageX, 6),
    /* 0x37 */ OpcodeEntry::ILLEGAL,
    /* 0x38: SEC        */ e(Op::Sec, AddressingMode::Implicit, 2),
    /* 0x39: AND abs,Y  */ e(Op::And, AddressingMode::AbsoluteY, 4),
    /* 0x3A */ OpcodeEntry::ILLEGAL,
    /* 0x3B */ OpcodeEntry::ILLEGAL,
    /* 0x3C */ OpcodeEntry::ILLEGAL,
    /* 0x3D: AND abs,X  */ e(Op::And, AddressingMode::AbsoluteX, 4),
    /* 0x3E: ROL abs,X  */ e(Op::Rol, AddressingMode::AbsoluteX, 7),
    /* 0x3F */ OpcodeEntry::ILLEGAL,
    /* 0x40: RTI        */ e(Op::Rti, AddressingMode::Implicit, 6),
    /* 0x41: EOR (zp,X) */ e(Op::Eor, AddressingMode::IndirectX, 6),
    /* 0x42 */ OpcodeEntry::ILLEGAL,
    /* 0x43 */ OpcodeEntry::ILLEGAL,
    /* 0x44 */ OpcodeEntry::ILLEGAL,
    /* 0x45: EOR zp     */ e(Op::Eor, AddressingMode::ZeroPage, 3),
    /* 0x46: LSR zp     */ e(Op::Lsr, AddressingMode::ZeroPage, 5),
    /* 0x47 */ OpcodeEntry::ILLEGAL,
    /* 0x48: PHA        */ e(Op::Pha, AddressingMode::Implicit, 3),
    /* 0x49: EOR #imm   */ e(Op::Eor, AddressingMode::Immediate, 2),
    /* 0x4A: LSR A      */ e(Op::LsrA, AddressingMode::Accumulator, 2),
    /* 0x4B */ OpcodeEntry::ILLEGAL,
    /* 0x4C: JMP abs    */ e(Op::Jmp, AddressingMode::Absolute, 3),
    /* 0x4D: EOR abs    */ e(Op::Eor, AddressingMode::Absolute, 4),
    /* 0x4E: LSR abs    */ e(Op::Lsr, AddressingMode::Absolute, 6),
    /* 0x4F */ OpcodeEntry::ILLEGAL,
    /* 0x50: BVC rel    */ e(Op::Bvc, AddressingMode::Relative, 2),
    /* 0x51: EOR (zp),Y */ e(Op::Eor, AddressingMode::IndirectY, 5),
    /* 0x52 */ OpcodeEntry::ILLEGAL,
    /* 0x53 */ OpcodeEntry::ILLEGAL,
    /* 0x54 */ OpcodeEntry::ILLEGAL,
    /* 0x55: EOR zp,X   */ e(Op::Eor, AddressingMode::ZeroPageX, 4),
    /* 0x56: LSR zp,X   */ e(Op::Lsr, AddressingMode::ZeroPageX, 6),
    /* 0x57 */ OpcodeEntry::ILLEGAL,
    /* 0x58: CLI        */ e(Op::Cli, AddressingMode::Implicit, 2),
    /* 0x59: EOR abs,Y  */ e(Op::Eor, AddressingMode::AbsoluteY, 4),
    /* 0x5A */ OpcodeEntry::ILLEGAL,
    /* 0x5B */ OpcodeEntry::ILLEGAL,
    /* 0x5C */ OpcodeEntry::ILLEGAL,
    /* 0x5D: EOR abs,X  */ e(Op::Eor, AddressingMode::AbsoluteX, 4),
    /* 0x5E: LSR abs,X  */ e(Op::Lsr, AddressingMode::AbsoluteX, 7),
    /* 0x5F */ OpcodeEntry::ILLEGAL,
    /* 0x60: RTS        */ e(Op::Rts, AddressingMode::Implicit, 6),
    /* 0x61: ADC (zp,X) */ e(Op::Adc, AddressingMode::IndirectX, 6),
    /* 0x62 */ OpcodeEntry::ILLEGAL,
    /* 0x63 */ OpcodeEntry::ILLEGAL,
    /* 0x64 */ OpcodeEntry::ILLEGAL,
    /* 0x65: ADC zp     */ e(Op::Adc, AddressingMode::ZeroPage, 3),
    /* 0x66: ROR zp     */ e(Op::Ror, AddressingMode::ZeroPage, 5),
    /* 0x67 */ OpcodeEntry::ILLEGAL,
    /* 0x68: PLA        */ e(Op::Pla, AddressingMode::Implicit, 4),
    /* 0x69: ADC #imm   */ e(Op::Adc, AddressingMode::Immediate, 2),
    /* 0x6A: ROR A      */ e(Op::RorA, AddressingMode::Accumulator, 2),
    /* 0x6B */ OpcodeEntry::ILLEGAL,
    /* 0x6C: JMP (abs)  */ e(Op::Jmp, AddressingMode::Indirect, 5),
    /* 0x6D: ADC abs    */ e(Op::Adc, AddressingMode::Absolute, 4),
    /* 0x6E: ROR abs    */ e(Op::Ror, AddressingMode::Absolute, 6),
    /* 0x6F */ OpcodeEntry::ILLEGAL,
    /* 0x70: BVS rel    */ e(Op::Bvs, AddressingMode::Relative, 2),
    /* 0x71: ADC (zp),Y */ e(Op::Adc, AddressingMode::IndirectY, 6),
    /* 0x72 */ OpcodeEntry::ILLEGAL,
    /* 0x73 */ OpcodeEntry::ILLEGAL,
    /* 0x74 */ OpcodeEntry::ILLEGAL,
    /* 0x75: ADC zp,X   */ e(Op::Adc, AddressingMode::ZeroPageX, 4),
    /* 0x76: ROR zp,X   */ e(Op::Ror, AddressingMode::ZeroPageX, 6),
    /* 0x77 */ OpcodeEntry::ILLEGAL,
    /* 0x78: SEI        */ e(Op::Sei, AddressingMode::Implicit, 2),
    /* 0x79: ADC abs,Y  */ e(Op::Adc, AddressingMode::AbsoluteY, 4),
    /* 0x7A */ OpcodeEntry::ILLEGAL,
    /* 0x7B */ OpcodeEntry::ILLEGAL,
    /* 0x7C */ OpcodeEntry::ILLEGAL,
    /* 0x7D: ADC abs,X  */ e(Op::Adc, AddressingMode::AbsoluteX, 4),
    /* 0x7E: ROR abs,X  */ e(Op::Ror, AddressingMode::AbsoluteX, 7),
    /* 0x7F */ OpcodeEntry::ILLEGAL,
    /* 0x80 */ OpcodeEntry::ILLEGAL,
    /* 0x81: STA (zp,X) */ e(Op::Sta, AddressingMode::IndirectX, 6),
    /* 0x82 */ OpcodeEntry::ILLEGAL,
    /* 0x83 */ OpcodeEntry::ILLEGAL,
    /* 0x84: STY zp     */ e(Op::Sty, AddressingMode::ZeroPage, 3),
    /* 0x85: STA zp     */ e(Op::Sta, AddressingMode::ZeroPage, 3),
    /* 0x86: STX zp     */ e(Op::Stx, AddressingMode::ZeroPage, 3),
    /* 0x87 */ OpcodeEntry::ILLEGAL,
    /* 0x88: DEY        */ e(Op::Dey, AddressingMode::Implicit, 2),
    /* 0x89 */ OpcodeEntry::ILLEGAL,
    /* 0x8A: TXA        */ e(Op::Txa, AddressingMode::Implicit, 2),
    /* 0x8B */ OpcodeEntry::ILLEGAL,
    /* 0x8C: STY abs    */ e(Op::Sty, AddressingMode::Absolute, 4),
    /* 0x8D: STA abs    */ e(Op::Sta, AddressingMode::Absolute, 4),
    /* 0x8E: STX abs    */ e(Op::Stx, AddressingMode::Absolute, 4),
    /* 0x8F */ OpcodeEntry::ILLEGAL,
    /* 0x90: BCC rel    */ e(Op::Bcc, AddressingMode::Relative, 2),
    /* 0x91: STA (zp),Y */ e(Op::Sta, AddressingMode::IndirectY, 6),
    /* 0x92 */ OpcodeEntry::ILLEGAL,
    /* 0x93 */ OpcodeEntry::ILLEGAL,
    /* 0x94: STY zp,X   */ e(Op::Sty, AddressingMode::ZeroPageX, 4),
    /* 0x95: STA zp,X   */ e(Op::Sta, AddressingMode::ZeroPageX, 4),
    /* 0x96: STX zp,Y   */ e(Op::Stx, AddressingMode::ZeroPageY, 4),
    /* 0x97 */ OpcodeEntry::ILLEGAL,
    /* 0x98: TYA        */ e(Op::Tya, AddressingMode::Implicit, 2),
    /* 0x99: STA abs,Y  */ e(Op::Sta, AddressingMode::AbsoluteY, 5),
    /* 0x9A: TXS        */ e(Op::Txs, AddressingMode::Implicit, 2),
    /* 0x9B */ OpcodeEntry::ILLEGAL,
    /* 0x9C */ OpcodeEntry::ILLEGAL,
    /* 0x9D: STA abs,X  */ e(Op::Sta, AddressingMode::AbsoluteX, 5),
    /* 0x9E */ OpcodeEntry::ILLEGAL,
    /* 0x9F */ OpcodeEntry::ILLEGAL,
    /* 0xA0: LDY #imm   */ e(Op::Ldy, AddressingMode::Immediate, 2),
    /* 0xA1: LDA (zp,X) */ e(Op::Lda, AddressingMode::IndirectX, 6),
    /* 0xA2: LDX #imm   */ e(Op::Ldx, AddressingMode::Immediate, 2),
    /* 0xA3 */ OpcodeEntry::ILLEGAL,
    /* 0xA4: LDY zp     */ e(Op::Ldy, AddressingMode::ZeroPage, 3),
    /* 0xA5: LDA zp     */ e(Op::Lda, AddressingMode::ZeroPage, 3),
    /* 0xA6: LDX zp     */ e(Op::Ldx, AddressingMode::ZeroPage, 3),
    /* 0xA7 */ OpcodeEntry::ILLEGAL,
    /* 0xA8: TAY        */ e(Op::Tay, AddressingMode::Implicit, 2),
    /* 0xA9: LDA #imm   */ e(Op::Lda, AddressingMode::Immediate, 2),
    /* 0xAA: TAX        */ e(Op::Tax, AddressingMode::Implicit, 2),
    /* 0xAB */ OpcodeEntry::ILLEGAL,
    /* 0xAC: LDY abs    */ e(Op::Ldy, AddressingMode::Absolute, 4),
    /* 0xAD: LDA abs    */ e(Op::Lda, AddressingMode::Absolute, 4),
    /* 0xAE: LDX abs    */ e(Op::Ldx, AddressingMode::Absolute, 4),
    /* 0xAF */ OpcodeEntry::ILLEGAL,
    /* 0xB0: BCS rel    */ e(Op::Bcs, AddressingMode::Relative, 2),
    /* 0xB1: LDA (zp),Y */ e(Op::Lda, AddressingMode::IndirectY, 5),
    /* 0xB2 */ OpcodeEntry::ILLEGAL,
    /* 0xB3 */ OpcodeEntry::ILLEGAL,
    /* 0xB4: LDY zp,X   */ e(Op::Ldy, AddressingMode::ZeroPageX, 4),
    /* 0xB5: LDA zp,X   */ e(Op::Lda, AddressingMode::ZeroPageX, 4),
    /* 0xB6: LDX zp,Y   */ e(Op::Ldx, AddressingMode::ZeroPageY, 4),
    /* 0xB7 */ OpcodeEntry::ILLEGAL,
    /* 0xB8: CLV        */ e(Op::Clv, AddressingMode::Implicit, 2),
    /* 0xB9: LDA abs,Y  */ e(Op::Lda, AddressingMode::AbsoluteY, 4),
    /* 0xBA: TSX        */ e(Op::Tsx, AddressingMode::Implicit, 2),
    /* 0xBB */ OpcodeEntry::ILLEGAL,
    /* 0xBC: LDY abs,X  */ e(Op::Ldy, AddressingMode::AbsoluteX, 4),
    /* 0xBD: LDA abs,X  */ e(Op::Lda, AddressingMode::AbsoluteX, 4),
    /* 0xBE: LDX abs,Y  */ e(Op::Ldx, AddressingMode::AbsoluteY, 4),
    /* 0xBF */ OpcodeEntry::ILLEGAL,
    /* 0xC0: CPY #imm   */ e(Op::Cpy, AddressingMode::Immediate, 2),
    /* 0xC1: CMP (zp,X) */ e(Op::Cmp, AddressingMode::IndirectX, 6),
    /* 0xC2 */ OpcodeEntry::ILLEGAL,
    /* 0xC3 */ OpcodeEntry::ILLEGAL,
    /* 0xC4: CPY zp     */ e(Op::Cpy, AddressingMode::ZeroPage, 3),
    /* 0xC5: CMP zp     */ e(Op::Cmp, AddressingMode::ZeroPage, 3),
    /* 0xC6: DEC zp     */ e(Op::Dec, AddressingMode::ZeroPage, 5),
    /* 0xC7 */ OpcodeEntry::ILLEGAL,
    /* 0xC8: INY        */ e(Op::Iny, AddressingMode::Implicit, 2),
    /* 0xC9: CMP #imm   */ e(Op::Cmp, AddressingMode::Immediate, 2),
    /* 0xCA: DEX        */ e(Op::Dex, AddressingMode::Implicit, 2),
    /* 0xCB */ OpcodeEntry::ILLEGAL,
    /* 0xCC: CPY abs    */ e(Op::Cpy, AddressingMode::Absolute, 4),
    /* 0xCD: CMP abs    */ e(Op::Cmp, AddressingMode::Absolute, 4),
    /* 0xCE: DEC abs    */ e(Op::Dec, AddressingMode::Absolute, 6),
    /* 0xCF */ OpcodeEntry::ILLEGAL,
    /* 0xD0: BNE rel    */ e(Op::Bne, AddressingMode::Relative, 2),
    /* 0xD1: CMP (zp),Y */ e(Op::Cmp, AddressingMode::IndirectY, 5),
    /* 0xD2 */ OpcodeEntry::ILLEGAL,
    /* 0xD3 */ OpcodeEntry::ILLEGAL,
    /* 0xD4 */ OpcodeEntry::ILLEGAL,
    /* 0xD5: CMP zp,X   */ e(Op::Cmp, AddressingMode::ZeroPageX, 4),
    /* 0xD6: DEC zp,X   */ e(Op::Dec, AddressingMode::ZeroPageX, 6),
    /* 0xD7 */ OpcodeEntry::ILLEGAL,
    /* 0xD8: CLD        */ e(Op::Cld, AddressingMode::Implicit, 2),
    /* 0xD9: CMP abs,Y  */ e(Op::Cmp, AddressingMode::AbsoluteY, 4),
    /* 0xDA */ OpcodeEntry::ILLEGAL,
    /* 0xDB */ OpcodeEntry::ILLEGAL,
    /* 0xDC */ OpcodeEntry::ILLEGAL,
    /* 0xDD: CMP abs,X  */ e(Op::Cmp, AddressingMode::AbsoluteX, 4),
    /* 0xDE: DEC abs,X  */ e(Op::Dec, AddressingMode::AbsoluteX, 7),
    /* 0xDF */ OpcodeEntry::ILLEGAL,
    /* 0xE0: CPX #imm   */ e(Op::Cpx, AddressingMode::Immediate, 2),
    /* 0xE1: SBC (zp,X) */ e(Op::Sbc, AddressingMode::IndirectX, 6),
    /* 0xE2 */ OpcodeEntry::ILLEGAL,
    /* 0xE3 */ OpcodeEntry::ILLEGAL,
    /* 0xE4: CPX zp     */ e(Op::Cpx, AddressingMode::ZeroPage, 3),
    /* 0xE5: SBC zp     */ e(Op::Sbc, AddressingMode::ZeroPage, 3),
    /* 0xE6: INC zp     */ e(Op::Inc, AddressingMode::ZeroPage, 5),
    /* 0xE7 */ OpcodeEntry::ILLEGAL,
    /* 0xE8: INX        */ e(Op::Inx, AddressingMode::Implicit, 2),
    /* 0xE9: SBC #imm   */ e(Op::Sbc, AddressingMode::Immediate, 2),
    /* 0xEA: NOP        */ e(Op::Nop, AddressingMode::Implicit, 2),
    /* 0xEB */ OpcodeEntry::ILLEGAL,
    /* 0xEC: CPX abs    */ e(Op::Cpx, AddressingMode::Absolute, 4),
    /* 0xED: SBC abs    */ e(Op::Sbc, AddressingMode::Absolute, 4),
    /* 0xEE: INC abs    */ e(Op::Inc, AddressingMode::Absolute, 6),
    /* 0xEF */ OpcodeEntry::ILLEGAL,
    /* 0xF0: BEQ rel    */ e(Op::Beq, AddressingMode::Relative, 2),
    /* 0xF1: SBC (zp),Y */ e(Op::Sbc, AddressingMode::IndirectY, 5),
    /* 0xF2 */ OpcodeEntry::ILLEGAL,
    /* 0xF3 */ OpcodeEntry::ILLEGAL,
    /* 0xF4 */ OpcodeEntry::ILLEGAL,
    /* 0xF5: SBC zp,X   */ e(Op::Sbc, AddressingMode::ZeroPageX, 4),
    /* 0xF6: INC zp,X   */ e(Op::Inc, AddressingMode::ZeroPageX, 6),
    /* 0xF7 */ OpcodeEntry::ILLEGAL,
    /* 0xF8: SED        */ e(Op::Sed, AddressingMode::Implicit, 2),
    /* 0xF9: SBC abs,Y  */ e(Op::Sbc, AddressingMode::AbsoluteY, 4),
    /* 0xFA */ OpcodeEntry::ILLEGAL,
    /* 0xFB */ OpcodeEntry::ILLEGAL,
    /* 0xFC */ OpcodeEntry::ILLEGAL,
    /* 0xFD: SBC abs,X  */ e(Op::Sbc, AddressingMode::AbsoluteX, 4),
    /* 0xFE: INC abs,X  */ e(Op::Inc, AddressingMode::AbsoluteX, 7),
    /* 0xFF */ OpcodeEntry::ILLEGAL,
];
