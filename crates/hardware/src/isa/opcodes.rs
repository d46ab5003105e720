//! Encoding patterns and masks for the supported RV32I subset.
//!
//! Each operation is identified by a `(pattern, mask)` pair: a word encodes
//! the operation iff `(word & mask) == pattern`. The masks select the fixed
//! fields of each format — major opcode alone (U/J), plus `funct3` (I/S/B),
//! plus `funct7` (R and immediate shifts), or the full word (`ebreak`).

/// Mask selecting the major opcode field only (bits 6-0).
pub const MASK_OPCODE: u32 = 0x0000_007f;

/// Mask selecting the major opcode and `funct3` fields.
pub const MASK_FUNCT3: u32 = 0x0000_707f;

/// Mask selecting the major opcode, `funct3`, and `funct7` fields.
pub const MASK_FUNCT7: u32 = 0xfe00_707f;

/// Mask selecting the entire word.
pub const MASK_EXACT: u32 = 0xffff_ffff;

/// Load upper immediate.
pub const LUI: u32 = 0x0000_0037;
/// Add upper immediate to PC.
pub const AUIPC: u32 = 0x0000_0017;

/// Jump and link.
pub const JAL: u32 = 0x0000_006f;
/// Jump and link register.
pub const JALR: u32 = 0x0000_0067;

/// Branch if equal.
pub const BEQ: u32 = 0x0000_0063;
/// Branch if not equal.
pub const BNE: u32 = 0x0000_1063;
/// Branch if less than (signed).
pub const BLT: u32 = 0x0000_4063;
/// Branch if greater than or equal (signed).
pub const BGE: u32 = 0x0000_5063;
/// Branch if less than (unsigned).
pub const BLTU: u32 = 0x0000_6063;
/// Branch if greater than or equal (unsigned).
pub const BGEU: u32 = 0x0000_7063;

/// Load word.
pub const LW: u32 = 0x0000_2003;
/// Store word.
pub const SW: u32 = 0x0000_2023;

/// Add immediate.
pub const ADDI: u32 = 0x0000_0013;
/// Set if less than immediate (signed).
pub const SLTI: u32 = 0x0000_2013;
/// Set if less than immediate (unsigned).
pub const SLTIU: u32 = 0x0000_3013;
/// XOR immediate.
pub const XORI: u32 = 0x0000_4013;
/// OR immediate.
pub const ORI: u32 = 0x0000_6013;
/// AND immediate.
pub const ANDI: u32 = 0x0000_7013;

/// Shift left logical by immediate.
pub const SLLI: u32 = 0x0000_1013;
/// Shift right logical by immediate.
pub const SRLI: u32 = 0x0000_5013;
/// Shift right arithmetic by immediate.
pub const SRAI: u32 = 0x4000_5013;

/// Add.
pub const ADD: u32 = 0x0000_0033;
/// Subtract.
pub const SUB: u32 = 0x4000_0033;
/// Shift left logical.
pub const SLL: u32 = 0x0000_1033;
/// Set if less than (signed).
pub const SLT: u32 = 0x0000_2033;
/// Set if less than (unsigned).
pub const SLTU: u32 = 0x0000_3033;
/// XOR.
pub const XOR: u32 = 0x0000_4033;
/// Shift right logical.
pub const SRL: u32 = 0x0000_5033;
/// Shift right arithmetic.
pub const SRA: u32 = 0x4000_5033;
/// OR.
pub const OR: u32 = 0x0000_6033;
/// AND.
pub const AND: u32 = 0x0000_7033;

/// Breakpoint.
pub const EBREAK: u32 = 0x0010_0073;
