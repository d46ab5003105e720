//! Instruction set definition for the RV32I word-only subset.
//!
//! This module defines the instruction set the pipeline executes. It provides:
//! 1. **Opcode Identities:** One variant per supported operation, plus `Illegal`.
//! 2. **Descriptors:** The static `(pattern, mask, mnemonic, format, class)` table.
//! 3. **Field Extraction:** Register and immediate field decoding ([`instruction`], [`decode`]).
//! 4. **Disassembly:** Mnemonic rendering for traces and diagnostics ([`disasm`]).
//!
//! The supported set is the 32 word-only RV32I operations: the memory port is
//! word-addressable, so the sub-word loads and stores (and everything
//! privileged except `ebreak`) decode as [`Opcode::Illegal`].

/// Immediate extraction for the I/S/B/U/J formats.
pub mod decode;

/// Instruction disassembler.
pub mod disasm;

/// Bit-field extraction for register and function fields.
pub mod instruction;

/// Encoding patterns and masks for every supported operation.
pub mod opcodes;

pub use instruction::InstructionBits;

/// Identity of a decoded instruction.
///
/// Produced by matching an instruction word against the static encoding
/// table; `Illegal` means no table entry matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater than or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater than or equal (unsigned).
    Bgeu,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Add immediate.
    Addi,
    /// Set if less than immediate (signed).
    Slti,
    /// Set if less than immediate (unsigned).
    Sltiu,
    /// XOR immediate.
    Xori,
    /// OR immediate.
    Ori,
    /// AND immediate.
    Andi,
    /// Shift left logical by immediate.
    Slli,
    /// Shift right logical by immediate.
    Srli,
    /// Shift right arithmetic by immediate.
    Srai,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set if less than (signed).
    Slt,
    /// Set if less than (unsigned).
    Sltu,
    /// XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// OR.
    Or,
    /// AND.
    And,
    /// Breakpoint; terminates the simulation.
    Ebreak,
    /// No table entry matched the encoding.
    Illegal,
}

/// Instruction format, which selects the immediate extractor and the
/// disassembly layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstFormat {
    /// Register-register.
    R,
    /// Register-immediate.
    I,
    /// Load (I-format immediate, memory addressing).
    Il,
    /// Jump-and-link-register (I-format immediate, indirect target).
    Ij,
    /// Shift by immediate (I-format with shamt in the low immediate bits).
    Is,
    /// Upper immediate.
    U,
    /// Store.
    S,
    /// Conditional branch.
    B,
    /// Jump-and-link.
    J,
    /// System (no operands).
    X,
}

/// Instruction class used by the retirement statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Arithmetic and logic, including `lui`/`auipc`.
    Alu,
    /// Data transfer (loads and stores).
    Mem,
    /// Control transfer (branches, jumps, `ebreak`).
    Ctrl,
}

/// Static descriptor of one supported operation.
#[derive(Debug)]
pub struct InstrDesc {
    /// Identity assigned when this entry matches.
    pub opcode: Opcode,
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Fixed encoding bits of this operation.
    pub pattern: u32,
    /// Bits that must equal `pattern` for a word to match this entry.
    pub mask: u32,
    /// Instruction format.
    pub format: InstFormat,
    /// Instruction class.
    pub class: InstClass,
}

/// Descriptor returned for encodings that match no table entry.
pub static ILLEGAL_DESC: InstrDesc = InstrDesc {
    opcode: Opcode::Illegal,
    mnemonic: "illegal",
    pattern: 0,
    mask: 0,
    format: InstFormat::X,
    class: InstClass::Alu,
};

macro_rules! desc {
    ($op:ident, $mn:literal, $pat:expr, $mask:expr, $fmt:ident, $class:ident) => {
        InstrDesc {
            opcode: Opcode::$op,
            mnemonic: $mn,
            pattern: $pat,
            mask: $mask,
            format: InstFormat::$fmt,
            class: InstClass::$class,
        }
    };
}

/// The encoding table, scanned in order; the first matching entry wins.
///
/// A word matches an entry iff `(word & mask) == pattern`.
pub static ENCODINGS: &[InstrDesc] = &[
    desc!(Lui, "lui", opcodes::LUI, opcodes::MASK_OPCODE, U, Alu),
    desc!(Auipc, "auipc", opcodes::AUIPC, opcodes::MASK_OPCODE, U, Alu),
    desc!(Jal, "jal", opcodes::JAL, opcodes::MASK_OPCODE, J, Ctrl),
    desc!(Jalr, "jalr", opcodes::JALR, opcodes::MASK_FUNCT3, Ij, Ctrl),
    desc!(Beq, "beq", opcodes::BEQ, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Bne, "bne", opcodes::BNE, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Blt, "blt", opcodes::BLT, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Bge, "bge", opcodes::BGE, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Bltu, "bltu", opcodes::BLTU, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Bgeu, "bgeu", opcodes::BGEU, opcodes::MASK_FUNCT3, B, Ctrl),
    desc!(Lw, "lw", opcodes::LW, opcodes::MASK_FUNCT3, Il, Mem),
    desc!(Sw, "sw", opcodes::SW, opcodes::MASK_FUNCT3, S, Mem),
    desc!(Addi, "addi", opcodes::ADDI, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Slti, "slti", opcodes::SLTI, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Sltiu, "sltiu", opcodes::SLTIU, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Xori, "xori", opcodes::XORI, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Ori, "ori", opcodes::ORI, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Andi, "andi", opcodes::ANDI, opcodes::MASK_FUNCT3, I, Alu),
    desc!(Slli, "slli", opcodes::SLLI, opcodes::MASK_FUNCT7, Is, Alu),
    desc!(Srli, "srli", opcodes::SRLI, opcodes::MASK_FUNCT7, Is, Alu),
    desc!(Srai, "srai", opcodes::SRAI, opcodes::MASK_FUNCT7, Is, Alu),
    desc!(Add, "add", opcodes::ADD, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Sub, "sub", opcodes::SUB, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Sll, "sll", opcodes::SLL, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Slt, "slt", opcodes::SLT, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Sltu, "sltu", opcodes::SLTU, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Xor, "xor", opcodes::XOR, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Srl, "srl", opcodes::SRL, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Sra, "sra", opcodes::SRA, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Or, "or", opcodes::OR, opcodes::MASK_FUNCT7, R, Alu),
    desc!(And, "and", opcodes::AND, opcodes::MASK_FUNCT7, R, Alu),
    desc!(Ebreak, "ebreak", opcodes::EBREAK, opcodes::MASK_EXACT, X, Ctrl),
];

impl Opcode {
    /// Decodes an instruction word into its opcode identity.
    ///
    /// Scans the encoding table in order and returns the identity of the
    /// first entry whose masked bits match; [`Opcode::Illegal`] if none do.
    pub fn decode(word: u32) -> Opcode {
        ENCODINGS
            .iter()
            .find(|d| word & d.mask == d.pattern)
            .map_or(Opcode::Illegal, |d| d.opcode)
    }

    /// Returns the static descriptor for this opcode identity.
    pub fn desc(self) -> &'static InstrDesc {
        ENCODINGS
            .iter()
            .find(|d| d.opcode == self)
            .unwrap_or(&ILLEGAL_DESC)
    }
}
