//! Instruction disassembler.
//!
//! Converts an instruction word into a human-readable mnemonic string for
//! trace output and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use snurisc_core::isa::disasm::disassemble;
//! let text = disassemble(0x00a00513); // addi a0, zero, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::decode::{imm_b, imm_i, imm_j, imm_s, imm_u};
use crate::isa::{InstFormat, InstructionBits, Opcode};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for a register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles an instruction word into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, or `"illegal"` for
/// unrecognised encodings.
pub fn disassemble(inst: u32) -> String {
    let desc = Opcode::decode(inst).desc();
    let mn = desc.mnemonic;
    let rd = xreg(inst.rd());
    let rs1 = xreg(inst.rs1());
    let rs2 = xreg(inst.rs2());

    match desc.format {
        InstFormat::R => format!("{mn} {rd}, {rs1}, {rs2}"),
        InstFormat::I => format!("{mn} {rd}, {rs1}, {}", imm_i(inst) as i32),
        InstFormat::Il => format!("{mn} {rd}, {}({rs1})", imm_i(inst) as i32),
        InstFormat::Ij => format!("{mn} {rd}, {}({rs1})", imm_i(inst) as i32),
        InstFormat::Is => format!("{mn} {rd}, {rs1}, {}", imm_i(inst) & 0x1f),
        InstFormat::U => format!("{mn} {rd}, {:#x}", imm_u(inst) >> 12),
        InstFormat::S => format!("{mn} {rs2}, {}({rs1})", imm_s(inst) as i32),
        InstFormat::B => format!("{mn} {rs1}, {rs2}, {}", imm_b(inst) as i32),
        InstFormat::J => format!("{mn} {rd}, {}", imm_j(inst) as i32),
        InstFormat::X => mn.to_string(),
    }
}
