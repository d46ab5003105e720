//! Decode Table Tests.
//!
//! Verifies that the `(pattern, mask)` table assigns the right identity to
//! every supported operation, that unsupported encodings fall through to
//! `Illegal`, and that the static descriptors carry the right metadata.

use rstest::rstest;

use snurisc_core::common::BUBBLE;
use snurisc_core::isa::{InstClass, InstFormat, Opcode};

use crate::common::asm;

// ══════════════════════════════════════════════════════════
// 1. Every supported operation decodes to its identity
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(asm::lui(1, 0x12345), Opcode::Lui)]
#[case(asm::auipc(2, 0x1), Opcode::Auipc)]
#[case(asm::jal(1, 2048), Opcode::Jal)]
#[case(asm::jalr(0, 1, 0), Opcode::Jalr)]
#[case(asm::beq(1, 2, 8), Opcode::Beq)]
#[case(asm::bne(1, 2, -8), Opcode::Bne)]
#[case(asm::blt(3, 4, 16), Opcode::Blt)]
#[case(asm::bge(3, 4, 16), Opcode::Bge)]
#[case(asm::bltu(3, 4, 16), Opcode::Bltu)]
#[case(asm::bgeu(3, 4, 16), Opcode::Bgeu)]
#[case(asm::lw(5, 4, 6), Opcode::Lw)]
#[case(asm::sw(5, -4, 6), Opcode::Sw)]
#[case(asm::addi(1, 2, -1), Opcode::Addi)]
#[case(asm::slti(1, 2, 3), Opcode::Slti)]
#[case(asm::sltiu(1, 2, 3), Opcode::Sltiu)]
#[case(asm::xori(1, 2, 3), Opcode::Xori)]
#[case(asm::ori(1, 2, 3), Opcode::Ori)]
#[case(asm::andi(1, 2, 3), Opcode::Andi)]
#[case(asm::slli(1, 2, 5), Opcode::Slli)]
#[case(asm::srli(1, 2, 5), Opcode::Srli)]
#[case(asm::srai(1, 2, 5), Opcode::Srai)]
#[case(asm::add(1, 2, 3), Opcode::Add)]
#[case(asm::sub(1, 2, 3), Opcode::Sub)]
#[case(asm::sll(1, 2, 3), Opcode::Sll)]
#[case(asm::slt(1, 2, 3), Opcode::Slt)]
#[case(asm::sltu(1, 2, 3), Opcode::Sltu)]
#[case(asm::xor(1, 2, 3), Opcode::Xor)]
#[case(asm::srl(1, 2, 3), Opcode::Srl)]
#[case(asm::sra(1, 2, 3), Opcode::Sra)]
#[case(asm::or(1, 2, 3), Opcode::Or)]
#[case(asm::and(1, 2, 3), Opcode::And)]
#[case(asm::ebreak(), Opcode::Ebreak)]
fn decodes_supported_operations(#[case] word: u32, #[case] expected: Opcode) {
    assert_eq!(Opcode::decode(word), expected);
}

// ══════════════════════════════════════════════════════════
// 2. Unsupported encodings are illegal
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0xffff_ffff)] // not an encoding at all
#[case(0x0000_0000)] // all zeros
#[case(0x0000_0073)] // ecall — outside the supported subset
#[case(0x0000_000f)] // fence
#[case(0x0000_0003)] // lb — sub-word load
#[case(0x0000_1003)] // lh
#[case(0x0000_4003)] // lbu
#[case(0x0000_0023)] // sb
#[case(0x0000_1023)] // sh
#[case(0x0200_0033)] // mul — M extension
#[case(0x3020_0073)] // mret
fn rejects_unsupported_encodings(#[case] word: u32) {
    assert_eq!(Opcode::decode(word), Opcode::Illegal);
}

// ══════════════════════════════════════════════════════════
// 3. Funct7 disambiguation (first-match on full masks)
// ══════════════════════════════════════════════════════════

#[test]
fn distinguishes_add_from_sub() {
    assert_eq!(Opcode::decode(asm::add(1, 2, 3)), Opcode::Add);
    assert_eq!(Opcode::decode(asm::sub(1, 2, 3)), Opcode::Sub);
}

#[test]
fn distinguishes_srli_from_srai() {
    assert_eq!(Opcode::decode(asm::srli(1, 2, 7)), Opcode::Srli);
    assert_eq!(Opcode::decode(asm::srai(1, 2, 7)), Opcode::Srai);
}

#[test]
fn bad_funct7_on_r_type_is_illegal() {
    // add with a stray funct7 bit is no valid RV32I encoding.
    let word = asm::r_type(0x33, 1, 0, 2, 3, 0x11);
    assert_eq!(Opcode::decode(word), Opcode::Illegal);
}

// ══════════════════════════════════════════════════════════
// 4. Descriptors
// ══════════════════════════════════════════════════════════

#[test]
fn bubble_is_the_canonical_xor() {
    assert_eq!(BUBBLE, asm::xor(0, 0, 0));
    assert_eq!(Opcode::decode(BUBBLE), Opcode::Xor);
}

#[rstest]
#[case(Opcode::Lw, "lw", InstFormat::Il, InstClass::Mem)]
#[case(Opcode::Sw, "sw", InstFormat::S, InstClass::Mem)]
#[case(Opcode::Jalr, "jalr", InstFormat::Ij, InstClass::Ctrl)]
#[case(Opcode::Beq, "beq", InstFormat::B, InstClass::Ctrl)]
#[case(Opcode::Srai, "srai", InstFormat::Is, InstClass::Alu)]
#[case(Opcode::Lui, "lui", InstFormat::U, InstClass::Alu)]
#[case(Opcode::Jal, "jal", InstFormat::J, InstClass::Ctrl)]
#[case(Opcode::Ebreak, "ebreak", InstFormat::X, InstClass::Ctrl)]
fn descriptor_metadata(
    #[case] op: Opcode,
    #[case] mnemonic: &str,
    #[case] format: InstFormat,
    #[case] class: InstClass,
) {
    let desc = op.desc();
    assert_eq!(desc.mnemonic, mnemonic);
    assert_eq!(desc.format, format);
    assert_eq!(desc.class, class);
}

#[test]
fn illegal_descriptor_is_stable() {
    let desc = Opcode::Illegal.desc();
    assert_eq!(desc.mnemonic, "illegal");
    assert_eq!(desc.opcode, Opcode::Illegal);
}
