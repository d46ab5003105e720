//! Disassembler Tests.

use rstest::rstest;

use snurisc_core::isa::disasm::disassemble;

use crate::common::asm;

#[rstest]
#[case(0x00a0_0513, "addi a0, zero, 10")]
#[case(asm::addi(1, 2, -1), "addi ra, sp, -1")]
#[case(asm::lw(2, 8, 1), "lw sp, 8(ra)")]
#[case(asm::sw(2, -4, 8), "sw sp, -4(s0)")]
#[case(asm::beq(1, 2, -16), "beq ra, sp, -16")]
#[case(asm::jal(1, 2048), "jal ra, 2048")]
#[case(asm::jalr(0, 1, 0), "jalr zero, 0(ra)")]
#[case(asm::lui(10, 0xdead), "lui a0, 0xdead")]
#[case(asm::srai(3, 4, 12), "srai gp, tp, 12")]
#[case(asm::slli(1, 2, 31), "slli ra, sp, 31")]
#[case(asm::add(10, 11, 12), "add a0, a1, a2")]
#[case(asm::ebreak(), "ebreak")]
#[case(0xffff_ffff, "illegal")]
fn renders_expected_mnemonics(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
}
