//! Decode-Signal Table Tests.
//!
//! Verifies the control vector each opcode identity maps to, and the branch
//! resolution rule that maps a branch type plus ALU comparison result to a
//! taken/not-taken decision.

use rstest::rstest;

use snurisc_core::common::MemOp;
use snurisc_core::core::pipeline::control::{branch_taken, decode_signals};
use snurisc_core::core::pipeline::signals::{
    AluFun, BrType, MemWidth, Op1Sel, Op2Sel, WbSel,
};
use snurisc_core::isa::Opcode;

#[test]
fn load_drives_the_memory_port_read() {
    let s = decode_signals(Opcode::Lw);
    assert!(s.dmem_en);
    assert_eq!(s.dmem_rw, MemOp::Read);
    assert_eq!(s.width, MemWidth::Word);
    assert_eq!(s.wb_sel, WbSel::Mem);
    assert!(s.rf_wen);
    assert!(s.rs1_oen, "address base register is a real read");
    assert!(!s.rs2_oen);
    assert_eq!(s.op2_sel, Op2Sel::ImmI);
}

#[test]
fn store_drives_the_memory_port_write_and_never_the_register_file() {
    let s = decode_signals(Opcode::Sw);
    assert!(s.dmem_en);
    assert_eq!(s.dmem_rw, MemOp::Write);
    assert!(!s.rf_wen);
    assert!(s.rs1_oen && s.rs2_oen, "store reads both base and data");
    assert_eq!(s.op2_sel, Op2Sel::ImmS);
}

#[test]
fn branch_compares_but_writes_nothing() {
    let s = decode_signals(Opcode::Beq);
    assert_eq!(s.br_type, BrType::Eq);
    assert_eq!(s.alu_fun, AluFun::Seq);
    assert_eq!(s.op2_sel, Op2Sel::ImmB, "op2 carries the branch offset");
    assert!(s.rs1_oen && s.rs2_oen);
    assert!(!s.rf_wen && !s.dmem_en);
}

#[test]
fn jal_writes_the_return_address_and_reads_nothing() {
    let s = decode_signals(Opcode::Jal);
    assert_eq!(s.br_type, BrType::J);
    assert_eq!(s.wb_sel, WbSel::Pc4);
    assert!(s.rf_wen);
    assert!(!s.rs1_oen && !s.rs2_oen);
    assert_eq!(s.op2_sel, Op2Sel::ImmJ);
}

#[test]
fn jalr_reads_only_its_base_register() {
    let s = decode_signals(Opcode::Jalr);
    assert_eq!(s.br_type, BrType::Jr);
    assert_eq!(s.wb_sel, WbSel::Pc4);
    assert_eq!(s.alu_fun, AluFun::Add);
    assert!(s.rs1_oen && !s.rs2_oen);
}

#[test]
fn lui_copies_the_upper_immediate() {
    let s = decode_signals(Opcode::Lui);
    assert_eq!(s.alu_fun, AluFun::Copy2);
    assert_eq!(s.op2_sel, Op2Sel::ImmU);
    assert_eq!(s.op1_sel, Op1Sel::X);
    assert!(!s.rs1_oen && !s.rs2_oen);
}

#[test]
fn auipc_adds_the_pc() {
    let s = decode_signals(Opcode::Auipc);
    assert_eq!(s.op1_sel, Op1Sel::Pc);
    assert_eq!(s.alu_fun, AluFun::Add);
}

#[rstest]
#[case(Opcode::Addi, AluFun::Add, Op2Sel::ImmI, false)]
#[case(Opcode::Andi, AluFun::And, Op2Sel::ImmI, false)]
#[case(Opcode::Srai, AluFun::Sra, Op2Sel::ImmI, false)]
#[case(Opcode::Add, AluFun::Add, Op2Sel::Rs2, true)]
#[case(Opcode::Sltu, AluFun::Sltu, Op2Sel::Rs2, true)]
#[case(Opcode::Sra, AluFun::Sra, Op2Sel::Rs2, true)]
fn alu_rows(
    #[case] op: Opcode,
    #[case] fun: AluFun,
    #[case] op2: Op2Sel,
    #[case] reads_rs2: bool,
) {
    let s = decode_signals(op);
    assert_eq!(s.alu_fun, fun);
    assert_eq!(s.op2_sel, op2);
    assert!(s.rs1_oen);
    assert_eq!(s.rs2_oen, reads_rs2);
    assert_eq!(s.wb_sel, WbSel::Alu);
    assert!(s.rf_wen);
    assert!(!s.dmem_en);
}

#[rstest]
#[case(Opcode::Ebreak)]
#[case(Opcode::Illegal)]
fn system_and_illegal_are_safe(#[case] op: Opcode) {
    let s = decode_signals(op);
    assert!(!s.rf_wen);
    assert!(!s.dmem_en);
    assert_eq!(s.br_type, BrType::None);
    assert!(!s.rs1_oen && !s.rs2_oen);
}

// ══════════════════════════════════════════════════════════
// Branch resolution
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(BrType::None, 1, false)]
#[case(BrType::Eq, 1, true)] // seq == 1 means equal
#[case(BrType::Eq, 0, false)]
#[case(BrType::Ne, 0, true)] // seq == 0 means not equal
#[case(BrType::Ne, 1, false)]
#[case(BrType::Lt, 1, true)]
#[case(BrType::Ge, 0, true)]
#[case(BrType::Ge, 1, false)]
#[case(BrType::Ltu, 1, true)]
#[case(BrType::Geu, 0, true)]
#[case(BrType::J, 0, true)] // unconditional either way
#[case(BrType::J, 1, true)]
#[case(BrType::Jr, 0, true)]
fn branch_resolution(#[case] br: BrType, #[case] alu: u32, #[case] taken: bool) {
    assert_eq!(branch_taken(br, alu), taken);
}
