//! Instruction Decode (ID) Stage.
//!
//! Runs the control unit, reads the register file, resolves operand
//! forwarding, and selects the second ALU operand from the immediate mux.
//! The three operand reads (`op1`, `op2`-as-rs2, and the raw `rs2` kept for
//! stores and branch comparisons) each have an independent bypass
//! multiplexer with priority EX, then MM, then WB, then the register file.

use crate::common::RegisterFile;
use crate::core::pipeline::control::{self, CtlOutput};
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, Latches, MemWb};
use crate::core::pipeline::signals::{FwdSrc, Op1Sel, Op2Sel};
use crate::core::pipeline::stages::execute::ExecuteOutput;
use crate::core::pipeline::stages::memory::MemOutput;
use crate::isa::InstructionBits;
use crate::isa::decode::{imm_b, imm_i, imm_j, imm_s, imm_u};

/// Combinational outputs of the decode stage.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOutput {
    /// The fully decoded next ID/EX latch record.
    pub latch: IdEx,
    /// The control unit's outputs for this cycle.
    pub ctl: CtlOutput,
}

/// Executes the combinational half of the decode stage.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch (the instruction in Decode).
/// * `id_ex` - The ID/EX latch, inspected for hazards and the EX bypass.
/// * `ex_mm` - The EX/MM latch, inspected for the MM bypass.
/// * `mm_wb` - The MM/WB latch, inspected for the WB bypass.
/// * `regs` - The register file.
/// * `ex` - Execute's combinational outputs (EX bypass value).
/// * `mm` - Memory's combinational outputs (MM bypass value).
pub fn compute(
    if_id: &IfId,
    id_ex: &IdEx,
    ex_mm: &ExMem,
    mm_wb: &MemWb,
    regs: &RegisterFile,
    ex: &ExecuteOutput,
    mm: &MemOutput,
) -> DecodeOutput {
    let ctl = control::generate(if_id, id_ex, ex_mm, mm_wb, ex);
    let inst = ctl.inst;
    let signals = &ctl.signals;

    let rd = inst.rd();
    let rf_rs1 = regs.read(inst.rs1());
    let rf_rs2 = regs.read(inst.rs2());

    let bypass = |src: FwdSrc, raw: u32| match src {
        FwdSrc::None => raw,
        FwdSrc::Ex => ex.latch.alu_out,
        FwdSrc::Mem => mm.latch.wbdata,
        FwdSrc::Wb => mm_wb.wbdata,
    };

    let rs1_val = bypass(ctl.fwd_op1, rf_rs1);
    let op1_data = match signals.op1_sel {
        Op1Sel::Pc => if_id.pc,
        Op1Sel::Rs1 | Op1Sel::X => rs1_val,
    };

    let op2_data = match signals.op2_sel {
        Op2Sel::X => 0,
        Op2Sel::Rs2 => bypass(ctl.fwd_op2, rf_rs2),
        Op2Sel::ImmI => imm_i(inst),
        Op2Sel::ImmS => imm_s(inst),
        Op2Sel::ImmB => imm_b(inst),
        Op2Sel::ImmU => imm_u(inst),
        Op2Sel::ImmJ => imm_j(inst),
    };

    let rs2_data = bypass(ctl.fwd_rs2, rf_rs2);

    let latch = IdEx {
        pc: if_id.pc,
        inst,
        exception: if_id.exception | ctl.exception,
        rd,
        op1_data,
        op2_data,
        rs2_data,
        pcplus4: if_id.pcplus4,
        br_type: signals.br_type,
        alu_fun: signals.alu_fun,
        wb_sel: signals.wb_sel,
        rf_wen: signals.rf_wen,
        dmem_en: signals.dmem_en,
        dmem_rw: signals.dmem_rw,
    };

    DecodeOutput { latch, ctl }
}

/// Commits the decode stage: writes the ID/EX latch, inserting a bubble when
/// the slot is squashed or the front of the pipeline is stalled.
pub fn commit(lat: &mut Latches, out: &DecodeOutput) {
    lat.id_ex = if out.ctl.pipe.ex_bubble {
        IdEx::bubble(out.latch.pc)
    } else {
        out.latch
    };
}
