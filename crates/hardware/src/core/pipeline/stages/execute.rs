//! Execute (EX) Stage.
//!
//! Runs the ALU and computes both possible control-transfer targets. For
//! conditional branches the second ALU input is overridden with the raw rs2
//! value, because `op2_data` holds the branch offset; the comparison result
//! then drives the control unit's PC selection. For `jal`/`jalr` the ALU
//! output is overridden with PC+4 so the return address reaches `rd`.

use crate::core::pipeline::control::PipeCtl;
use crate::core::pipeline::latches::{ExMem, IdEx, Latches};
use crate::core::pipeline::signals::{BrType, WbSel};
use crate::core::units::Alu;
use crate::common::BUBBLE;

/// Combinational outputs of the execute stage.
#[derive(Clone, Copy, Debug)]
pub struct ExecuteOutput {
    /// The next EX/MM latch record (before any MM bubble).
    pub latch: ExMem,
    /// Branch/`jal` target: `pc + op2_data`.
    pub brjmp_target: u32,
    /// `jalr` target: ALU sum with the lowest bit cleared.
    pub jump_reg_target: u32,
}

/// Executes the combinational half of the execute stage.
pub fn compute(id_ex: &IdEx) -> ExecuteOutput {
    let op2 = match id_ex.br_type {
        BrType::Eq | BrType::Ne | BrType::Lt | BrType::Ge | BrType::Ltu | BrType::Geu => {
            id_ex.rs2_data
        }
        _ => id_ex.op2_data,
    };

    let mut alu_out = Alu::execute(id_ex.alu_fun, id_ex.op1_data, op2);
    let jump_reg_target = alu_out & !1;
    let brjmp_target = id_ex.pc.wrapping_add(id_ex.op2_data);

    if id_ex.wb_sel == WbSel::Pc4 {
        alu_out = id_ex.pcplus4;
    }

    ExecuteOutput {
        latch: ExMem {
            pc: id_ex.pc,
            inst: id_ex.inst,
            exception: id_ex.exception,
            rd: id_ex.rd,
            alu_out,
            rs2_data: id_ex.rs2_data,
            rf_wen: id_ex.rf_wen,
            wb_sel: id_ex.wb_sel,
            dmem_en: id_ex.dmem_en,
            dmem_rw: id_ex.dmem_rw,
        },
        brjmp_target,
        jump_reg_target,
    }
}

/// Commits the execute stage: writes the EX/MM latch.
///
/// Under `mm_bubble` the slot is neutralized (no instruction, no writes, no
/// memory access) but its exception propagates untouched so write-back can
/// still terminate on it.
pub fn commit(lat: &mut Latches, pipe: &PipeCtl, out: &ExecuteOutput) {
    let mut next = out.latch;
    if pipe.mm_bubble {
        next.inst = BUBBLE;
        next.rf_wen = false;
        next.dmem_en = false;
    }
    lat.ex_mm = next;
}
