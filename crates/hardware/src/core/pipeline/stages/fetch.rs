//! Instruction Fetch (IF) Stage.
//!
//! Fetches the word addressed by the PC self-latch, speculatively computes
//! PC+4, and selects the next PC from the control unit's `pc_sel` — the
//! pipeline always predicts not-taken, so redirects arrive from Execute two
//! cycles after the fetch they invalidate.

use crate::common::{BUBBLE, Exception, MemOp};
use crate::core::memory::Memory;
use crate::core::pipeline::control::PipeCtl;
use crate::core::pipeline::latches::{IfId, Latches};
use crate::core::pipeline::signals::PcSel;
use crate::core::pipeline::stages::execute::ExecuteOutput;

/// Combinational outputs of the fetch stage.
#[derive(Clone, Copy, Debug)]
pub struct FetchOutput {
    /// PC of the fetched slot.
    pub pc: u32,
    /// Fetched instruction word (a bubble on fetch fault).
    pub inst: u32,
    /// Fetch fault, if any.
    pub exception: Exception,
    /// PC+4 of the fetched slot.
    pub pcplus4: u32,
    /// PC to latch for next cycle's fetch.
    pub pc_next: u32,
}

/// Executes the combinational half of the fetch stage.
///
/// # Arguments
///
/// * `imem` - Instruction memory.
/// * `reg_pc` - The PC self-latch.
/// * `pc_sel` - Next-PC source resolved by the control unit this cycle.
/// * `ex` - Execute's combinational outputs (redirect targets).
pub fn compute(imem: &mut Memory, reg_pc: u32, pc_sel: PcSel, ex: &ExecuteOutput) -> FetchOutput {
    let pc = reg_pc;
    let (word, ok) = imem.access(true, pc, 0, MemOp::Read);
    let (inst, exception) = if ok {
        (word, Exception::NONE)
    } else {
        (BUBBLE, Exception::IMEM_ERROR)
    };

    let pcplus4 = pc.wrapping_add(4);
    let pc_next = match pc_sel {
        PcSel::Plus4 => pcplus4,
        PcSel::BrJmp => ex.brjmp_target,
        PcSel::Jalr => ex.jump_reg_target,
    };

    FetchOutput {
        pc,
        inst,
        exception,
        pcplus4,
        pc_next,
    }
}

/// Commits the fetch stage: advances the PC self-latch and writes the IF/ID
/// latch, honoring the stall and squash signals.
pub fn commit(lat: &mut Latches, pipe: &PipeCtl, out: &FetchOutput) {
    debug_assert!(
        !(pipe.id_bubble && pipe.id_stall),
        "IF/ID latch cannot be bubbled and held in the same cycle"
    );

    if !pipe.if_stall {
        lat.reg_pc = out.pc_next;
    }

    if pipe.id_bubble {
        lat.if_id = IfId::bubble(out.pc);
    } else if !pipe.id_stall {
        lat.if_id = IfId {
            pc: out.pc,
            inst: out.inst,
            exception: out.exception,
            pcplus4: out.pcplus4,
        };
    }
}
