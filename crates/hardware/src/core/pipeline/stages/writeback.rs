//! Write-back (WB) Stage.
//!
//! The final stage: commits results to the register file, retires the
//! instruction into the statistics, and surfaces any pending exception so
//! the driver can terminate the run. Runs first in the compute order, so the
//! register file already reflects this cycle's retirement when Decode reads
//! it later in the same cycle.

use crate::common::{BUBBLE, Exception, RegisterFile};
use crate::core::pipeline::latches::MemWb;
use crate::isa::Opcode;
use crate::stats::SimStats;

/// Outputs of the write-back stage.
#[derive(Clone, Copy, Debug)]
pub struct WbOutput {
    /// PC of the retiring slot.
    pub pc: u32,
    /// Instruction word of the retiring slot.
    pub inst: u32,
    /// Exception bits of the retiring slot; non-empty terminates the run.
    pub exception: Exception,
    /// Destination register index.
    pub rd: usize,
    /// Value written back, if any.
    pub wbdata: u32,
    /// Whether a register write happened.
    pub rf_wen: bool,
}

/// Executes the write-back stage.
///
/// Always advances the cycle counter; retires (counts) the slot iff it is
/// not a bubble.
pub fn compute(mm_wb: &MemWb, regs: &mut RegisterFile, stats: &mut SimStats) -> WbOutput {
    stats.cycles += 1;

    if mm_wb.rf_wen {
        regs.write(mm_wb.rd, mm_wb.wbdata);
    }

    if mm_wb.inst != BUBBLE {
        stats.retire(Opcode::decode(mm_wb.inst).desc().class);
    }

    WbOutput {
        pc: mm_wb.pc,
        inst: mm_wb.inst,
        exception: mm_wb.exception,
        rd: mm_wb.rd,
        wbdata: mm_wb.wbdata,
        rf_wen: mm_wb.rf_wen,
    }
}
