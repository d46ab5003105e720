//! Memory Access (MM) Stage.
//!
//! Drives the data-memory port for loads and stores and selects the
//! write-back data. A failed access ORs the data-memory fault into the
//! slot's exception bits and withdraws its register write so the faulting
//! instruction leaves no architectural trace.

use crate::common::{Exception, MemOp};
use crate::core::memory::Memory;
use crate::core::pipeline::latches::{ExMem, Latches, MemWb};
use crate::core::pipeline::signals::WbSel;

/// Combinational outputs of the memory stage.
#[derive(Clone, Copy, Debug)]
pub struct MemOutput {
    /// The next MM/WB latch record.
    pub latch: MemWb,
    /// Word returned by the port (0 for stores and disabled cycles).
    pub mem_data: u32,
    /// The access faulted this cycle.
    pub fault: bool,
    /// Whether the port was driven this cycle.
    pub en: bool,
    /// Port function driven this cycle.
    pub rw: MemOp,
    /// Address driven on the port.
    pub addr: u32,
    /// Store data driven on the port.
    pub store_data: u32,
}

/// Executes the combinational half of the memory stage.
pub fn compute(ex_mm: &ExMem, dmem: &mut Memory) -> MemOutput {
    let mut exception = ex_mm.exception;
    let mut rf_wen = ex_mm.rf_wen;

    let (mem_data, ok) = dmem.access(ex_mm.dmem_en, ex_mm.alu_out, ex_mm.rs2_data, ex_mm.dmem_rw);
    if !ok {
        exception |= Exception::DMEM_ERROR;
        rf_wen = false;
    }

    let wbdata = if ex_mm.wb_sel == WbSel::Mem {
        mem_data
    } else {
        ex_mm.alu_out
    };

    MemOutput {
        latch: MemWb {
            pc: ex_mm.pc,
            inst: ex_mm.inst,
            exception,
            rd: ex_mm.rd,
            rf_wen,
            wbdata,
        },
        mem_data,
        fault: !ok,
        en: ex_mm.dmem_en,
        rw: ex_mm.dmem_rw,
        addr: ex_mm.alu_out,
        store_data: ex_mm.rs2_data,
    }
}

/// Commits the memory stage: writes the MM/WB latch.
pub fn commit(lat: &mut Latches, out: &MemOutput) {
    lat.mm_wb = out.latch;
}
