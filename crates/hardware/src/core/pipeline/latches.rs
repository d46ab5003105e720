//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the registers that connect the five stages of the
//! pipeline. It implements:
//! 1. **Latch Records:** One plain record per stage boundary, written at the
//!    end of cycle *N* and consumed during cycle *N+1*.
//! 2. **Reset State:** Every latch defaults to a bubble with no exception and
//!    no write enables.
//! 3. **Bubbling:** Constructors that clear the side-effecting fields of a
//!    slot while keeping its PC for tracing.

use crate::common::{BUBBLE, Exception, MemOp};
use crate::core::pipeline::signals::{AluFun, BrType, WbSel};

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug)]
pub struct IfId {
    /// Program counter of the fetched instruction.
    pub pc: u32,
    /// Fetched instruction word.
    pub inst: u32,
    /// Exception detected during fetch, if any.
    pub exception: Exception,
    /// PC+4 of the fetched instruction.
    pub pcplus4: u32,
}

impl IfId {
    /// Returns a bubble slot carrying the given PC.
    pub fn bubble(pc: u32) -> Self {
        Self {
            pc,
            inst: BUBBLE,
            exception: Exception::NONE,
            pcplus4: 0,
        }
    }
}

impl Default for IfId {
    fn default() -> Self {
        Self::bubble(0)
    }
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Instruction word (a bubble if decode squashed it).
    pub inst: u32,
    /// Accumulated exception bits.
    pub exception: Exception,
    /// Destination register index.
    pub rd: usize,
    /// Resolved first ALU operand.
    pub op1_data: u32,
    /// Resolved second ALU operand (immediate or forwarded rs2).
    pub op2_data: u32,
    /// Raw (forwarded) rs2 value for stores and branch comparisons.
    pub rs2_data: u32,
    /// PC+4 of the instruction.
    pub pcplus4: u32,
    /// Branch type.
    pub br_type: BrType,
    /// ALU function.
    pub alu_fun: AluFun,
    /// Write-back data selector.
    pub wb_sel: WbSel,
    /// Register-file write enable.
    pub rf_wen: bool,
    /// Data-memory port enable.
    pub dmem_en: bool,
    /// Data-memory port function.
    pub dmem_rw: MemOp,
}

impl IdEx {
    /// Returns a bubble slot carrying the given PC.
    ///
    /// Clears the branch type and both write enables so the slot has no side
    /// effects and cannot trigger spurious hazards.
    pub fn bubble(pc: u32) -> Self {
        Self {
            pc,
            inst: BUBBLE,
            exception: Exception::NONE,
            rd: 0,
            op1_data: 0,
            op2_data: 0,
            rs2_data: 0,
            pcplus4: 0,
            br_type: BrType::None,
            alu_fun: AluFun::X,
            wb_sel: WbSel::X,
            rf_wen: false,
            dmem_en: false,
            dmem_rw: MemOp::Read,
        }
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self::bubble(0)
    }
}

/// EX/MM latch (Execute to Memory).
#[derive(Clone, Copy, Debug)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Instruction word.
    pub inst: u32,
    /// Accumulated exception bits.
    pub exception: Exception,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (memory address for loads/stores, PC+4 for jumps).
    pub alu_out: u32,
    /// Store data.
    pub rs2_data: u32,
    /// Register-file write enable.
    pub rf_wen: bool,
    /// Write-back data selector.
    pub wb_sel: WbSel,
    /// Data-memory port enable.
    pub dmem_en: bool,
    /// Data-memory port function.
    pub dmem_rw: MemOp,
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: BUBBLE,
            exception: Exception::NONE,
            rd: 0,
            alu_out: 0,
            rs2_data: 0,
            rf_wen: false,
            wb_sel: WbSel::X,
            dmem_en: false,
            dmem_rw: MemOp::Read,
        }
    }
}

/// MM/WB latch (Memory to Write-back).
#[derive(Clone, Copy, Debug)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Instruction word.
    pub inst: u32,
    /// Accumulated exception bits.
    pub exception: Exception,
    /// Destination register index.
    pub rd: usize,
    /// Register-file write enable.
    pub rf_wen: bool,
    /// Data to write back.
    pub wbdata: u32,
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: BUBBLE,
            exception: Exception::NONE,
            rd: 0,
            rf_wen: false,
            wbdata: 0,
        }
    }
}

/// The complete latch state of the pipeline.
///
/// Owned by the CPU aggregate; the compute phase of each cycle reads these
/// records and the commit phase replaces them.
#[derive(Clone, Debug, Default)]
pub struct Latches {
    /// IF self-latch: the PC to fetch next cycle.
    pub reg_pc: u32,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MM latch.
    pub ex_mm: ExMem,
    /// MM/WB latch.
    pub mm_wb: MemWb,
}

impl Latches {
    /// Returns the reset latch state with fetch starting at `entry`.
    pub fn new(entry: u32) -> Self {
        Self {
            reg_pc: entry,
            ..Self::default()
        }
    }
}
