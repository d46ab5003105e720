//! Five-stage instruction pipeline.
//!
//! This module contains the pipeline infrastructure:
//! 1. **Latches:** Inter-stage registers written at commit and read the next cycle.
//! 2. **Signals:** The control vector and selector enumerations decode generates.
//! 3. **Control:** Decode-signal lookup, forwarding, hazard, and PC-selection logic.
//! 4. **Stages:** The IF/ID/EX/MM/WB compute and commit steps.
//!
//! One cycle is two phases: every stage's `compute` runs in reverse order
//! (WB, MM, EX, ID, IF) so each reads the previous cycle's latches — and so
//! Decode can observe Execute's and Memory's combinational outputs for the
//! bypass paths — then every `commit` runs in forward order, replacing the
//! latch records for the next cycle.

/// Control unit: decode signals, hazards, forwarding, PC selection.
pub mod control;

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Datapath stages.
pub mod stages;

use crate::core::pipeline::stages::decode::DecodeOutput;
use crate::core::pipeline::stages::execute::ExecuteOutput;
use crate::core::pipeline::stages::fetch::FetchOutput;
use crate::core::pipeline::stages::memory::MemOutput;
use crate::core::pipeline::stages::writeback::WbOutput;

/// Everything one cycle computed, captured for tracing and the run loop.
///
/// The stage outputs carry the PC and instruction of the slot each stage
/// processed this cycle; `id_pc`/`id_inst` preserve the Decode slot as
/// fetched, before any illegal-instruction replacement.
#[derive(Clone, Copy, Debug)]
pub struct CycleState {
    /// Cycle number (1-based).
    pub cycle: u64,
    /// Fetch outputs.
    pub iff: FetchOutput,
    /// Decode outputs, including the control unit's signals.
    pub id: DecodeOutput,
    /// PC of the slot that occupied Decode.
    pub id_pc: u32,
    /// Instruction word that occupied Decode, as fetched.
    pub id_inst: u32,
    /// Execute outputs.
    pub ex: ExecuteOutput,
    /// Memory outputs.
    pub mm: MemOutput,
    /// Write-back outputs.
    pub wb: WbOutput,
}
