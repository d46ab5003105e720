//! Datapath stages.
//!
//! One module per pipeline stage. Each stage exposes a `compute` function —
//! the combinational half of the cycle, reading only previous-cycle latches
//! (and, for Decode and Fetch, the combinational outputs of the stages that
//! ran before them in the WB-to-IF evaluation order) — and, where the stage
//! owns a latch, a `commit` function that applies the stall and bubble rules
//! and writes the next-cycle latch record.

/// Instruction decode and operand fetch (ID).
pub mod decode;

/// Execute (EX).
pub mod execute;

/// Instruction fetch (IF).
pub mod fetch;

/// Data-memory access (MM).
pub mod memory;

/// Write-back and retirement (WB).
pub mod writeback;
