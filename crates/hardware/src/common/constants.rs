//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Word Geometry:** Word size and register count for the RV32 datapath.
//! 2. **Memory Map:** Default base addresses and sizes of the two memories.
//! 3. **Pipeline Constants:** The canonical bubble encoding.

/// Size of a machine word (and of an instruction) in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Base address of instruction memory.
pub const IMEM_BASE: u32 = 0x8000_0000;

/// Size of instruction memory in bytes (64 KiB).
pub const IMEM_SIZE: u32 = 0x0001_0000;

/// Base address of data memory.
pub const DMEM_BASE: u32 = 0x8001_0000;

/// Size of data memory in bytes (64 KiB).
pub const DMEM_SIZE: u32 = 0x0001_0000;

/// The canonical pipeline bubble: `xor x0, x0, x0`.
///
/// Bubbles occupy pipeline slots created by stalls and squashes. A latch
/// holding this encoding never writes a register, never touches memory, and
/// is not counted as a retired instruction.
pub const BUBBLE: u32 = 0x0000_4033;

/// Default cycle guard: a run exceeding this many cycles is aborted.
pub const MAX_CYCLES: u64 = 100_000_000;
