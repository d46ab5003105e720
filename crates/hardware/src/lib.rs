//! Cycle-accurate 5-stage pipelined RV32I processor simulator library.
//!
//! This crate implements an instruction-set-level simulator of a classical
//! five-stage pipelined processor executing the word-only RV32I subset:
//! 1. **Core:** The IF/ID/EX/MM/WB datapath with two-phase per-cycle
//!    evaluation, full operand forwarding, load-use stalls, and
//!    predict-not-taken branch squashing.
//! 2. **ISA:** Table-driven decoding, field and immediate extraction, and a
//!    disassembler for the 32 supported operations.
//! 3. **Memories:** Separate word-addressable instruction and data memories
//!    with fault-reporting ports.
//! 4. **Simulation:** ELF program loading, leveled trace output, retirement
//!    statistics, and the run driver.

/// Common types and constants (word geometry, exceptions, registers).
pub mod common;
/// Simulator configuration (defaults and JSON overrides).
pub mod config;
/// CPU core (register file, memories, ALU, pipeline, cycle driver).
pub mod core;
/// Instruction set (opcode table, decode, disassembly).
pub mod isa;
/// Simulation: driver, loader, and tracer.
pub mod sim;
/// Retirement statistics and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or read a JSON file.
pub use crate::config::Config;
/// The modeled CPU: architectural state plus pipeline latches.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the run loop.
pub use crate::sim::Simulator;
/// Why a run ended.
pub use crate::sim::simulator::Halt;
