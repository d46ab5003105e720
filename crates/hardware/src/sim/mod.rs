//! Simulation: the run driver, program loader, and trace output.

/// ELF program image loader.
pub mod loader;

/// Simulator driver and halt reporting.
pub mod simulator;

/// Per-cycle trace output.
pub mod tracer;

pub use simulator::{Halt, Simulator};
pub use tracer::Tracer;
