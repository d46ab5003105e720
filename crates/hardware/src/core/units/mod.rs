//! Functional units of the datapath.

/// Arithmetic logic unit.
pub mod alu;

pub use alu::Alu;
