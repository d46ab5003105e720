//! Common types and constants used throughout the pipeline simulator.
//!
//! This module provides the fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Memory-map geometry, word geometry, and the bubble encoding.
//! 2. **Memory Access:** The port function selector for memory operations.
//! 3. **Error Handling:** The architectural exception bitfield and host-side error types.
//! 4. **Register File:** The 32-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Exception bitfield and host-side error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::BUBBLE;
pub use data::MemOp;
pub use error::{Exception, LoadError};
pub use reg::RegisterFile;
