//! RV32 General-Purpose Register File.
//!
//! This module implements the general-purpose register file. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides a dump of the complete register state.

use crate::common::constants::NUM_REGS;

/// General-purpose register file.
///
/// Contains 32 word-sized registers. Register `x0` is hardwired to zero:
/// reads always return 0 and writes are silently ignored.
///
/// Register indices outside `0..32` are a programmer error and panic.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The word to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stdout, four per line.
    pub fn dump(&self) {
        println!("Registers");
        println!("=========");
        for i in (0..NUM_REGS).step_by(4) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
