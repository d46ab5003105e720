//! Word-addressable memory model.
//!
//! This module implements the memory block used for both instruction and data
//! memory. It provides:
//! 1. **Port Access:** A single enable-gated read/write port with fault reporting.
//! 2. **Host Access:** Bounds-checked helpers for the program loader and dumps.
//!
//! A block covers `[base, base + size)` and supports aligned word accesses
//! only; anything outside the range or not 4-byte aligned faults.

use crate::common::MemOp;

/// A word-addressable memory block with a fixed base address and size.
#[derive(Clone, Debug)]
pub struct Memory {
    base: u32,
    size: u32,
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zero-filled memory block.
    ///
    /// # Arguments
    ///
    /// * `base` - First byte address covered by this block.
    /// * `size` - Size of the block in bytes (rounded down to whole words).
    pub fn new(base: u32, size: u32) -> Self {
        Self {
            base,
            size,
            words: vec![0; (size / 4) as usize],
        }
    }

    /// Returns the base address of this block.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Returns the size of this block in bytes.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Performs one port access.
    ///
    /// A disabled port never faults and returns `(0, true)`. An enabled
    /// access fails iff `addr` is outside the block or not word-aligned.
    /// Reads return the addressed word; writes store `data` and return 0.
    ///
    /// # Arguments
    ///
    /// * `enable` - Port enable signal.
    /// * `addr` - Byte address of the word to access.
    /// * `data` - Word to store (ignored for reads).
    /// * `op` - Port function: read or write.
    ///
    /// # Returns
    ///
    /// `(value, ok)` where `ok` is `false` on an access fault.
    pub fn access(&mut self, enable: bool, addr: u32, data: u32, op: MemOp) -> (u32, bool) {
        if !enable {
            return (0, true);
        }

        let offset = addr.wrapping_sub(self.base);
        if offset >= self.size || addr & 0x3 != 0 {
            return (0, false);
        }

        let idx = (offset / 4) as usize;
        match op {
            MemOp::Read => (self.words[idx], true),
            MemOp::Write => {
                self.words[idx] = data;
                (0, true)
            }
        }
    }

    /// Returns `true` if `addr..addr + len` lies entirely inside this block.
    pub fn contains_range(&self, addr: u32, len: u32) -> bool {
        let start = u64::from(addr);
        let end = start + u64::from(len);
        start >= u64::from(self.base) && end <= u64::from(self.base) + u64::from(self.size)
    }

    /// Reads a word without driving the port; host-side helper for dumps and tests.
    ///
    /// Returns `None` for out-of-range or misaligned addresses.
    pub fn read_word(&self, addr: u32) -> Option<u32> {
        let offset = addr.wrapping_sub(self.base);
        if offset >= self.size || addr & 0x3 != 0 {
            return None;
        }
        Some(self.words[(offset / 4) as usize])
    }

    /// Writes a word without driving the port; host-side helper for the loader.
    ///
    /// Returns `false` for out-of-range or misaligned addresses.
    pub fn write_word(&mut self, addr: u32, data: u32) -> bool {
        let offset = addr.wrapping_sub(self.base);
        if offset >= self.size || addr & 0x3 != 0 {
            return false;
        }
        self.words[(offset / 4) as usize] = data;
        true
    }

    /// Dumps all non-zero words to stdout with their addresses.
    pub fn dump(&self) {
        println!("Data Memory");
        println!("===========");
        for (i, word) in self.words.iter().enumerate() {
            if *word != 0 {
                println!("{:#010x}: {:#010x}", self.base + (i as u32) * 4, word);
            }
        }
    }
}
