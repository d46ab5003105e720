//! Exception and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Architectural Exceptions:** The bitfield carried through the pipeline latches.
//! 2. **Loader Errors:** Failures while reading or placing an ELF image.
//! 3. **Configuration Errors:** Failures while reading a configuration file.

use std::fmt;

use thiserror::Error;

/// Architectural exception bits carried through the pipeline.
///
/// An exception is attached to an instruction in the stage that detects it
/// and rides the latches unchanged until the instruction reaches write-back,
/// where any non-empty value terminates the simulation. Squashed instructions
/// always carry [`Exception::NONE`].
///
/// The bits form a set: a single instruction can in principle accumulate more
/// than one (a fetch fault is also an unknown encoding, for example), and
/// reporting picks the most severe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exception(u32);

impl Exception {
    /// No exception pending.
    pub const NONE: Exception = Exception(0);

    /// Instruction-fetch fault (set in IF).
    pub const IMEM_ERROR: Exception = Exception(1 << 0);

    /// Unknown instruction encoding (set in ID).
    pub const ILLEGAL_INST: Exception = Exception(1 << 1);

    /// Voluntary termination via `ebreak` (set in ID).
    pub const EBREAK: Exception = Exception(1 << 2);

    /// Data-memory access fault (set in MM).
    pub const DMEM_ERROR: Exception = Exception(1 << 3);

    /// Returns `true` if no exception bit is set.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Exception) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Exception {
    type Output = Exception;

    fn bitor(self, rhs: Exception) -> Exception {
        Exception(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Exception {
    fn bitor_assign(&mut self, rhs: Exception) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Exception {
    /// Formats the most severe pending exception bit.
    ///
    /// Severity order: data-memory fault, ebreak, illegal instruction,
    /// instruction-fetch fault.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Exception::DMEM_ERROR) {
            write!(f, "invalid data memory access")
        } else if self.contains(Exception::EBREAK) {
            write!(f, "ebreak")
        } else if self.contains(Exception::ILLEGAL_INST) {
            write!(f, "illegal instruction")
        } else if self.contains(Exception::IMEM_ERROR) {
            write!(f, "invalid instruction memory access")
        } else {
            write!(f, "none")
        }
    }
}

/// Errors raised while loading a program image.
///
/// The loader refuses anything that is not a statically linked 32-bit
/// little-endian RISC-V executable whose loadable segments fall inside the
/// modeled memories.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read from disk.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed 32-bit ELF image.
    #[error("not a valid 32-bit ELF image: {0}")]
    Parse(#[from] object::read::Error),

    /// The image is not little-endian.
    #[error("not a little-endian ELF image")]
    NotLittleEndian,

    /// The image is not an executable (`e_type != ET_EXEC`).
    #[error("not an executable ELF image (e_type {0:#06x})")]
    NotExecutable(u16),

    /// The image is not for the RISC-V architecture.
    #[error("not a RISC-V ELF image (e_machine {0:#06x})")]
    WrongMachine(u16),

    /// A loadable segment does not fit in either memory.
    #[error("segment at {addr:#010x} ({size} bytes) maps outside both memories")]
    UnmappedSegment {
        /// Virtual address of the offending segment.
        addr: u32,
        /// Size of the offending segment in bytes.
        size: u32,
    },

    /// A segment's file range lies outside the image.
    #[error("malformed segment at {addr:#010x}")]
    BadSegment {
        /// Virtual address of the offending segment.
        addr: u32,
    },
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read from disk.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
