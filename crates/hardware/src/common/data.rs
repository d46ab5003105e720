//! Memory access type definitions.

/// Port function selector for a memory access.
///
/// Passed to [`crate::core::memory::Memory::access`] alongside the enable
/// signal to choose between a load and a store on the same port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// Read the word at the given address.
    #[default]
    Read,

    /// Store the given word at the given address.
    Write,
}
