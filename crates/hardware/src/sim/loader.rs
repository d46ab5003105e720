//! Program image loader.
//!
//! This module loads a statically linked 32-bit little-endian RISC-V ELF
//! executable into the modeled memories. It performs:
//! 1. **Validation:** Refuses wrong class, endianness, object type, or machine.
//! 2. **Placement:** Writes each loadable segment word-by-word into whichever
//!    memory contains its virtual address range.
//! 3. **Entry Point:** Returns the ELF entry point as the initial PC.
//!
//! Any failure aborts the load before cycle 0; nothing is partially
//! simulated on a bad image.

use std::fs;
use std::path::Path;

use object::elf::{EM_RISCV, ET_EXEC, FileHeader32, PT_LOAD};
use object::read::elf::{FileHeader as _, ProgramHeader as _};
use object::{Endian as _, Endianness};

use crate::common::LoadError;
use crate::core::memory::Memory;

/// Loads an ELF executable from disk into the memories.
///
/// # Arguments
///
/// * `path` - Path to the ELF file.
/// * `imem` - Instruction memory.
/// * `dmem` - Data memory.
///
/// # Returns
///
/// The entry point, to be used as the initial PC.
pub fn load_elf(path: &Path, imem: &mut Memory, dmem: &mut Memory) -> Result<u32, LoadError> {
    let data = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_image(&data, imem, dmem)
}

/// Loads an in-memory ELF image into the memories.
///
/// See [`load_elf`] for the validation and placement rules.
pub fn load_image(data: &[u8], imem: &mut Memory, dmem: &mut Memory) -> Result<u32, LoadError> {
    let header = FileHeader32::<Endianness>::parse(data)?;
    let endian = header.endian()?;
    if !endian.is_little_endian() {
        return Err(LoadError::NotLittleEndian);
    }

    let e_type = header.e_type.get(endian);
    if e_type != ET_EXEC {
        return Err(LoadError::NotExecutable(e_type));
    }
    let e_machine = header.e_machine.get(endian);
    if e_machine != EM_RISCV {
        return Err(LoadError::WrongMachine(e_machine));
    }

    for ph in header.program_headers(endian, data)? {
        if ph.p_type(endian) != PT_LOAD {
            continue;
        }

        let addr = ph.p_vaddr(endian);
        let memsz = ph.p_memsz(endian);
        if memsz == 0 {
            continue;
        }

        let mem: &mut Memory = if imem.contains_range(addr, memsz) {
            &mut *imem
        } else if dmem.contains_range(addr, memsz) {
            &mut *dmem
        } else {
            return Err(LoadError::UnmappedSegment {
                addr,
                size: memsz,
            });
        };

        let bytes = ph
            .data(endian, data)
            .map_err(|()| LoadError::BadSegment { addr })?;

        for (i, chunk) in bytes.chunks(4).enumerate() {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            if !mem.write_word(addr + (i as u32) * 4, u32::from_le_bytes(word)) {
                return Err(LoadError::UnmappedSegment {
                    addr,
                    size: memsz,
                });
            }
        }

        tracing::debug!(
            addr = format_args!("{addr:#010x}"),
            filesz = bytes.len(),
            memsz,
            base = format_args!("{:#010x}", mem.base()),
            "segment placed"
        );
    }

    let entry = header.e_entry.get(endian);
    tracing::debug!(entry = format_args!("{entry:#010x}"), "image loaded");
    Ok(entry)
}
