//! CPU aggregate and per-cycle driver.
//!
//! This module owns the complete architectural and microarchitectural state
//! of the modeled processor — register file, the two memories, the pipeline
//! latches, and the statistics — and drives the two-phase cycle:
//! 1. **Compute phase:** WB, MM, EX, ID, IF, in that order, each reading the
//!    previous cycle's latches.
//! 2. **Commit phase:** IF, ID, EX, MM, in that order, each replacing its
//!    latch record for the next cycle.
//!
//! Because reads and writes are separated into the two phases, the order
//! inside each phase is immaterial to the result; the reverse compute order
//! exists so Decode can observe Execute's and Memory's fresh combinational
//! outputs for the bypass network.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::memory::Memory;
use crate::core::pipeline::CycleState;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{decode, execute, fetch, memory as mem_stage, writeback};
use crate::stats::SimStats;

/// The modeled CPU.
pub struct Cpu {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Instruction memory.
    pub imem: Memory,
    /// Data memory.
    pub dmem: Memory,
    /// Pipeline latch state.
    pub latches: Latches,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed state and the configured memory map.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            imem: Memory::new(config.system.imem_base, config.system.imem_size),
            dmem: Memory::new(config.system.dmem_base, config.system.dmem_size),
            latches: Latches::default(),
            stats: SimStats::default(),
        }
    }

    /// Resets the fetch PC; the pipeline behind it keeps its state.
    pub fn set_pc(&mut self, pc: u32) {
        self.latches.reg_pc = pc;
    }

    /// Runs one cycle and returns everything it computed.
    ///
    /// The caller decides termination from the write-back outputs in the
    /// returned state: any non-empty exception there ends the run.
    pub fn tick(&mut self) -> CycleState {
        // Compute phase, reverse stage order over last cycle's latches.
        let wb = writeback::compute(&self.latches.mm_wb, &mut self.regs, &mut self.stats);
        let mm = mem_stage::compute(&self.latches.ex_mm, &mut self.dmem);
        let ex = execute::compute(&self.latches.id_ex);
        let id = decode::compute(
            &self.latches.if_id,
            &self.latches.id_ex,
            &self.latches.ex_mm,
            &self.latches.mm_wb,
            &self.regs,
            &ex,
            &mm,
        );
        let iff = fetch::compute(&mut self.imem, self.latches.reg_pc, id.ctl.pipe.pc_sel, &ex);

        let id_pc = self.latches.if_id.pc;
        let id_inst = self.latches.if_id.inst;

        // Commit phase, forward stage order.
        fetch::commit(&mut self.latches, &id.ctl.pipe, &iff);
        decode::commit(&mut self.latches, &id);
        execute::commit(&mut self.latches, &id.ctl.pipe, &ex);
        mem_stage::commit(&mut self.latches, &mm);

        CycleState {
            cycle: self.stats.cycles,
            iff,
            id,
            id_pc,
            id_inst,
            ex,
            mm,
            wb,
        }
    }
}
