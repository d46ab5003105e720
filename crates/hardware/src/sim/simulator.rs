//! Simulator: owns the CPU and drives the run loop.
//!
//! The simulator wraps the [`Cpu`] with program loading, per-cycle tracing,
//! the cycle guard, and the end-of-run report. One call to [`Simulator::run`]
//! executes cycles until write-back surfaces an exception or the cycle guard
//! trips.

use std::fmt;
use std::path::Path;

use crate::common::{Exception, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::CycleState;
use crate::sim::loader;
use crate::sim::tracer::{LOG_CYCLE_MEM, LOG_CYCLE_REGS, LOG_DUMP_MEM, LOG_DUMP_REGS, Tracer};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// An instruction reached write-back carrying an exception.
    Exception {
        /// The exception bits it carried.
        cause: Exception,
        /// Its PC.
        pc: u32,
    },

    /// The configured cycle guard tripped.
    CycleLimit(u64),
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Exception { cause, pc } => write!(f, "{cause} at {pc:#010x}"),
            Halt::CycleLimit(cycles) => write!(f, "cycle limit of {cycles} reached"),
        }
    }
}

/// Top-level simulator: CPU plus tracing and run control.
pub struct Simulator {
    /// The modeled CPU.
    pub cpu: Cpu,
    tracer: Tracer,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            tracer: Tracer::new(config.general.log_level, config.general.log_start),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads an ELF executable and points the fetch PC at its entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a statically linked RV32 ELF executable.
    ///
    /// # Returns
    ///
    /// The entry point on success.
    pub fn load(&mut self, path: &Path) -> Result<u32, LoadError> {
        let entry = loader::load_elf(path, &mut self.cpu.imem, &mut self.cpu.dmem)?;
        self.cpu.set_pc(entry);
        Ok(entry)
    }

    /// Places raw words into whichever memory contains each address.
    ///
    /// Bare-metal helper for tests and host code that bypasses the ELF
    /// loader. Words outside both memories are dropped.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) {
        for (i, word) in words.iter().enumerate() {
            let a = addr.wrapping_add((i as u32) * 4);
            let mem = if self.cpu.imem.contains_range(a, 4) {
                &mut self.cpu.imem
            } else {
                &mut self.cpu.dmem
            };
            let _placed = mem.write_word(a, *word);
        }
    }

    /// Runs one cycle, emitting any configured trace output.
    pub fn step(&mut self) -> CycleState {
        let state = self.cpu.tick();
        self.tracer.cycle(&state);
        if self.tracer.on(LOG_CYCLE_REGS, state.cycle) {
            self.cpu.regs.dump();
        }
        if self.tracer.on(LOG_CYCLE_MEM, state.cycle) {
            self.cpu.dmem.dump();
        }
        state
    }

    /// Runs until write-back surfaces an exception or the cycle guard trips.
    pub fn run(&mut self) -> Halt {
        loop {
            let state = self.step();
            if !state.wb.exception.is_none() {
                return Halt::Exception {
                    cause: state.wb.exception,
                    pc: state.wb.pc,
                };
            }
            if self.cpu.stats.cycles >= self.max_cycles {
                return Halt::CycleLimit(self.cpu.stats.cycles);
            }
        }
    }

    /// Prints the end-of-run report: halt cause, configured dumps, statistics.
    pub fn report(&self, halt: &Halt) {
        println!();
        println!("Simulation halted: {halt}");
        if self.tracer.level() >= LOG_DUMP_REGS {
            self.cpu.regs.dump();
        }
        if self.tracer.level() >= LOG_DUMP_MEM {
            self.cpu.dmem.dump();
        }
        self.cpu.stats.print();
    }
}
