//! Per-cycle trace output.
//!
//! This module renders the state of every pipeline stage as trace lines in
//! the format `<cycle> [<stage>] 0x<pc>: <disassembly>   # <info>`, gated by
//! a verbosity level and a start cycle. The level ladder:
//!
//! | level | output |
//! |-------|--------|
//! | 0 | silent |
//! | 1 | register dump at end of run |
//! | 2 | + data-memory dump at end of run |
//! | 3 | + per-retirement trace (WB lines) |
//! | 4 | + per-cycle per-stage trace |
//! | 5 | + ALU and forwarding detail |
//! | 6 | + register dump each cycle |
//! | 7 | + data-memory dump each cycle |

use crate::common::MemOp;
use crate::core::pipeline::CycleState;
use crate::core::pipeline::signals::PcSel;
use crate::isa::disasm::disassemble;

/// No output at all.
pub const LOG_SILENT: u8 = 0;
/// Dump registers at end of run.
pub const LOG_DUMP_REGS: u8 = 1;
/// Also dump data memory at end of run.
pub const LOG_DUMP_MEM: u8 = 2;
/// Also trace each retired instruction.
pub const LOG_RETIRE: u8 = 3;
/// Also trace every stage every cycle.
pub const LOG_STAGES: u8 = 4;
/// Also include ALU and forwarding detail.
pub const LOG_DETAIL: u8 = 5;
/// Also dump registers each cycle.
pub const LOG_CYCLE_REGS: u8 = 6;
/// Also dump data memory each cycle.
pub const LOG_CYCLE_MEM: u8 = 7;

/// Verbosity-gated trace writer.
#[derive(Clone, Copy, Debug)]
pub struct Tracer {
    level: u8,
    start: u64,
}

impl Tracer {
    /// Creates a tracer.
    ///
    /// # Arguments
    ///
    /// * `level` - Verbosity level (0-7).
    /// * `start` - Suppress trace output for cycles below this.
    pub fn new(level: u8, start: u64) -> Self {
        Self { level, start }
    }

    /// Returns the configured verbosity level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns `true` if output at `min` verbosity is enabled for `cycle`.
    pub fn on(&self, min: u8, cycle: u64) -> bool {
        self.level >= min && cycle >= self.start
    }

    /// Prints the trace lines for one cycle.
    pub fn cycle(&self, state: &CycleState) {
        let c = state.cycle;

        if self.on(LOG_STAGES, c) {
            self.line(c, "IF", state.iff.pc, state.iff.inst, &self.if_info(state));
            self.line(c, "ID", state.id_pc, state.id_inst, &self.id_info(state));
            self.line(c, "EX", state.ex.latch.pc, state.ex.latch.inst, &self.ex_info(state));
            self.line(c, "MM", state.mm.latch.pc, state.mm.latch.inst, &self.mm_info(state));
        }
        if self.on(LOG_RETIRE, c) {
            self.line(c, "WB", state.wb.pc, state.wb.inst, &Self::wb_info(state));
        }
    }

    fn line(&self, cycle: u64, stage: &str, pc: u32, inst: u32, info: &str) {
        println!(
            "{cycle:6} [{stage}] {pc:#010x}: {:<28} # {info}",
            disassemble(inst)
        );
    }

    fn if_info(&self, state: &CycleState) -> String {
        if state.iff.exception.is_none() {
            format!(
                "inst={:#010x}, pc_next={:#010x}",
                state.iff.inst, state.iff.pc_next
            )
        } else {
            format!("fetch fault, pc_next={:#010x}", state.iff.pc_next)
        }
    }

    fn id_info(&self, state: &CycleState) -> String {
        let l = &state.id.latch;
        let mut info = format!(
            "op1={:#010x}, op2={:#010x}, rs2={:#010x}",
            l.op1_data, l.op2_data, l.rs2_data
        );
        if self.level >= LOG_DETAIL {
            let ctl = &state.id.ctl;
            info.push_str(&format!(
                ", fwd=({:?},{:?},{:?})",
                ctl.fwd_op1, ctl.fwd_op2, ctl.fwd_rs2
            ));
            if ctl.pipe.id_stall {
                info.push_str(", load-use stall");
            }
        }
        if state.id.ctl.pipe.id_bubble {
            info.push_str(", squashed");
        }
        info
    }

    fn ex_info(&self, state: &CycleState) -> String {
        let mut info = format!("alu={:#010x}", state.ex.latch.alu_out);
        if self.level >= LOG_DETAIL {
            info.push_str(&format!(
                ", brjmp={:#010x}, jalr={:#010x}",
                state.ex.brjmp_target, state.ex.jump_reg_target
            ));
        }
        match state.id.ctl.pipe.pc_sel {
            PcSel::Plus4 => {}
            PcSel::BrJmp => info.push_str(&format!(" -> {:#010x}", state.ex.brjmp_target)),
            PcSel::Jalr => info.push_str(&format!(" -> {:#010x}", state.ex.jump_reg_target)),
        }
        info
    }

    fn mm_info(&self, state: &CycleState) -> String {
        let mm = &state.mm;
        if mm.fault {
            format!("access fault at {:#010x}", mm.addr)
        } else if mm.en {
            match mm.rw {
                MemOp::Read => format!("load [{:#010x}] -> {:#010x}", mm.addr, mm.mem_data),
                MemOp::Write => {
                    format!("store {:#010x} -> [{:#010x}]", mm.store_data, mm.addr)
                }
            }
        } else {
            format!("wbdata={:#010x}", mm.latch.wbdata)
        }
    }

    fn wb_info(state: &CycleState) -> String {
        let mut info = if state.wb.rf_wen {
            format!("x{} <= {:#010x}", state.wb.rd, state.wb.wbdata)
        } else {
            "-".to_string()
        };
        if !state.wb.exception.is_none() {
            info.push_str(&format!(" ! {}", state.wb.exception));
        }
        info
    }
}
