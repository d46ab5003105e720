//! Control unit: decode signals, hazard detection, and pipeline control.
//!
//! This module implements the purely combinational control unit evaluated
//! once per cycle from within the Decode stage. It performs:
//! 1. **Signal Generation:** Maps the opcode identity of the instruction in
//!    Decode to its control vector.
//! 2. **Operand Forwarding:** Selects the bypass source for each of Decode's
//!    register reads with priority EX, then MM, then WB.
//! 3. **Load-Use Stalls:** Detects a Decode-stage dependence on a load still
//!    in Execute and stalls the front of the pipeline for one cycle.
//! 4. **Control-Hazard Squashes:** Converts the speculatively fetched
//!    fall-through slots into bubbles when Execute resolves a taken branch
//!    or a jump.

use crate::common::{BUBBLE, Exception, MemOp};
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::{
    AluFun, BrType, ControlSignals, FwdSrc, MemWidth, Op1Sel, Op2Sel, PcSel, WbSel,
};
use crate::core::pipeline::stages::execute::ExecuteOutput;
use crate::isa::{InstructionBits, Opcode};

/// Pipeline-control signals for the commit phase of the current cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipeCtl {
    /// Next-PC source.
    pub pc_sel: PcSel,
    /// Hold the fetch PC this cycle.
    pub if_stall: bool,
    /// Hold the IF/ID latch this cycle.
    pub id_stall: bool,
    /// Write a bubble into the IF/ID latch this cycle.
    pub id_bubble: bool,
    /// Write a bubble into the ID/EX latch this cycle.
    pub ex_bubble: bool,
    /// Neutralize the EX/MM latch write this cycle (exception still propagates).
    pub mm_bubble: bool,
}

/// Everything the control unit derives for one cycle.
#[derive(Clone, Copy, Debug)]
pub struct CtlOutput {
    /// The Decode-stage instruction, replaced with a bubble when illegal.
    pub inst: u32,
    /// Decode control vector for `inst`.
    pub signals: ControlSignals,
    /// Exception contribution of decode (illegal instruction or `ebreak`).
    pub exception: Exception,
    /// Forwarding source for the first ALU operand read.
    pub fwd_op1: FwdSrc,
    /// Forwarding source for rs2 as the second ALU operand.
    pub fwd_op2: FwdSrc,
    /// Forwarding source for rs2 as store data / branch comparand.
    pub fwd_rs2: FwdSrc,
    /// Stall, bubble, and PC-selection signals.
    pub pipe: PipeCtl,
}

macro_rules! sig {
    ($br:ident, $op1:ident, $op2:ident, $r1:literal, $r2:literal, $alu:ident, $wb:ident, $wen:literal) => {
        ControlSignals {
            br_type: BrType::$br,
            op1_sel: Op1Sel::$op1,
            op2_sel: Op2Sel::$op2,
            rs1_oen: $r1,
            rs2_oen: $r2,
            alu_fun: AluFun::$alu,
            wb_sel: WbSel::$wb,
            rf_wen: $wen,
            dmem_en: false,
            dmem_rw: MemOp::Read,
            width: MemWidth::Nop,
        }
    };
}

/// Returns the decode control vector for an opcode identity.
///
/// `Illegal`, `Ebreak`, and the bubble encoding all map to the safe vector
/// (no writes, no memory access, not a branch); their exception handling is
/// layered on by [`generate`].
pub fn decode_signals(op: Opcode) -> ControlSignals {
    match op {
        Opcode::Lui => sig!(None, X, ImmU, false, false, Copy2, Alu, true),
        Opcode::Auipc => sig!(None, Pc, ImmU, false, false, Add, Alu, true),

        Opcode::Jal => sig!(J, X, ImmJ, false, false, X, Pc4, true),
        Opcode::Jalr => sig!(Jr, Rs1, ImmI, true, false, Add, Pc4, true),

        Opcode::Beq => sig!(Eq, Rs1, ImmB, true, true, Seq, X, false),
        Opcode::Bne => sig!(Ne, Rs1, ImmB, true, true, Seq, X, false),
        Opcode::Blt => sig!(Lt, Rs1, ImmB, true, true, Slt, X, false),
        Opcode::Bge => sig!(Ge, Rs1, ImmB, true, true, Slt, X, false),
        Opcode::Bltu => sig!(Ltu, Rs1, ImmB, true, true, Sltu, X, false),
        Opcode::Bgeu => sig!(Geu, Rs1, ImmB, true, true, Sltu, X, false),

        Opcode::Lw => ControlSignals {
            dmem_en: true,
            dmem_rw: MemOp::Read,
            width: MemWidth::Word,
            ..sig!(None, Rs1, ImmI, true, false, Add, Mem, true)
        },
        Opcode::Sw => ControlSignals {
            dmem_en: true,
            dmem_rw: MemOp::Write,
            width: MemWidth::Word,
            ..sig!(None, Rs1, ImmS, true, true, Add, X, false)
        },

        Opcode::Addi => sig!(None, Rs1, ImmI, true, false, Add, Alu, true),
        Opcode::Slti => sig!(None, Rs1, ImmI, true, false, Slt, Alu, true),
        Opcode::Sltiu => sig!(None, Rs1, ImmI, true, false, Sltu, Alu, true),
        Opcode::Xori => sig!(None, Rs1, ImmI, true, false, Xor, Alu, true),
        Opcode::Ori => sig!(None, Rs1, ImmI, true, false, Or, Alu, true),
        Opcode::Andi => sig!(None, Rs1, ImmI, true, false, And, Alu, true),

        Opcode::Slli => sig!(None, Rs1, ImmI, true, false, Sll, Alu, true),
        Opcode::Srli => sig!(None, Rs1, ImmI, true, false, Srl, Alu, true),
        Opcode::Srai => sig!(None, Rs1, ImmI, true, false, Sra, Alu, true),

        Opcode::Add => sig!(None, Rs1, Rs2, true, true, Add, Alu, true),
        Opcode::Sub => sig!(None, Rs1, Rs2, true, true, Sub, Alu, true),
        Opcode::Sll => sig!(None, Rs1, Rs2, true, true, Sll, Alu, true),
        Opcode::Slt => sig!(None, Rs1, Rs2, true, true, Slt, Alu, true),
        Opcode::Sltu => sig!(None, Rs1, Rs2, true, true, Sltu, Alu, true),
        Opcode::Xor => sig!(None, Rs1, Rs2, true, true, Xor, Alu, true),
        Opcode::Srl => sig!(None, Rs1, Rs2, true, true, Srl, Alu, true),
        Opcode::Sra => sig!(None, Rs1, Rs2, true, true, Sra, Alu, true),
        Opcode::Or => sig!(None, Rs1, Rs2, true, true, Or, Alu, true),
        Opcode::And => sig!(None, Rs1, Rs2, true, true, And, Alu, true),

        Opcode::Ebreak | Opcode::Illegal => ControlSignals::default(),
    }
}

/// Selects the forwarding source for one source-register read.
///
/// Scans Execute, then Memory, then Write-back; a stage matches iff its
/// latched instruction writes a non-zero `rd` equal to `rs`. Disabled
/// operand reads never forward.
pub fn forward(
    rs: usize,
    enabled: bool,
    id_ex: &IdEx,
    ex_mm: &ExMem,
    mm_wb: &MemWb,
) -> FwdSrc {
    if !enabled {
        return FwdSrc::None;
    }

    let hit = |wen: bool, rd: usize| wen && rd != 0 && rd == rs;

    if hit(id_ex.rf_wen, id_ex.rd) {
        FwdSrc::Ex
    } else if hit(ex_mm.rf_wen, ex_mm.rd) {
        FwdSrc::Mem
    } else if hit(mm_wb.rf_wen, mm_wb.rd) {
        FwdSrc::Wb
    } else {
        FwdSrc::None
    }
}

/// Checks whether Decode must stall for a load still in Execute.
///
/// A load's value is produced by the Memory stage, one cycle too late for
/// the Execute-stage bypass; when the instruction in Decode reads the load's
/// destination, the front of the pipeline holds for one cycle, after which
/// the value is available from the MM bypass.
pub fn need_stall_load_use(
    id_ex: &IdEx,
    rs1: usize,
    rs1_en: bool,
    rs2: usize,
    rs2_en: bool,
) -> bool {
    let is_load = id_ex.rf_wen && id_ex.wb_sel == WbSel::Mem;
    if !is_load || id_ex.rd == 0 {
        return false;
    }
    (rs1_en && id_ex.rd == rs1) || (rs2_en && id_ex.rd == rs2)
}

/// Resolves whether the instruction in Execute redirects the PC.
///
/// Jumps are always taken; conditional branches consult the ALU comparison
/// result (`Seq`/`Slt`/`Sltu` produce 1 or 0).
pub fn branch_taken(br_type: BrType, alu_out: u32) -> bool {
    match br_type {
        BrType::None => false,
        BrType::Eq | BrType::Lt | BrType::Ltu => alu_out != 0,
        BrType::Ne | BrType::Ge | BrType::Geu => alu_out == 0,
        BrType::J | BrType::Jr => true,
    }
}

/// Runs the control unit for one cycle.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch (the instruction now in Decode).
/// * `id_ex` - The ID/EX latch (the instruction now in Execute).
/// * `ex_mm` - The EX/MM latch (the instruction now in Memory).
/// * `mm_wb` - The MM/WB latch (the instruction now in Write-back).
/// * `ex` - Execute's combinational outputs for this cycle.
pub fn generate(
    if_id: &IfId,
    id_ex: &IdEx,
    ex_mm: &ExMem,
    mm_wb: &MemWb,
    ex: &ExecuteOutput,
) -> CtlOutput {
    let op = Opcode::decode(if_id.inst);
    let mut inst = if_id.inst;
    let mut exception = Exception::NONE;

    match op {
        Opcode::Illegal => {
            // An unknown encoding must not reach Execute as anything but a
            // bubble, yet the fault itself rides the exception field so
            // write-back can terminate at the offending PC.
            exception |= Exception::ILLEGAL_INST;
            inst = BUBBLE;
        }
        Opcode::Ebreak => {
            exception |= Exception::EBREAK;
        }
        _ => {}
    }

    let signals = if inst == BUBBLE {
        ControlSignals::default()
    } else {
        decode_signals(op)
    };

    let rs1 = inst.rs1();
    let rs2 = inst.rs2();

    let fwd_op1 = forward(rs1, signals.rs1_oen, id_ex, ex_mm, mm_wb);
    let fwd_rs2 = forward(rs2, signals.rs2_oen, id_ex, ex_mm, mm_wb);
    let fwd_op2 = if signals.op2_sel == Op2Sel::Rs2 {
        fwd_rs2
    } else {
        FwdSrc::None
    };

    let taken = branch_taken(id_ex.br_type, ex.latch.alu_out);
    let pc_sel = match id_ex.br_type {
        BrType::Jr => PcSel::Jalr,
        _ if taken => PcSel::BrJmp,
        _ => PcSel::Plus4,
    };

    let mut pipe = PipeCtl {
        pc_sel,
        ..PipeCtl::default()
    };

    if pc_sel != PcSel::Plus4 {
        // The slots fetched down the fall-through path are wrong; squash
        // them. A squashed slot carries no exception downstream.
        pipe.id_bubble = true;
        pipe.ex_bubble = true;
    } else if need_stall_load_use(id_ex, rs1, signals.rs1_oen, rs2, signals.rs2_oen) {
        pipe.if_stall = true;
        pipe.id_stall = true;
        pipe.ex_bubble = true;
    }

    // A slot that faulted in fetch or decode must not execute; its exception
    // still propagates through the neutralized latch.
    pipe.mm_bubble = id_ex.exception.contains(Exception::IMEM_ERROR)
        || id_ex.exception.contains(Exception::ILLEGAL_INST);

    CtlOutput {
        inst,
        signals,
        exception,
        fwd_op1,
        fwd_op2,
        fwd_rs2,
        pipe,
    }
}
