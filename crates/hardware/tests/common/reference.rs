//! Reference single-step RV32I interpreter.
//!
//! Executes the same word-only subset as the pipeline, one instruction per
//! step with no overlap, for differential testing: any instruction sequence
//! without timing-visible behavior must produce the same architectural
//! writes in the same order on both engines.

use snurisc_core::common::constants::{DMEM_BASE, DMEM_SIZE, IMEM_BASE, IMEM_SIZE};
use snurisc_core::isa::decode::{imm_b, imm_i, imm_j, imm_s, imm_u};
use snurisc_core::isa::{InstructionBits, Opcode};

/// Why the reference interpreter stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefHalt {
    /// `ebreak` executed.
    Ebreak,
    /// Unknown encoding.
    Illegal,
    /// Fetch or data access fault.
    Fault,
}

/// The reference core: sequential, unpipelined.
pub struct RefCore {
    regs: [u32; 32],
    pc: u32,
    imem: Vec<u32>,
    dmem: Vec<u32>,
    /// Every architectural register write, in retirement order.
    pub writes: Vec<(usize, u32)>,
}

impl RefCore {
    /// Creates a reference core with `program` at the imem base.
    pub fn new(program: &[u32]) -> Self {
        let mut imem = vec![0u32; (IMEM_SIZE / 4) as usize];
        imem[..program.len()].copy_from_slice(program);
        Self {
            regs: [0; 32],
            pc: IMEM_BASE,
            imem,
            dmem: vec![0u32; (DMEM_SIZE / 4) as usize],
            writes: Vec::new(),
        }
    }

    /// Reads a register.
    pub fn reg(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    fn write(&mut self, rd: usize, val: u32) {
        if rd != 0 {
            self.regs[rd] = val;
            self.writes.push((rd, val));
        }
    }

    fn load(&self, addr: u32) -> Option<u32> {
        let off = addr.wrapping_sub(DMEM_BASE);
        if off < DMEM_SIZE && addr & 3 == 0 {
            Some(self.dmem[(off / 4) as usize])
        } else {
            None
        }
    }

    fn store(&mut self, addr: u32, val: u32) -> bool {
        let off = addr.wrapping_sub(DMEM_BASE);
        if off < DMEM_SIZE && addr & 3 == 0 {
            self.dmem[(off / 4) as usize] = val;
            true
        } else {
            false
        }
    }

    /// Executes one instruction; `Some` means the run is over.
    pub fn step(&mut self) -> Option<RefHalt> {
        let off = self.pc.wrapping_sub(IMEM_BASE);
        if off >= IMEM_SIZE || self.pc & 3 != 0 {
            return Some(RefHalt::Fault);
        }
        let inst = self.imem[(off / 4) as usize];

        let rd = inst.rd();
        let a = self.reg(inst.rs1());
        let b = self.reg(inst.rs2());
        let mut next_pc = self.pc.wrapping_add(4);

        match Opcode::decode(inst) {
            Opcode::Lui => self.write(rd, imm_u(inst)),
            Opcode::Auipc => self.write(rd, self.pc.wrapping_add(imm_u(inst))),
            Opcode::Jal => {
                self.write(rd, self.pc.wrapping_add(4));
                next_pc = self.pc.wrapping_add(imm_j(inst));
            }
            Opcode::Jalr => {
                let target = a.wrapping_add(imm_i(inst)) & !1;
                self.write(rd, self.pc.wrapping_add(4));
                next_pc = target;
            }
            Opcode::Beq => {
                if a == b {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Bne => {
                if a != b {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Blt => {
                if (a as i32) < (b as i32) {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Bge => {
                if (a as i32) >= (b as i32) {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Bltu => {
                if a < b {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Bgeu => {
                if a >= b {
                    next_pc = self.pc.wrapping_add(imm_b(inst));
                }
            }
            Opcode::Lw => match self.load(a.wrapping_add(imm_i(inst))) {
                Some(val) => self.write(rd, val),
                None => return Some(RefHalt::Fault),
            },
            Opcode::Sw => {
                if !self.store(a.wrapping_add(imm_s(inst)), b) {
                    return Some(RefHalt::Fault);
                }
            }
            Opcode::Addi => self.write(rd, a.wrapping_add(imm_i(inst))),
            Opcode::Slti => self.write(rd, ((a as i32) < (imm_i(inst) as i32)) as u32),
            Opcode::Sltiu => self.write(rd, (a < imm_i(inst)) as u32),
            Opcode::Xori => self.write(rd, a ^ imm_i(inst)),
            Opcode::Ori => self.write(rd, a | imm_i(inst)),
            Opcode::Andi => self.write(rd, a & imm_i(inst)),
            Opcode::Slli => self.write(rd, a << (imm_i(inst) & 0x1f)),
            Opcode::Srli => self.write(rd, a >> (imm_i(inst) & 0x1f)),
            Opcode::Srai => self.write(rd, ((a as i32) >> (imm_i(inst) & 0x1f)) as u32),
            Opcode::Add => self.write(rd, a.wrapping_add(b)),
            Opcode::Sub => self.write(rd, a.wrapping_sub(b)),
            Opcode::Sll => self.write(rd, a << (b & 0x1f)),
            Opcode::Slt => self.write(rd, ((a as i32) < (b as i32)) as u32),
            Opcode::Sltu => self.write(rd, (a < b) as u32),
            Opcode::Xor => self.write(rd, a ^ b),
            Opcode::Srl => self.write(rd, a >> (b & 0x1f)),
            Opcode::Sra => self.write(rd, ((a as i32) >> (b & 0x1f)) as u32),
            Opcode::Or => self.write(rd, a | b),
            Opcode::And => self.write(rd, a & b),
            Opcode::Ebreak => return Some(RefHalt::Ebreak),
            Opcode::Illegal => return Some(RefHalt::Illegal),
        }

        self.pc = next_pc;
        None
    }

    /// Steps until the run ends or `max` instructions retire.
    ///
    /// # Returns
    ///
    /// The halt cause and the number of instructions executed (counting the
    /// `ebreak` itself, matching the pipeline's retirement rule).
    pub fn run(&mut self, max: usize) -> (RefHalt, usize) {
        for executed in 0..max {
            if let Some(halt) = self.step() {
                let retired = match halt {
                    RefHalt::Ebreak => executed + 1,
                    _ => executed,
                };
                return (halt, retired);
            }
        }
        (RefHalt::Fault, max)
    }
}
