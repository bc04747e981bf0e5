use super::microcode::{MicrocodeError, Result as MicrocodeResult};
use super::opcode;
use crate::memory::RAM as Memory;
use crate::operand_mode::OperandMode;
use crate::registers::Registers;
use std::fmt;

pub type BoxedMicrocode =
    Box<dyn Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>>;

/*
 * CPUInstruction
 * An opcode fetched at a given address, decoded once with its operands.
 * The operand count, the ALU flag and the PC flag come from the opcode bit
 * layout, see the `opcode` module.
 */
pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operand_mode: OperandMode,
    pub operand_count: usize,
    pub is_alu: bool,
    pub sets_pc: bool,
    pub microcode: BoxedMicrocode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        operand_mode: OperandMode,
        microcode: impl Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operand_mode,
            operand_count: opcode::operand_count(opcode),
            is_alu: opcode::is_alu(opcode),
            sets_pc: opcode::sets_pc(opcode),
            microcode: Box::new(microcode),
        }
    }

    /// Runs the microcode. Unless the instruction owns the program counter,
    /// the counter is then moved past the operands.
    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        let log_line = (self.microcode)(memory, registers, self)?;

        if !self.sets_pc {
            registers.program_counter = self.next_address();
        }

        Ok(log_line)
    }

    pub fn next_address(&self) -> usize {
        self.address + 1 + self.operand_count
    }

    pub fn is_halt(&self) -> bool {
        self.opcode == opcode::HLT
    }

    pub fn register_a(&self) -> MicrocodeResult<u8> {
        self.operand_mode
            .register_a()
            .ok_or(MicrocodeError::UnsupportedOperation(self.opcode))
    }

    pub fn register_b(&self) -> MicrocodeResult<u8> {
        self.operand_mode
            .register_b()
            .ok_or(MicrocodeError::UnsupportedOperation(self.opcode))
    }

    pub fn immediate(&self) -> MicrocodeResult<u8> {
        self.operand_mode
            .immediate()
            .ok_or(MicrocodeError::UnsupportedOperation(self.opcode))
    }
}

fn byte_sequence(opcode: u8, operand_mode: &OperandMode) -> String {
    let mut bytes = vec![opcode];
    bytes.extend(operand_mode.get_operands());

    format!(
        "({})",
        bytes
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<String>>()
            .join(" ")
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "#0x{:02X}: {: <14}{: <4} {}",
            self.address,
            byte_sequence(self.opcode, &self.operand_mode),
            self.mnemonic,
            self.operand_mode
        );

        write!(f, "{}", line.trim_end())
    }
}

/*
 * LogLine
 * Trace record of one executed instruction. `output` holds what the
 * instruction prints on the output channel, if anything.
 */
#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operand_mode: OperandMode,
    pub outcome: String,
    pub output: Option<String>,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            operand_mode: cpu_instruction.operand_mode,
            outcome,
            output: None,
        }
    }

    pub fn with_output(mut self, output: String) -> LogLine {
        self.output = Some(output);
        self
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "#0x{:02X}: {: <14}{: <4} {: <12} {}",
            self.address,
            byte_sequence(self.opcode, &self.operand_mode),
            self.mnemonic,
            self.operand_mode.to_string(),
            self.outcome
        );

        write!(f, "{}", line.trim_end())
    }
}
