use super::*;
use crate::cpu_instruction::opcode;

/*
 * AluOperation
 * Closed table of the operations routed to the ALU, looked up from the
 * opcode when the ALU bit is set.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluOperation {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    Cmp,
    And,
    Not,
    Or,
    Xor,
    Shl,
    Shr,
}

const ALU_TABLE: [(u8, AluOperation); 14] = [
    (opcode::ADD, AluOperation::Add),
    (opcode::SUB, AluOperation::Sub),
    (opcode::MUL, AluOperation::Mul),
    (opcode::DIV, AluOperation::Div),
    (opcode::MOD, AluOperation::Mod),
    (opcode::INC, AluOperation::Inc),
    (opcode::DEC, AluOperation::Dec),
    (opcode::CMP, AluOperation::Cmp),
    (opcode::AND, AluOperation::And),
    (opcode::NOT, AluOperation::Not),
    (opcode::OR, AluOperation::Or),
    (opcode::XOR, AluOperation::Xor),
    (opcode::SHL, AluOperation::Shl),
    (opcode::SHR, AluOperation::Shr),
];

impl AluOperation {
    pub fn from_opcode(opcode: u8) -> Option<AluOperation> {
        ALU_TABLE
            .iter()
            .find(|(code, _)| *code == opcode)
            .map(|(_, operation)| *operation)
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            AluOperation::Add => "ADD",
            AluOperation::Sub => "SUB",
            AluOperation::Mul => "MUL",
            AluOperation::Div => "DIV",
            AluOperation::Mod => "MOD",
            AluOperation::Inc => "INC",
            AluOperation::Dec => "DEC",
            AluOperation::Cmp => "CMP",
            AluOperation::And => "AND",
            AluOperation::Not => "NOT",
            AluOperation::Or => "OR",
            AluOperation::Xor => "XOR",
            AluOperation::Shl => "SHL",
            AluOperation::Shr => "SHR",
        }
    }
}

/// Results are truncated to 8 bits. Every operation but CMP writes back into
/// register A, CMP only sets the flags register.
pub fn alu(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    operation: AluOperation,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.register_a()?;
    let a = registers.get(reg_a)?;
    let b = match cpu_instruction.operand_mode.register_b() {
        Some(reg_b) => registers.get(reg_b)?,
        None => 0,
    };
    let divide_by_zero = MicrocodeError::DivideByZero {
        address: cpu_instruction.address,
    };

    let result = match operation {
        AluOperation::Add => a.wrapping_add(b),
        AluOperation::Sub => a.wrapping_sub(b),
        AluOperation::Mul => a.wrapping_mul(b),
        AluOperation::Div => a.checked_div(b).ok_or(divide_by_zero)?,
        AluOperation::Mod => a.checked_rem(b).ok_or(divide_by_zero)?,
        AluOperation::Inc => a.wrapping_add(1),
        AluOperation::Dec => a.wrapping_sub(1),
        AluOperation::And => a & b,
        AluOperation::Not => !a,
        AluOperation::Or => a | b,
        AluOperation::Xor => a ^ b,
        AluOperation::Shl => a.checked_shl(b as u32).unwrap_or(0),
        AluOperation::Shr => a.checked_shr(b as u32).unwrap_or(0),
        AluOperation::Cmp => {
            registers.set_comparison(a.cmp(&b));

            return Ok(LogLine::new(
                cpu_instruction,
                format!("[FL={}]", registers.format_flags()),
            ));
        }
    };
    registers.set(reg_a, result)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", reg_a, result),
    ))
}
