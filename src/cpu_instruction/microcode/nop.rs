use super::*;

pub fn nop(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, String::new()))
}
