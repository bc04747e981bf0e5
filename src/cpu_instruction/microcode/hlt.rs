use super::*;

pub fn hlt(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:02x}]", registers.program_counter),
    ))
}
