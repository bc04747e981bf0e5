use super::*;

pub fn ldi(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_a()?;
    let value = cpu_instruction.immediate()?;
    registers.set(register, value)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", register, value),
    ))
}
