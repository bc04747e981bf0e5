use super::*;

/// Prints the value of a register as an ASCII character, no line feed.
pub fn pra(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_a()?;
    let value = registers.get(register)?;

    Ok(
        LogLine::new(cpu_instruction, format!("[R{}=0x{:02x}]", register, value))
            .with_output(char::from(value).to_string()),
    )
}
