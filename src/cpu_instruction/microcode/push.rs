use super::*;

pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = registers.get(cpu_instruction.register_a()?)?;
    registers.stack_push(memory, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:02x}]", registers.stack_pointer()),
    ))
}
