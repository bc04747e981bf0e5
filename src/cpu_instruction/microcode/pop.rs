use super::*;

pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_a()?;
    // the stack pointer only moves once the destination is known to exist
    registers.get(register)?;
    let byte = registers.stack_pull(memory)?;
    registers.set(register, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[R{}=0x{:02x}][SP=0x{:02x}]",
            register,
            byte,
            registers.stack_pointer()
        ),
    ))
}
