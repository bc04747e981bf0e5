use super::*;

/// ST A, B: stores the value of register B at the address held by register A.
pub fn st(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let address = registers.get(cpu_instruction.register_a()?)? as usize;
    let byte = registers.get(cpu_instruction.register_b()?)?;
    memory.write_byte(address, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("(#0x{:02X})[0x{:02x}]", address, byte),
    ))
}
