use super::*;

/// LD A, B: loads register A with the byte at the address held by register B.
pub fn ld(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.register_a()?;
    let address = registers.get(cpu_instruction.register_b()?)? as usize;
    let byte = memory.read_byte(address)?;
    registers.set(reg_a, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("(#0x{:02X})[R{}=0x{:02x}]", address, reg_a, byte),
    ))
}
