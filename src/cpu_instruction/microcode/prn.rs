use super::*;

/// Prints the decimal value of a register, one line per call.
pub fn prn(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.register_a()?;
    let value = registers.get(register)?;

    Ok(
        LogLine::new(cpu_instruction, format!("[R{}=0x{:02x}]", register, value))
            .with_output(format!("{}\n", value)),
    )
}
