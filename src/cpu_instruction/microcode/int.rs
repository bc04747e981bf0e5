use super::*;

// Interrupts are not delivered, INT only moves past its operand.
pub fn int(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.program_counter = cpu_instruction.next_address();

    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:02x}]", registers.program_counter),
    ))
}
