use super::*;

pub fn jmp(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    jump_if(memory, registers, cpu_instruction, true)
}

/*
 * jump_if
 * Shared by all the jumps: go to the address held by the operand register
 * when the condition holds, skip the operand otherwise.
 */
pub(super) fn jump_if(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    condition: bool,
) -> Result<LogLine> {
    let target_address = registers.get(cpu_instruction.register_a()?)? as usize;

    registers.program_counter = if condition {
        target_address
    } else {
        cpu_instruction.next_address()
    };

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:02x}][FL={}]",
            registers.program_counter,
            registers.format_flags()
        ),
    ))
}
