use super::jmp::jump_if;
use super::*;

/// Jumps when the last comparison was equal.
pub fn jeq(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.e_flag_is_set();

    jump_if(memory, registers, cpu_instruction, condition)
}
