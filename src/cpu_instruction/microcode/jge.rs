use super::jmp::jump_if;
use super::*;

pub fn jge(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.g_flag_is_set() || registers.e_flag_is_set();

    jump_if(memory, registers, cpu_instruction, condition)
}
