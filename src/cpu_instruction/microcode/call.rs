use super::*;
use crate::memory::MemoryError;

/// Pushes the address of the next instruction and jumps to the address held
/// by the operand register.
pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let target_address = registers.get(cpu_instruction.register_a()?)? as usize;
    let next_address = cpu_instruction.next_address();
    let return_address = u8::try_from(next_address)
        .map_err(|_| MemoryError::ReadOutOfBounds(1, next_address))?;
    registers.stack_push(memory, return_address)?;
    registers.program_counter = target_address;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}]",
            registers.program_counter,
            registers.stack_pointer()
        ),
    ))
}
