use super::*;

pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.program_counter = registers.stack_pull(memory)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}]",
            registers.program_counter,
            registers.stack_pointer()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::microcode::call;
    use crate::cpu_instruction::opcode::{CALL, RET};
    use crate::operand_mode::OperandMode;

    #[test]
    fn test_ret() {
        let cpu_instruction = CPUInstruction::new(0x20, RET, "RET", OperandMode::Implied, ret);
        let (mut memory, mut registers) = get_stuff(vec![]);
        memory.write_byte(0xf3, 0x08).unwrap();
        registers.set(7, 0xf3).unwrap();
        registers.program_counter = 0x20;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x08, registers.program_counter);
        assert_eq!(0xf4, registers.stack_pointer());
        assert_eq!(
            "#0x20: (11)          RET               [PC=0x08][SP=0xf4]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_ret_with_call() {
        let (mut memory, mut registers) = get_stuff(vec![]);
        registers.set(2, 0x40).unwrap();
        registers.program_counter = 0x0a;
        CPUInstruction::new(0x0a, CALL, "CALL", OperandMode::Register([0x02]), call)
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x40, registers.program_counter);
        CPUInstruction::new(0x40, RET, "RET", OperandMode::Implied, ret)
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0c, registers.program_counter); // CALL location + 2
        assert_eq!(0xf4, registers.stack_pointer());
    }
}
