use super::*;

pub fn iret(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::opcode::IRET;
    use crate::operand_mode::OperandMode;

    #[test]
    fn test_iret_is_a_stub() {
        let cpu_instruction = CPUInstruction::new(0x00, IRET, "IRET", OperandMode::Implied, iret);
        let (mut memory, mut registers) = get_stuff(vec![IRET]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x01, registers.program_counter);
        assert_eq!(0xf4, registers.stack_pointer());
        assert_eq!(0b00000000, registers.flags);
        assert_eq!("#0x00: (13)          IRET              [PC=0x01]", log_line.to_string());
    }
}
