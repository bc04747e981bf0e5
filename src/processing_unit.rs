use super::cpu_instruction::microcode::{self, AluOperation, MicrocodeError, Result};
use super::cpu_instruction::opcode::*;
use super::cpu_instruction::{CPUInstruction, LogLine};
use super::memory::AddressableIO;
use super::memory::RAM as Memory;
use super::operand_mode::OperandMode;
use super::registers::Registers;

fn read_operands<const N: usize>(address: usize, memory: &Memory) -> Result<[u8; N]> {
    let mut operands = [0x00; N];
    operands.copy_from_slice(&memory.read(address + 1, N)?);

    Ok(operands)
}

/*
 * resolve_alu
 * The ALU bit is set, the operation comes from the ALU table and the
 * operands are register indexes.
 */
fn resolve_alu(address: usize, opcode: u8, memory: &Memory) -> Result<CPUInstruction> {
    let operation =
        AluOperation::from_opcode(opcode).ok_or(MicrocodeError::UnsupportedOperation(opcode))?;
    let operand_mode = match operand_count(opcode) {
        1 => OperandMode::Register(read_operands(address, memory)?),
        2 => OperandMode::RegisterPair(read_operands(address, memory)?),
        _ => return Err(MicrocodeError::UnsupportedOperation(opcode)),
    };

    Ok(CPUInstruction::new(
        address,
        opcode,
        operation.mnemonic(),
        operand_mode,
        move |memory: &mut Memory, registers: &mut Registers, cpu_instruction: &CPUInstruction| {
            microcode::alu(memory, registers, cpu_instruction, operation)
        },
    ))
}

pub fn resolve_opcode(address: usize, opcode: u8, memory: &Memory) -> Result<CPUInstruction> {
    if is_alu(opcode) {
        return resolve_alu(address, opcode, memory);
    }

    let cpu_instruction = match opcode {
        NOP => CPUInstruction::new(address, opcode, "NOP", OperandMode::Implied, microcode::nop),
        HLT => CPUInstruction::new(address, opcode, "HLT", OperandMode::Implied, microcode::hlt),
        RET => CPUInstruction::new(address, opcode, "RET", OperandMode::Implied, microcode::ret),
        IRET => CPUInstruction::new(address, opcode, "IRET", OperandMode::Implied, microcode::iret),
        PUSH => CPUInstruction::new(
            address,
            opcode,
            "PUSH",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::push,
        ),
        POP => CPUInstruction::new(
            address,
            opcode,
            "POP",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::pop,
        ),
        PRN => CPUInstruction::new(
            address,
            opcode,
            "PRN",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::prn,
        ),
        PRA => CPUInstruction::new(
            address,
            opcode,
            "PRA",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::pra,
        ),
        CALL => CPUInstruction::new(
            address,
            opcode,
            "CALL",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::call,
        ),
        INT => CPUInstruction::new(
            address,
            opcode,
            "INT",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::int,
        ),
        JMP => CPUInstruction::new(
            address,
            opcode,
            "JMP",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jmp,
        ),
        JEQ => CPUInstruction::new(
            address,
            opcode,
            "JEQ",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jeq,
        ),
        JNE => CPUInstruction::new(
            address,
            opcode,
            "JNE",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jne,
        ),
        JGT => CPUInstruction::new(
            address,
            opcode,
            "JGT",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jgt,
        ),
        JLT => CPUInstruction::new(
            address,
            opcode,
            "JLT",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jlt,
        ),
        JLE => CPUInstruction::new(
            address,
            opcode,
            "JLE",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jle,
        ),
        JGE => CPUInstruction::new(
            address,
            opcode,
            "JGE",
            OperandMode::Register(read_operands(address, memory)?),
            microcode::jge,
        ),
        LDI => CPUInstruction::new(
            address,
            opcode,
            "LDI",
            OperandMode::RegisterImmediate(read_operands(address, memory)?),
            microcode::ldi,
        ),
        LD => CPUInstruction::new(
            address,
            opcode,
            "LD",
            OperandMode::RegisterPair(read_operands(address, memory)?),
            microcode::ld,
        ),
        ST => CPUInstruction::new(
            address,
            opcode,
            "ST",
            OperandMode::RegisterPair(read_operands(address, memory)?),
            microcode::st,
        ),
        _ => return Err(MicrocodeError::IllegalInstruction { address, opcode }),
    };

    Ok(cpu_instruction)
}

pub fn execute_step(registers: &mut Registers, memory: &mut Memory) -> Result<LogLine> {
    let opcode = memory.read_byte(registers.program_counter)?;
    let cpu_instruction = resolve_opcode(registers.program_counter, opcode, memory)?;

    cpu_instruction.execute(memory, registers)
}

/// Steps from the current program counter until HLT is executed, handing
/// every log line, the HLT one included, to `on_step`.
pub fn run_until_halt<E, F>(
    memory: &mut Memory,
    registers: &mut Registers,
    mut on_step: F,
) -> std::result::Result<(), E>
where
    E: From<MicrocodeError>,
    F: FnMut(LogLine) -> std::result::Result<(), E>,
{
    loop {
        let log_line = execute_step(registers, memory)?;
        let halted = log_line.opcode == HLT;
        on_step(log_line)?;

        if halted {
            break Ok(());
        }
    }
}

/// Runs the program from the current program counter until HLT is executed.
pub fn execute(memory: &mut Memory, registers: &mut Registers) -> Result<Vec<LogLine>> {
    let mut logs: Vec<LogLine> = vec![];
    run_until_halt::<MicrocodeError, _>(memory, registers, |log_line| {
        logs.push(log_line);
        Ok(())
    })?;

    Ok(logs)
}

pub fn disassemble(start: usize, end: usize, memory: &Memory) -> Result<Vec<CPUInstruction>> {
    let mut cpu_instructions: Vec<CPUInstruction> = vec![];
    let mut address = start;

    while address < end {
        let opcode = memory.read_byte(address)?;
        let cpu_instruction = resolve_opcode(address, opcode, memory)?;
        address = cpu_instruction.next_address();
        cpu_instructions.push(cpu_instruction);
    }

    Ok(cpu_instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryError;

    fn get_stuff(program: &[u8]) -> (Memory, Registers) {
        let mut memory = Memory::default();
        memory.write(0x00, program).unwrap();

        (memory, Registers::new(0x00))
    }

    #[test]
    fn test_resolve_ldi() {
        let (memory, _) = get_stuff(&[LDI, 0x00, 0x08]);
        let cpu_instruction = resolve_opcode(0x00, LDI, &memory).unwrap();
        assert_eq!("LDI".to_owned(), cpu_instruction.mnemonic);
        assert_eq!(
            OperandMode::RegisterImmediate([0x00, 0x08]),
            cpu_instruction.operand_mode
        );
        assert_eq!(2, cpu_instruction.operand_count);
    }

    #[test]
    fn test_resolve_alu() {
        let (memory, _) = get_stuff(&[MUL, 0x00, 0x01, INC, 0x03]);
        let cpu_instruction = resolve_opcode(0x00, MUL, &memory).unwrap();
        assert_eq!("MUL".to_owned(), cpu_instruction.mnemonic);
        assert!(cpu_instruction.is_alu);
        assert_eq!(
            OperandMode::RegisterPair([0x00, 0x01]),
            cpu_instruction.operand_mode
        );
        let cpu_instruction = resolve_opcode(0x03, INC, &memory).unwrap();
        assert_eq!(OperandMode::Register([0x03]), cpu_instruction.operand_mode);
    }

    #[test]
    fn test_resolve_unsupported_alu_operation() {
        let (memory, _) = get_stuff(&[0b10101111, 0x00, 0x01]);
        assert!(matches!(
            resolve_opcode(0x00, 0b10101111, &memory),
            Err(MicrocodeError::UnsupportedOperation(0b10101111))
        ));
    }

    #[test]
    fn test_illegal_instruction() {
        let (mut memory, mut registers) = get_stuff(&[NOP, 0b01000000, 0x00, HLT]);
        execute_step(&mut registers, &mut memory).unwrap();
        let error = execute_step(&mut registers, &mut memory).unwrap_err();
        assert_eq!(
            MicrocodeError::IllegalInstruction {
                address: 0x01,
                opcode: 0b01000000
            },
            error
        );
        // no silent skip: the program counter stays on the faulty opcode
        assert_eq!(0x01, registers.program_counter);
    }

    #[test]
    fn test_execute_step_ldi() {
        let (mut memory, mut registers) = get_stuff(&[LDI, 0x02, 0x2a]);
        let log_line = execute_step(&mut registers, &mut memory).unwrap();
        assert_eq!("LDI".to_owned(), log_line.mnemonic);
        assert_eq!(0x2a, registers.get(2).unwrap());
        assert_eq!(0x03, registers.program_counter);
    }

    #[test]
    fn test_execute_print8() {
        let (mut memory, mut registers) =
            get_stuff(&[0b10000010, 0, 8, 0b01000111, 0, 0b00000001]);
        let logs = execute(&mut memory, &mut registers).unwrap();
        let output: String = logs.iter().filter_map(|l| l.output.clone()).collect();
        assert_eq!("8\n", output);
        assert_eq!(3, logs.len());
        assert_eq!("HLT".to_owned(), logs[2].mnemonic);
    }

    #[test]
    fn test_execute_cmp_jeq() {
        // LDI R0,a; LDI R1,b; LDI R2,0x10; CMP R0,R1; JEQ R2; HLT; ...; 0x10: HLT
        for (a, b) in [(5, 5), (5, 6), (6, 5), (0, 255)] {
            let mut program = vec![
                LDI, 0x00, a, LDI, 0x01, b, LDI, 0x02, 0x10, CMP, 0x00, 0x01, JEQ, 0x02, HLT,
            ];
            program.resize(0x10, NOP);
            program.push(HLT);
            let (mut memory, mut registers) = get_stuff(&program);
            let logs = execute(&mut memory, &mut registers).unwrap();
            let jeq = &logs[4];
            assert_eq!("JEQ".to_owned(), jeq.mnemonic);
            let halt_address = logs.last().unwrap().address;
            if a == b {
                assert_eq!(0x10, halt_address);
            } else {
                assert_eq!(0x0e, halt_address);
            }
        }
    }

    #[test]
    fn test_execute_runs_off_memory() {
        let mut program = vec![NOP; 0xff];
        program.push(PRN);
        let (mut memory, mut registers) = get_stuff(&program);
        let error = execute(&mut memory, &mut registers).unwrap_err();
        assert_eq!(
            MicrocodeError::OutOfBounds(MemoryError::ReadOutOfBounds(1, 0x100)),
            error
        );
    }

    #[test]
    fn test_run_until_halt_stops_on_callback_error() {
        // NOP; NOP; HLT
        let (mut memory, mut registers) = get_stuff(&[NOP, NOP, HLT]);
        let mut seen: Vec<usize> = vec![];
        let error = run_until_halt(&mut memory, &mut registers, |log_line| {
            seen.push(log_line.address);
            if log_line.address == 0x01 {
                return Err(MicrocodeError::UnsupportedOperation(log_line.opcode));
            }
            Ok(())
        })
        .unwrap_err();
        assert_eq!(MicrocodeError::UnsupportedOperation(NOP), error);
        assert_eq!(vec![0x00, 0x01], seen);
        assert_eq!(0x02, registers.program_counter);
    }

    #[test]
    fn test_disassemble() {
        let (memory, _) = get_stuff(&[LDI, 0x00, 0x08, PRN, 0x00, HLT]);
        let lines: Vec<String> = disassemble(0x00, 0x06, &memory)
            .unwrap()
            .iter()
            .map(|i| i.to_string())
            .collect();
        assert_eq!(
            vec![
                "#0x00: (82 00 08)    LDI  R0, 0x08",
                "#0x03: (47 00)       PRN  R0",
                "#0x05: (01)          HLT",
            ],
            lines
        );
    }
}
