/*
 * LS-8 opcodes
 * The opcode byte layout is AABCDDDD:
 * AA: number of operands (0, 1 or 2)
 * B: 1 if the instruction is handled by the ALU
 * C: 1 if the instruction sets the program counter itself
 * DDDD: instruction identifier
 */
pub const OPERAND_COUNT_SHIFT: u8 = 6;
pub const ALU_FLAG: u8 = 0b00100000;
pub const SETS_PC_FLAG: u8 = 0b00010000;

pub const NOP: u8 = 0b00000000;
pub const HLT: u8 = 0b00000001;
pub const RET: u8 = 0b00010001;
pub const IRET: u8 = 0b00010011;
pub const PUSH: u8 = 0b01000101;
pub const POP: u8 = 0b01000110;
pub const PRN: u8 = 0b01000111;
pub const PRA: u8 = 0b01001000;
pub const CALL: u8 = 0b01010000;
pub const INT: u8 = 0b01010010;
pub const JMP: u8 = 0b01010100;
pub const JEQ: u8 = 0b01010101;
pub const JNE: u8 = 0b01010110;
pub const JGT: u8 = 0b01010111;
pub const JLT: u8 = 0b01011000;
pub const JLE: u8 = 0b01011001;
pub const JGE: u8 = 0b01011010;
pub const INC: u8 = 0b01100101;
pub const DEC: u8 = 0b01100110;
pub const NOT: u8 = 0b01101001;
pub const LDI: u8 = 0b10000010;
pub const LD: u8 = 0b10000011;
pub const ST: u8 = 0b10000100;
pub const ADD: u8 = 0b10100000;
pub const SUB: u8 = 0b10100001;
pub const MUL: u8 = 0b10100010;
pub const DIV: u8 = 0b10100011;
pub const MOD: u8 = 0b10100100;
pub const CMP: u8 = 0b10100111;
pub const AND: u8 = 0b10101000;
pub const OR: u8 = 0b10101010;
pub const XOR: u8 = 0b10101011;
pub const SHL: u8 = 0b10101100;
pub const SHR: u8 = 0b10101101;

pub fn operand_count(opcode: u8) -> usize {
    (opcode >> OPERAND_COUNT_SHIFT) as usize
}

pub fn is_alu(opcode: u8) -> bool {
    opcode & ALU_FLAG == ALU_FLAG
}

pub fn sets_pc(opcode: u8) -> bool {
    opcode & SETS_PC_FLAG == SETS_PC_FLAG
}
