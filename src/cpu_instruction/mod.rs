mod cpu_instruction;
pub mod microcode;
pub mod opcode;

pub use self::cpu_instruction::{CPUInstruction, LogLine};
