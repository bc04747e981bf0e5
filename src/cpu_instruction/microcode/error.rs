use crate::memory;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MicrocodeError {
    // ↓ memory or register address out of range during the operation
    OutOfBounds(memory::MemoryError),
    DivideByZero { address: usize },
    UnsupportedOperation(u8),
    IllegalInstruction { address: usize, opcode: u8 },
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::OutOfBounds(e) => {
                write!(f, "out of bounds access during microcode operation: {}", e)
            }
            MicrocodeError::DivideByZero { address } => {
                write!(f, "division by zero at address #0x{:02X}", address)
            }
            MicrocodeError::UnsupportedOperation(opcode) => {
                write!(f, "unsupported ALU operation 0b{:08b}", opcode)
            }
            MicrocodeError::IllegalInstruction { address, opcode } => write!(
                f,
                "illegal instruction 0b{:08b} at address #0x{:02X}",
                opcode, address
            ),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MicrocodeError::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::OutOfBounds(err)
    }
}
