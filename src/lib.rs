mod cpu_instruction;
mod executor;
mod loader;
pub mod memory;
mod operand_mode;
mod processing_unit;
mod registers;

pub type AppResult<T> = anyhow::Result<T>;

pub use cpu_instruction::microcode::{AluOperation, MicrocodeError};
pub use cpu_instruction::opcode;
pub use cpu_instruction::{CPUInstruction, LogLine};
pub use executor::{Executor, ExecutorConfiguration};
pub use loader::{load_program, LoaderError, ProgramLoader};
pub use memory::AddressableIO;
pub use memory::{MemoryError, RAM as Memory};
pub use operand_mode::OperandMode;
pub use processing_unit::*;
pub use registers::{Registers, STACK_INIT_ADDR, STACK_POINTER};
