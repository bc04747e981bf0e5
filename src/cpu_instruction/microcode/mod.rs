use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::memory::RAM as Memory;
use crate::memory::AddressableIO;
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod alu;
mod call;
mod hlt;
mod int;
mod iret;
mod jeq;
mod jge;
mod jgt;
mod jle;
mod jlt;
mod jmp;
mod jne;
mod ld;
mod ldi;
mod nop;
mod pop;
mod pra;
mod prn;
mod push;
mod ret;
mod st;

pub use alu::{alu, AluOperation};
pub use call::call;
pub use hlt::hlt;
pub use int::int;
pub use iret::iret;
pub use jeq::jeq;
pub use jge::jge;
pub use jgt::jgt;
pub use jle::jle;
pub use jlt::jlt;
pub use jmp::jmp;
pub use jne::jne;
pub use ld::ld;
pub use ldi::ldi;
pub use nop::nop;
pub use pop::pop;
pub use pra::pra;
pub use prn::prn;
pub use push::push;
pub use ret::ret;
pub use st::st;
