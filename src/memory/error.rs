use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOutOfBounds(usize, usize),  // read len, address
    WriteOutOfBounds(usize, usize), // write len, address
    NoSuchRegister(usize),          // register index
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOutOfBounds(read_len, addr) => write!(
                f,
                "could not READ {} bytes at address 0x{:02X}, address max is 0x{:02X}",
                read_len,
                addr,
                super::MEMMAX
            ),
            MemoryError::WriteOutOfBounds(write_len, addr) => write!(
                f,
                "could not WRITE {} bytes at address 0x{:02X}, address max is 0x{:02X}",
                write_len,
                addr,
                super::MEMMAX
            ),
            MemoryError::NoSuchRegister(index) => {
                write!(f, "no register R{}, registers are R0 to R7", index)
            }
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
