use crate::memory::MemoryError;
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoaderError {
    FileNotFound(PathBuf),
    Io(io::Error),
    Parse(String),
    ProgramTooLarge(usize), // program len
    Memory(MemoryError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoaderError::FileNotFound(path) => {
                write!(f, "program file '{}' does not exist", path.display())
            }
            LoaderError::Io(e) => write!(f, "could not read program file: {}", e),
            LoaderError::Parse(message) => write!(f, "malformed program file:\n{}", message),
            LoaderError::ProgramTooLarge(len) => write!(
                f,
                "program is {} bytes long, it does not fit in {} bytes of memory",
                len,
                crate::memory::MEMMAX + 1
            ),
            LoaderError::Memory(e) => write!(f, "could not write program in memory: {}", e),
        }
    }
}

impl error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoaderError::Io(e) => Some(e),
            LoaderError::Memory(e) => Some(e),
            _ => None,
        }
    }
}

impl std::convert::From<MemoryError> for LoaderError {
    fn from(err: MemoryError) -> LoaderError {
        LoaderError::Memory(err)
    }
}
