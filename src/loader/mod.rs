use pest::Parser;
use pest_derive::Parser;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::memory::AddressableIO;
use crate::memory::RAM as Memory;

mod error;

pub use error::LoaderError;

#[derive(Parser)]
#[grammar = "loader/ls8.pest"]
struct PestParser;

pub struct ProgramLoader;

impl ProgramLoader {
    /// Turns the content of a `.ls8` file into the bytes of the program.
    pub fn parse(source: &str) -> Result<Vec<u8>, LoaderError> {
        let pairs = PestParser::parse(Rule::program, source)
            .map_err(|e| LoaderError::Parse(e.to_string()))?;

        pairs
            .flatten()
            .filter(|pair| pair.as_rule() == Rule::instruction)
            .map(|pair| {
                u8::from_str_radix(pair.as_str(), 2).map_err(|e| LoaderError::Parse(e.to_string()))
            })
            .collect()
    }
}

/// Loads a `.ls8` program file in memory starting at address 0x00, returns
/// the number of bytes written.
pub fn load_program(path: &Path, memory: &mut Memory) -> Result<usize, LoaderError> {
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoaderError::FileNotFound(path.to_path_buf()),
        _ => LoaderError::Io(e),
    })?;
    let bytes = ProgramLoader::parse(&source)?;

    if bytes.len() > memory.get_size() {
        return Err(LoaderError::ProgramTooLarge(bytes.len()));
    }
    memory.write(0x00, &bytes)?;

    Ok(bytes.len())
}
