mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

pub const MEMMAX: usize = 0xff;

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;

    fn read_byte(&self, addr: usize) -> Result<u8, MemoryError> {
        Ok(self.read(addr, 1)?[0])
    }

    fn write_byte(&mut self, addr: usize, value: u8) -> Result<(), MemoryError> {
        self.write(addr, &[value])
    }
}

/*
 * hex_dump
 * 16 bytes per line, split in two halves of 8 bytes.
 */
pub fn hex_dump(memory: &impl AddressableIO) -> Result<Vec<String>, MemoryError> {
    let bytes = memory.read(0, memory.get_size())?;
    let lines = bytes
        .chunks(16)
        .enumerate()
        .map(|(lineno, chunk)| {
            let (left, right) = chunk.split_at(chunk.len().min(8));
            format!(
                "#0x{:02X}: {} {}",
                lineno * 16,
                hex::encode(left),
                hex::encode(right)
            )
        })
        .collect();

    Ok(lines)
}
