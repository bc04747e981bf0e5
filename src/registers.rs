use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use std::cmp::Ordering;
use std::fmt;
/*
 * LS-8 registers
 * R0 to R6 are 8 bits general purpose registers.
 * R7 is the stack pointer, set at 0xf4 at start, the stack grows downward.
 * flags register (FL), set by CMP only:
 * bit 2: Less-than flag
 * bit 1: Greater-than flag
 * bit 0: Equal flag
 *
 * program counter: index of the next instruction in memory.
 */
pub const REGISTER_COUNT: usize = 8;
pub const STACK_POINTER: usize = 7;
pub const STACK_INIT_ADDR: u8 = 0xf4;

pub struct Registers {
    pub general: [u8; REGISTER_COUNT],
    pub flags: u8,
    pub program_counter: usize,
}

impl Registers {
    pub fn new(init_address: usize) -> Registers {
        let mut general = [0x00; REGISTER_COUNT];
        general[STACK_POINTER] = STACK_INIT_ADDR;

        Registers {
            general,
            flags: 0b00000000,
            program_counter: init_address,
        }
    }

    pub fn get(&self, index: u8) -> Result<u8, MemoryError> {
        self.general
            .get(index as usize)
            .copied()
            .ok_or(MemoryError::NoSuchRegister(index as usize))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Result<(), MemoryError> {
        let register = self
            .general
            .get_mut(index as usize)
            .ok_or(MemoryError::NoSuchRegister(index as usize))?;
        *register = value;

        Ok(())
    }

    pub fn stack_pointer(&self) -> u8 {
        self.general[STACK_POINTER]
    }

    pub fn stack_push(&mut self, memory: &mut Memory, byte: u8) -> Result<(), MemoryError> {
        let sp = self.stack_pointer().wrapping_sub(1);
        memory.write_byte(sp as usize, byte)?;
        self.general[STACK_POINTER] = sp;

        Ok(())
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> Result<u8, MemoryError> {
        let sp = self.stack_pointer();
        let byte = memory.read_byte(sp as usize)?;
        self.general[STACK_POINTER] = sp.wrapping_add(1);

        Ok(byte)
    }

    pub fn l_flag_is_set(&self) -> bool {
        self.flags & 0b00000100 == 0b00000100
    }

    pub fn g_flag_is_set(&self) -> bool {
        self.flags & 0b00000010 == 0b00000010
    }

    pub fn e_flag_is_set(&self) -> bool {
        self.flags & 0b00000001 == 0b00000001
    }

    /// Overwrites the whole flags register, exactly one of L, G or E ends set.
    pub fn set_comparison(&mut self, ordering: Ordering) {
        self.flags = match ordering {
            Ordering::Less => 0b00000100,
            Ordering::Greater => 0b00000010,
            Ordering::Equal => 0b00000001,
        };
    }

    pub fn format_flags(&self) -> String {
        format!(
            "{}{}{}",
            if self.l_flag_is_set() { "L" } else { "l" },
            if self.g_flag_is_set() { "G" } else { "g" },
            if self.e_flag_is_set() { "E" } else { "e" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let general = self.general[..STACK_POINTER]
            .iter()
            .enumerate()
            .map(|(index, value)| format!("R{}:0x{:02x}", index, value))
            .collect::<Vec<String>>()
            .join(" ");

        write!(
            f,
            "Registers [{} | SP:0x{:02x} PC:0x{:02x} | FL:{}]",
            general,
            self.stack_pointer(),
            self.program_counter,
            self.format_flags()
        )
    }
}
