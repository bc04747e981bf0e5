use std::fmt;

/*
 * OperandMode
 * How the operand bytes following an opcode are to be read. Register
 * operands are indexes in the register file, immediate operands are raw
 * bytes.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum OperandMode {
    Implied,
    Register([u8; 1]),
    RegisterPair([u8; 2]),
    RegisterImmediate([u8; 2]),
}

impl OperandMode {
    pub fn get_operands(&self) -> Vec<u8> {
        match *self {
            OperandMode::Implied => vec![],
            OperandMode::Register(v) => vec![v[0]],
            OperandMode::RegisterPair(v) | OperandMode::RegisterImmediate(v) => vec![v[0], v[1]],
        }
    }

    pub fn register_a(&self) -> Option<u8> {
        match *self {
            OperandMode::Implied => None,
            OperandMode::Register([a])
            | OperandMode::RegisterPair([a, _])
            | OperandMode::RegisterImmediate([a, _]) => Some(a),
        }
    }

    pub fn register_b(&self) -> Option<u8> {
        match *self {
            OperandMode::RegisterPair([_, b]) => Some(b),
            _ => None,
        }
    }

    pub fn immediate(&self) -> Option<u8> {
        match *self {
            OperandMode::RegisterImmediate([_, v]) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for OperandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OperandMode::Implied => write!(f, ""),
            OperandMode::Register(v) => write!(f, "R{}", v[0]),
            OperandMode::RegisterPair(v) => write!(f, "R{}, R{}", v[0], v[1]),
            OperandMode::RegisterImmediate(v) => write!(f, "R{}, 0x{:02x}", v[0], v[1]),
        }
    }
}
