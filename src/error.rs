use std::fmt;

/// Everything that can abort a load or an instruction step. None of these
/// are fatal to the caller; the machine is left in a diagnosable state and
/// the caller decides whether to halt, log or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    /// loading `len` bytes at `origin` would run past the end of memory
    ProgramTooLarge { origin: u16, len: usize },
    /// fetched word matches no known instruction
    UnsupportedInstruction { pc: u16, word: u16 },
    /// subroutine call with all sixteen stack slots in use
    StackOverflow { pc: u16, word: u16 },
    /// subroutine return with an empty stack
    StackUnderflow { pc: u16, word: u16 },
}

impl std::error::Error for Chip8Error {}

impl fmt::Display for Chip8Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Chip8Error::ProgramTooLarge { origin, len } => {
                write!(f, "program of {} bytes does not fit at {:#05x}", len, origin)
            }
            Chip8Error::UnsupportedInstruction { pc, word } => {
                write!(f, "unsupported instruction {:#06x} at {:#05x}", word, pc)
            }
            Chip8Error::StackOverflow { pc, word } => {
                write!(f, "stack overflow on {:#06x} at {:#05x}", word, pc)
            }
            Chip8Error::StackUnderflow { pc, word } => {
                write!(f, "stack underflow on {:#06x} at {:#05x}", word, pc)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context() {
        let e = Chip8Error::UnsupportedInstruction {
            pc: 0x200,
            word: 0x5001,
        };
        assert_eq!(
            e.to_string(),
            "unsupported instruction 0x5001 at 0x200"
        );
    }
}
