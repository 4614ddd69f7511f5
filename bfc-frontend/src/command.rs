//! The Brainfuck command set
//!
//! Eight single-character commands operating on a pointer into a flat
//! byte tape. Every other character in a source file is a comment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic source-language operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `+` - increment the byte at the pointer
    IncCell,
    /// `-` - decrement the byte at the pointer
    DecCell,
    /// `>` - move the pointer forward
    IncPtr,
    /// `<` - move the pointer backward
    DecPtr,
    /// `.` - write the byte at the pointer to stdout
    Print,
    /// `,` - read one byte from stdin into the cell at the pointer
    Read,
    /// `[` - jump past the matching `]` if the byte at the pointer is zero
    LoopBegin,
    /// `]` - jump back to the matching `[` if the byte at the pointer is nonzero
    LoopEnd,
}

impl Command {
    /// Map a source character to its command, or `None` for comment text
    pub fn from_char(ch: char) -> Option<Command> {
        match ch {
            '+' => Some(Command::IncCell),
            '-' => Some(Command::DecCell),
            '>' => Some(Command::IncPtr),
            '<' => Some(Command::DecPtr),
            '.' => Some(Command::Print),
            ',' => Some(Command::Read),
            '[' => Some(Command::LoopBegin),
            ']' => Some(Command::LoopEnd),
            _ => None,
        }
    }

    /// The four commands whose consecutive runs fold into one instruction
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Command::IncCell | Command::DecCell | Command::IncPtr | Command::DecPtr
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Command::IncCell => '+',
            Command::DecCell => '-',
            Command::IncPtr => '>',
            Command::DecPtr => '<',
            Command::Print => '.',
            Command::Read => ',',
            Command::LoopBegin => '[',
            Command::LoopEnd => ']',
        };
        write!(f, "{}", ch)
    }
}
