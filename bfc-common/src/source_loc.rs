//! Source location tracking for error reporting
//!
//! Brainfuck sources are a flat character stream, so a location is just
//! a line and column; both are 1-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in the source program (line and column are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Location of the first character of a program
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Advance past one character
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::new(42, 10);
        assert_eq!(loc.line, 42);
        assert_eq!(loc.column, 10);
        assert_eq!(format!("{}", loc), "42:10");
    }

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut loc = SourceLocation::start();
        assert_eq!(loc, SourceLocation::new(1, 1));

        loc.advance('+');
        loc.advance('+');
        assert_eq!(loc, SourceLocation::new(1, 3));

        loc.advance('\n');
        assert_eq!(loc, SourceLocation::new(2, 1));

        loc.advance('[');
        assert_eq!(loc, SourceLocation::new(2, 2));
    }
}
