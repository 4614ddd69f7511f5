//! Brainfuck Lexer
//!
//! Scans the source character stream once, left to right, and builds
//! the intermediate instruction sequence. Runs of identical arithmetic
//! commands are folded into one instruction with a repeat count, I/O
//! commands are tagged with their occurrence ordinal, and loop
//! boundaries are paired through a LIFO id stack. Anything that is not
//! one of the eight commands is comment text and has no effect.

use crate::command::Command;
use crate::ir::{ArithOp, Instruction, IoOp, Program};
use bfc_common::{CompilerError, SourceLocation};

/// Brainfuck Lexer
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    location: SourceLocation,
    /// Arithmetic run still being extended; flushed when the run breaks
    /// or the input ends
    pending: Option<(ArithOp, u32)>,
    /// Open loops, innermost last; the location is where the `[` was
    loop_stack: Vec<(u32, SourceLocation)>,
    num_loops: u32,
    print_total: u32,
    read_total: u32,
    instructions: Vec<Instruction>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            location: SourceLocation::start(),
            pending: None,
            loop_stack: Vec::new(),
            num_loops: 0,
            print_total: 0,
            read_total: 0,
            instructions: Vec::new(),
        }
    }

    /// Consume the whole input and produce the instruction sequence
    /// plus the final I/O totals
    pub fn run(mut self) -> Result<Program, CompilerError> {
        while let Some(ch) = self.current_char() {
            let location = self.location;
            self.advance();

            let Some(command) = Command::from_char(ch) else {
                continue;
            };
            self.handle_command(command, location)?;
        }

        // A run that reaches end-of-input still has to be emitted.
        self.flush_pending();

        if let Some((_, location)) = self.loop_stack.pop() {
            return Err(CompilerError::UnclosedLoop { location });
        }

        log::debug!(
            "built {} instructions ({} prints, {} reads, {} loops)",
            self.instructions.len(),
            self.print_total,
            self.read_total,
            self.num_loops
        );

        Ok(Program {
            instructions: self.instructions,
            print_total: self.print_total,
            read_total: self.read_total,
        })
    }

    /// Get current character
    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += 1;
            self.location.advance(ch);
        }
    }

    fn handle_command(
        &mut self,
        command: Command,
        location: SourceLocation,
    ) -> Result<(), CompilerError> {
        match command {
            Command::IncCell => self.extend_run(ArithOp::IncCell),
            Command::DecCell => self.extend_run(ArithOp::DecCell),
            Command::IncPtr => self.extend_run(ArithOp::IncPtr),
            Command::DecPtr => self.extend_run(ArithOp::DecPtr),
            Command::Print => {
                self.flush_pending();
                self.print_total += 1;
                self.instructions.push(Instruction::Io {
                    op: IoOp::Print,
                    ordinal: self.print_total,
                });
            }
            Command::Read => {
                self.flush_pending();
                self.read_total += 1;
                self.instructions.push(Instruction::Io {
                    op: IoOp::Read,
                    ordinal: self.read_total,
                });
            }
            Command::LoopBegin => {
                self.flush_pending();
                self.num_loops += 1;
                self.loop_stack.push((self.num_loops, location));
                self.instructions
                    .push(Instruction::LoopBegin { id: self.num_loops });
            }
            Command::LoopEnd => {
                self.flush_pending();
                let Some((id, _)) = self.loop_stack.pop() else {
                    return Err(CompilerError::UnmatchedLoopEnd { location });
                };
                self.instructions.push(Instruction::LoopEnd { id });
            }
        }
        Ok(())
    }

    /// Extend the pending run if the op matches; otherwise flush it and
    /// start a new one
    fn extend_run(&mut self, op: ArithOp) {
        match &mut self.pending {
            Some((pending_op, count)) if *pending_op == op => *count += 1,
            _ => {
                self.flush_pending();
                self.pending = Some((op, 1));
            }
        }
    }

    fn flush_pending(&mut self) {
        if let Some((op, count)) = self.pending.take() {
            self.instructions.push(Instruction::Arithmetic { op, count });
        }
    }
}
