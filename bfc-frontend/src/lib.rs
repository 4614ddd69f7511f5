//! Brainfuck x86-64 Compiler - Frontend
//!
//! Turns a raw character stream into the intermediate instruction
//! sequence consumed by the code generator. The lexer folds runs of
//! identical arithmetic commands, tags I/O operations with their
//! occurrence ordinals, and pairs loop boundaries with unique ids.

pub mod command;
pub mod ir;
pub mod lexer;

pub use command::Command;
pub use ir::{ArithOp, Instruction, IoOp, Program};
pub use lexer::Lexer;
