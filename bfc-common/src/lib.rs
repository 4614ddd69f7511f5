//! Brainfuck x86-64 Compiler - Common Types and Utilities
//!
//! This crate contains the shared error and source-location types
//! used across all components of the bfc compiler.

pub mod error;
pub mod source_loc;

pub use error::CompilerError;
pub use source_loc::SourceLocation;
