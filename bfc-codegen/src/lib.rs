//! Brainfuck x86-64 Compiler - Code Generation Backend
//!
//! This crate handles the final phase of compilation: generating NASM
//! x86-64 assembly from the intermediate instruction sequence. It
//! includes:
//!
//! - The emitted instruction model (`asm`)
//! - Lowering and text rendering (`emit`)

pub mod asm;
pub mod emit;

pub use asm::{AsmInst, Reg};
pub use emit::{lower_program, render};

use bfc_frontend::Program;

/// Main entry point for code generation
pub fn generate_assembly(program: &Program) -> String {
    emit::render(&emit::lower_program(program))
}
