//! Assembly emission
//!
//! Lowers the instruction sequence to a flat list of [`AsmInst`] lines
//! and renders that list to the final text artifact. The layout is a
//! fixed prologue, one block per instruction, an exit epilogue, and the
//! shared I/O subroutines when a program uses an I/O command often
//! enough to make the call form smaller than repeating the inline
//! sequence.

use crate::asm::{AsmInst, Reg};
use bfc_frontend::{ArithOp, Instruction, IoOp, Program};

/// Tape capacity in bytes. Reserved uninitialized in `.bss`; the
/// generated code performs no bounds checks, so a program that walks
/// past the end is on its own.
pub const TAPE_SIZE: u32 = 9999;

/// `.bss` label for the tape
pub const TAPE_LABEL: &str = "tape";

/// Program entry point label
pub const ENTRY_LABEL: &str = "_start";

/// Shared output subroutine label
pub const PRINT_LABEL: &str = "print";

/// Shared input subroutine label
pub const READ_LABEL: &str = "read";

/// Most occurrences of an I/O command a program may have before every
/// occurrence of that command switches from the inline sequence to a
/// call of the shared subroutine. The choice is global per command
/// kind: all inline or all calls, decided once from the final totals.
pub const INLINE_IO_LIMIT: u32 = 4;

fn loop_label(id: u32) -> String {
    format!("loop_{}", id)
}

fn loop_end_label(id: u32) -> String {
    format!("loop_end_{}", id)
}

/// Lower a program to the complete assembly listing, one [`AsmInst`]
/// per line
pub fn lower_program(program: &Program) -> Vec<AsmInst> {
    let print_as_call = program.print_total > INLINE_IO_LIMIT;
    let read_as_call = program.read_total > INLINE_IO_LIMIT;
    log::debug!(
        "lowering {} instructions (print: {}, read: {})",
        program.instructions.len(),
        if print_as_call { "subroutine" } else { "inline" },
        if read_as_call { "subroutine" } else { "inline" },
    );

    let mut out = Vec::new();
    prologue(&mut out);

    for instruction in &program.instructions {
        match *instruction {
            Instruction::Arithmetic { op, count } => arithmetic(&mut out, op, count),
            Instruction::Io {
                op: IoOp::Print, ..
            } => {
                if print_as_call {
                    out.push(AsmInst::Call(PRINT_LABEL.to_string()));
                } else {
                    out.push(AsmInst::Blank);
                    print_sequence(&mut out);
                    out.push(AsmInst::Blank);
                }
            }
            Instruction::Io { op: IoOp::Read, .. } => {
                if read_as_call {
                    out.push(AsmInst::Call(READ_LABEL.to_string()));
                } else {
                    out.push(AsmInst::Blank);
                    read_sequence(&mut out);
                    out.push(AsmInst::Blank);
                }
            }
            Instruction::LoopBegin { id } => {
                out.push(AsmInst::Blank);
                out.push(AsmInst::Label(loop_label(id)));
                out.push(AsmInst::CmpByteZero(Reg::Rsi));
                out.push(AsmInst::Je(loop_end_label(id)));
                out.push(AsmInst::Blank);
            }
            Instruction::LoopEnd { id } => {
                out.push(AsmInst::Blank);
                out.push(AsmInst::CmpByteZero(Reg::Rsi));
                out.push(AsmInst::Jne(loop_label(id)));
                out.push(AsmInst::Label(loop_end_label(id)));
                out.push(AsmInst::Blank);
            }
        }
    }

    epilogue(&mut out);

    if print_as_call {
        out.push(AsmInst::Blank);
        out.push(AsmInst::Label(PRINT_LABEL.to_string()));
        print_sequence(&mut out);
        out.push(AsmInst::Ret);
    }
    if read_as_call {
        out.push(AsmInst::Blank);
        out.push(AsmInst::Label(READ_LABEL.to_string()));
        read_sequence(&mut out);
        out.push(AsmInst::Ret);
    }

    out
}

/// Render the lowered listing as newline-separated text
pub fn render(instructions: &[AsmInst]) -> String {
    let mut text = String::with_capacity(instructions.len() * 16);
    for instruction in instructions {
        text.push_str(&instruction.to_string());
        text.push('\n');
    }
    text
}

/// Tape reservation, entry point, pointer setup. `rdx` is zeroed and
/// incremented to 1 once here: it is the byte-count argument of every
/// read/write syscall and never changes, and `mov` from it encodes
/// shorter than a `mov` immediate at each I/O site.
fn prologue(out: &mut Vec<AsmInst>) {
    out.push(AsmInst::Section(".bss".to_string()));
    out.push(AsmInst::Reserve(TAPE_LABEL.to_string(), TAPE_SIZE));
    out.push(AsmInst::Section(".text".to_string()));
    out.push(AsmInst::Global(ENTRY_LABEL.to_string()));
    out.push(AsmInst::Label(ENTRY_LABEL.to_string()));
    out.push(AsmInst::MovLabel(Reg::Rsi, TAPE_LABEL.to_string()));
    out.push(AsmInst::Xor(Reg::Rdx, Reg::Rdx));
    out.push(AsmInst::IncReg(Reg::Rdx));
    out.push(AsmInst::Blank);
}

/// exit(0)
fn epilogue(out: &mut Vec<AsmInst>) {
    out.push(AsmInst::Blank);
    out.push(AsmInst::MovImm(Reg::Rax, 60));
    out.push(AsmInst::Xor(Reg::Rdi, Reg::Rdi));
    out.push(AsmInst::Syscall);
}

fn arithmetic(out: &mut Vec<AsmInst>, op: ArithOp, count: u32) {
    // A run of one uses the single-operand inc/dec encoding; anything
    // longer folds into one immediate add/sub.
    let inst = if count > 1 {
        match op {
            ArithOp::IncCell => AsmInst::AddByteImm(Reg::Rsi, count),
            ArithOp::DecCell => AsmInst::SubByteImm(Reg::Rsi, count),
            ArithOp::IncPtr => AsmInst::AddImm(Reg::Rsi, count),
            ArithOp::DecPtr => AsmInst::SubImm(Reg::Rsi, count),
        }
    } else {
        match op {
            ArithOp::IncCell => AsmInst::IncByte(Reg::Rsi),
            ArithOp::DecCell => AsmInst::DecByte(Reg::Rsi),
            ArithOp::IncPtr => AsmInst::IncReg(Reg::Rsi),
            ArithOp::DecPtr => AsmInst::DecReg(Reg::Rsi),
        }
    };
    out.push(inst);
}

/// write(1, rsi, 1): syscall number and fd are both 1, taken from rdx
fn print_sequence(out: &mut Vec<AsmInst>) {
    out.push(AsmInst::MovReg(Reg::Rax, Reg::Rdx));
    out.push(AsmInst::MovReg(Reg::Rdi, Reg::Rdx));
    out.push(AsmInst::Syscall);
}

/// read(0, rsi, 1): syscall number and fd are both 0
fn read_sequence(out: &mut Vec<AsmInst>) {
    out.push(AsmInst::Xor(Reg::Rax, Reg::Rax));
    out.push(AsmInst::Xor(Reg::Rdi, Reg::Rdi));
    out.push(AsmInst::Syscall);
}
