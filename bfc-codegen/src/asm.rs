//! x86-64 Assembly Instruction Definitions
//!
//! The subset of NASM-syntax x86-64 the compiler emits. The register
//! model is fixed: `rsi` holds the tape pointer for the whole program,
//! `rax`/`rdi` are loaded immediately before each syscall, and `rdx` is
//! pinned to 1 as the syscall byte count.

use std::fmt;

/// The registers the generated code touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    /// Syscall number / return value
    Rax,
    /// Syscall arg 1 (file descriptor; exit status)
    Rdi,
    /// Syscall arg 3 (byte count, pinned to 1)
    Rdx,
    /// Syscall arg 2 and the tape pointer
    Rsi,
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::Rax => write!(f, "rax"),
            Reg::Rdi => write!(f, "rdi"),
            Reg::Rdx => write!(f, "rdx"),
            Reg::Rsi => write!(f, "rsi"),
        }
    }
}

/// One line of the emitted listing
///
/// Each variant renders as exactly one NASM line via `Display`;
/// `Blank` renders as an empty line and only groups blocks visually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmInst {
    // Directives
    Section(String),      // section .bss
    Reserve(String, u32), // tape resb 9999
    Global(String),       // global _start
    Label(String),        // _start:

    // Register arithmetic
    AddImm(Reg, u32), // add rsi,5
    SubImm(Reg, u32), // sub rsi,5
    IncReg(Reg),      // inc rsi
    DecReg(Reg),      // dec rsi

    // Arithmetic on the byte at the pointer
    AddByteImm(Reg, u32), // add byte [rsi],5
    SubByteImm(Reg, u32), // sub byte [rsi],5
    IncByte(Reg),         // inc byte [rsi]
    DecByte(Reg),         // dec byte [rsi]

    // Moves
    MovImm(Reg, u32),     // mov rax,60
    MovReg(Reg, Reg),     // mov rax,rdx
    MovLabel(Reg, String), // mov rsi,tape
    Xor(Reg, Reg),        // xor rax,rax

    // Control flow
    CmpByteZero(Reg), // cmp byte [rsi],0
    Je(String),       // je loop_end_1
    Jne(String),      // jne loop_1
    Call(String),     // call print
    Ret,              // ret
    Syscall,          // syscall

    // Layout
    Blank,
}

impl fmt::Display for AsmInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmInst::Section(name) => write!(f, "section {}", name),
            AsmInst::Reserve(label, bytes) => write!(f, "{} resb {}", label, bytes),
            AsmInst::Global(label) => write!(f, "global {}", label),
            AsmInst::Label(label) => write!(f, "{}:", label),

            AsmInst::AddImm(reg, imm) => write!(f, "add {},{}", reg, imm),
            AsmInst::SubImm(reg, imm) => write!(f, "sub {},{}", reg, imm),
            AsmInst::IncReg(reg) => write!(f, "inc {}", reg),
            AsmInst::DecReg(reg) => write!(f, "dec {}", reg),

            AsmInst::AddByteImm(reg, imm) => write!(f, "add byte [{}],{}", reg, imm),
            AsmInst::SubByteImm(reg, imm) => write!(f, "sub byte [{}],{}", reg, imm),
            AsmInst::IncByte(reg) => write!(f, "inc byte [{}]", reg),
            AsmInst::DecByte(reg) => write!(f, "dec byte [{}]", reg),

            AsmInst::MovImm(reg, imm) => write!(f, "mov {},{}", reg, imm),
            AsmInst::MovReg(rd, rs) => write!(f, "mov {},{}", rd, rs),
            AsmInst::MovLabel(reg, label) => write!(f, "mov {},{}", reg, label),
            AsmInst::Xor(rd, rs) => write!(f, "xor {},{}", rd, rs),

            AsmInst::CmpByteZero(reg) => write!(f, "cmp byte [{}],0", reg),
            AsmInst::Je(label) => write!(f, "je {}", label),
            AsmInst::Jne(label) => write!(f, "jne {}", label),
            AsmInst::Call(label) => write!(f, "call {}", label),
            AsmInst::Ret => write!(f, "ret"),
            AsmInst::Syscall => write!(f, "syscall"),

            AsmInst::Blank => Ok(()),
        }
    }
}
