use bfc_codegen::generate_assembly;
use bfc_common::{CompilerError, SourceLocation};
use bfc_frontend::{ArithOp, Instruction, IoOp, Lexer, Program};
use pretty_assertions::assert_eq;

fn compile(source: &str) -> String {
    let program = Lexer::new(source).run().unwrap();
    generate_assembly(&program)
}

#[test]
fn test_cat_loop_structure() {
    // Read one byte, then while nonzero: print it and read the next.
    let program = Lexer::new(",[.,]").run().unwrap();
    assert_eq!(
        program.instructions,
        vec![
            Instruction::Io {
                op: IoOp::Read,
                ordinal: 1,
            },
            Instruction::LoopBegin { id: 1 },
            Instruction::Io {
                op: IoOp::Print,
                ordinal: 1,
            },
            Instruction::Io {
                op: IoOp::Read,
                ordinal: 2,
            },
            Instruction::LoopEnd { id: 1 },
        ]
    );

    let asm = generate_assembly(&program);
    let first_read = asm.find("xor rax,rax").unwrap();
    let begin_label = asm.find("loop_1:").unwrap();
    let print_block = asm.find("mov rax,rdx").unwrap();
    let back_edge = asm.find("jne loop_1").unwrap();
    let end_label = asm.find("loop_end_1:").unwrap();

    // Begin-label test right after the first read's block, body next,
    // back-edge test, then the end label.
    assert!(first_read < begin_label);
    assert!(begin_label < print_block);
    assert!(print_block < back_edge);
    assert!(back_edge < end_label);
}

#[test]
fn test_comment_characters_do_not_change_output() {
    let program_noisy = Lexer::new("+ + +").run().unwrap();
    let program_bare = Lexer::new("+++").run().unwrap();
    assert_eq!(program_noisy, program_bare);
    assert_eq!(
        generate_assembly(&program_noisy),
        generate_assembly(&program_bare)
    );
}

#[test]
fn test_begin_and_end_labels_pair_by_suffix() {
    let asm = compile("[[][]]+[]");

    let begin_suffixes: Vec<&str> = asm
        .lines()
        .filter_map(|line| line.strip_prefix("loop_"))
        .filter_map(|rest| rest.strip_suffix(':'))
        .filter(|rest| !rest.starts_with("end_"))
        .collect();
    let end_suffixes: Vec<&str> = asm
        .lines()
        .filter_map(|line| line.strip_prefix("loop_end_"))
        .filter_map(|rest| rest.strip_suffix(':'))
        .collect();

    assert_eq!(begin_suffixes.len(), 4);
    let mut begin_sorted = begin_suffixes.clone();
    begin_sorted.sort_unstable();
    let mut end_sorted = end_suffixes.clone();
    end_sorted.sort_unstable();
    assert_eq!(begin_sorted, end_sorted);
}

#[test]
fn test_unmatched_loop_end_produces_no_artifact() {
    let result = Lexer::new("]").run();
    assert_eq!(
        result,
        Err(CompilerError::UnmatchedLoopEnd {
            location: SourceLocation::new(1, 1),
        })
    );
}

#[test]
fn test_unclosed_loop_produces_no_artifact() {
    let result = Lexer::new("+[-").run();
    assert_eq!(
        result,
        Err(CompilerError::UnclosedLoop {
            location: SourceLocation::new(1, 2),
        })
    );
}

#[test]
fn test_increment_run_end_to_end() {
    let asm = compile("+");
    assert!(asm.contains("inc byte [rsi]"));
    assert!(!asm.contains("add byte [rsi]"));

    let asm = compile("++++++++");
    assert!(asm.contains("add byte [rsi],8"));
    assert!(!asm.contains("inc byte [rsi]"));
}

#[test]
fn test_hello_style_program_compiles() {
    // ++++++++[>++++++++<-]>+. prints 'A' (eight eights plus one).
    let asm = compile("++++++++[>++++++++<-]>+.");

    assert!(asm.starts_with("section .bss\ntape resb 9999\nsection .text\nglobal _start\n_start:\nmov rsi,tape\nxor rdx,rdx\ninc rdx\n"));
    assert!(asm.contains("add byte [rsi],8"));
    assert!(asm.contains("loop_1:"));
    assert!(asm.contains("je loop_end_1"));
    assert!(asm.contains("jne loop_1"));
    assert!(asm.contains("loop_end_1:"));
    // One print, far under the threshold: inline write syscall.
    assert!(asm.contains("mov rax,rdx\nmov rdi,rdx\nsyscall"));
    assert!(!asm.contains("call print"));
    assert!(asm.trim_end().ends_with("syscall"));
}

#[test]
fn test_many_prints_call_one_shared_routine() {
    let asm = compile("+.+.+.+.+.");
    assert_eq!(asm.lines().filter(|l| *l == "call print").count(), 5);
    assert_eq!(asm.lines().filter(|l| *l == "print:").count(), 1);
    // The routine body sits after the exit epilogue and returns.
    let exit = asm.find("mov rax,60").unwrap();
    let routine = asm.find("print:").unwrap();
    assert!(exit < routine);
    assert!(asm[routine..].contains("ret"));
}

#[test]
fn test_program_roundtrips_through_serde() {
    let program = Lexer::new(",[.,]").run().unwrap();
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(program, back);
    assert!(matches!(
        back.instructions[0],
        Instruction::Io { op: IoOp::Read, .. }
    ));
}

#[test]
fn test_pointer_moves_lower_to_register_ops() {
    let program = Program {
        instructions: vec![
            Instruction::Arithmetic {
                op: ArithOp::IncPtr,
                count: 4,
            },
            Instruction::Arithmetic {
                op: ArithOp::DecPtr,
                count: 1,
            },
        ],
        print_total: 0,
        read_total: 0,
    };
    let asm = generate_assembly(&program);
    assert!(asm.contains("add rsi,4"));
    assert!(asm.contains("dec rsi"));
}
