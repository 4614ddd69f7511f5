//! Brainfuck x86-64 Compiler Driver
//!
//! Main entry point for the bfc compiler: reads a source file, builds
//! the instruction sequence, emits NASM x86-64 assembly, and writes the
//! listing to the output file in one pass. A malformed program aborts
//! before the output file is touched.

use bfc_frontend::Lexer;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "out.asm";

#[derive(Parser)]
#[command(name = "bfc")]
#[command(about = "Brainfuck to x86-64 assembly compiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input Brainfuck source file
    input: PathBuf,

    /// Output assembly file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the built instruction sequence as JSON instead of emitting
    /// assembly
    #[arg(long)]
    dump_ir: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let output_path = cli.output.clone().unwrap_or_else(|| {
        log::warn!("no output file specified, defaulting to '{}'", DEFAULT_OUTPUT);
        PathBuf::from(DEFAULT_OUTPUT)
    });

    if let Err(e) = compile_file(&cli.input, &output_path, cli.dump_ir) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compile_file(
    input_path: &Path,
    output_path: &Path,
    dump_ir: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input_path)?;

    let program = Lexer::new(&source).run()?;
    log::info!(
        "built {} instructions ({} prints, {} reads)",
        program.instructions.len(),
        program.print_total,
        program.read_total
    );

    if dump_ir {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(());
    }

    let asm_text = bfc_codegen::generate_assembly(&program);
    fs::write(output_path, asm_text)?;
    println!("Assembly written to: {}", output_path.display());
    Ok(())
}
