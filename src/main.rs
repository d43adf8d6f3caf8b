use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use msharp::{StdioInterpreter, repl};

/// M# is a small scripting language: variables, `if`, `while` and a handful
/// of builtin methods, nothing more.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs an M# source file once.
    Run {
        /// Path to the `.ms` file.
        file: PathBuf,
    },
    /// Starts an interactive session. Type `:quit` to leave.
    Repl,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Run { file } => run_file(&file),
        Command::Repl => {
            let mut interpreter = StdioInterpreter::stdio();
            match repl::run(&mut interpreter, &mut io::stderr()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                },
            }
        },
    }
}

fn run_file(file: &Path) -> ExitCode {
    let Ok(source) = fs::read_to_string(file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  file.display());
        return ExitCode::FAILURE;
    };

    if let Err(e) = StdioInterpreter::stdio().execute_source(&source) {
        eprintln!("M# error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
