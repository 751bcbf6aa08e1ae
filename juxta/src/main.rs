//! juxta CLI

use clap::{Parser, Subcommand};
use juxta::error::report_error;
use juxta::lexer::tokenize_lossy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "juxta", version, about = "Juxta - expressions reduced by substitution")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (the default)
    Repl,
    /// Run every line of a file as a statement
    Run {
        /// Source file to run
        file: PathBuf,
    },
    /// Parse each line and dump its AST as JSON (debug)
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
    /// Tokenize and dump tokens (debug)
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
}

fn main() {
    juxta::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => start_repl(),
        Command::Run { file } => run_file(&file),
        Command::Parse { file } => parse_file(&file),
        Command::Tokens { file } => tokenize_file(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn start_repl() -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = juxta::repl::Repl::new()?;
    repl.run()?;
    Ok(())
}

fn run_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();

    juxta::repl::run_script(&filename, &source);
    Ok(())
}

fn parse_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();

    for line in source.lines() {
        let (tokens, errors) = tokenize_lossy(line);
        for err in &errors {
            report_error(&filename, line, err);
        }
        if tokens.is_empty() {
            continue;
        }
        match juxta::parser::parse(tokens) {
            Ok(stmt) => println!("{}", serde_json::to_string_pretty(&stmt)?),
            Err(err) => report_error(&filename, line, &err),
        }
    }
    Ok(())
}

fn tokenize_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();

    for line in source.lines() {
        let (tokens, errors) = tokenize_lossy(line);
        for err in &errors {
            report_error(&filename, line, err);
        }
        for (tok, span) in &tokens {
            println!("{:?} @ {}..{}", tok, span.start, span.end);
        }
    }
    Ok(())
}
