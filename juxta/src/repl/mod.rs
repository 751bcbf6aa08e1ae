//! REPL (Read-Eval-Print Loop) and line-by-line script runner

use crate::error::{Result, report_error};
use crate::interp::Interpreter;
use crate::lexer::{tokenize, tokenize_lossy};
use crate::parser::parse;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

const PROMPT: &str = ">> ";
const HISTORY_FILE: &str = ".juxta_history";
const REPL_NAME: &str = "<repl>";

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    interpreter: Interpreter,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Create a new REPL
    pub fn new() -> RlResult<Self> {
        let editor = DefaultEditor::new()?;
        let interpreter = Interpreter::new();

        let history_path = dirs_home().map(|h| h.join(HISTORY_FILE));

        let mut repl = Repl {
            editor,
            interpreter,
            history_path,
        };

        if let Some(ref path) = repl.history_path {
            let _ = repl.editor.load_history(path);
        }

        Ok(repl)
    }

    /// Run until end of input or `:quit`
    pub fn run(&mut self) -> RlResult<()> {
        println!("juxta {}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for help, :quit to exit.\n");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line);

                    if line.starts_with(':') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    for output in eval_line(&mut self.interpreter, REPL_NAME, line) {
                        println!("{output}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = self.editor.save_history(path);
        }

        Ok(())
    }

    /// Handle REPL commands (starting with :); true means quit
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            ":quit" | ":q" | ":exit" => true,
            ":help" | ":h" | ":?" => {
                print_help();
                false
            }
            ":clear" => {
                print!("\x1B[2J\x1B[1;1H");
                false
            }
            ":env" => {
                if self.interpreter.env().is_empty() {
                    println!("(no bindings)");
                }
                for name in self.interpreter.env().names() {
                    if let Some(value) = self.interpreter.env().get(name) {
                        println!("{name} = {}", value.render_for_print());
                    }
                }
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                false
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :help, :h, :?   Show this help");
    println!("  :quit, :q       Exit the REPL");
    println!("  :clear          Clear the screen");
    println!("  :env            Show every binding");
    println!();
    println!("Statements:");
    println!("  x := 1 + 2               Bind a value");
    println!("  inc := \\ n => n + 1      Bind a function");
    println!("  print inc . 4            Apply by juxtaposition and print");
    println!("  append . xs . 5          Grow the list bound to xs");
    println!("  dump                     Show the raw form of every binding");
    println!();
    println!("List built-ins: head . xs, tail . xs, sort . xs, length . xs");
}

/// Run one line and return what it prints, failing on the first error
pub fn run_line(interp: &mut Interpreter, line: &str) -> Result<Vec<String>> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    let stmt = parse(tokens)?;
    Ok(interp.execute(&stmt)?)
}

/// Run one line the way a session does
///
/// Bad characters are reported and skipped. A parse or runtime failure is
/// reported and drops the line; earlier bindings stay.
pub fn eval_line(interp: &mut Interpreter, filename: &str, line: &str) -> Vec<String> {
    let (tokens, lex_errors) = tokenize_lossy(line);
    for err in &lex_errors {
        report_error(filename, line, err);
    }
    if tokens.is_empty() {
        return Vec::new();
    }

    let result = parse(tokens)
        .and_then(|stmt| interp.execute(&stmt).map_err(Into::into));
    match result {
        Ok(lines) => lines,
        Err(err) => {
            tracing::debug!(error = %err, "statement failed");
            report_error(filename, line, &err);
            Vec::new()
        }
    }
}

/// Run every line of `source` in one session, printing as it goes
pub fn run_script(filename: &str, source: &str) -> Interpreter {
    let mut interp = Interpreter::new();
    for line in source.lines() {
        for output in eval_line(&mut interp, filename, line) {
            println!("{output}");
        }
    }
    interp
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
