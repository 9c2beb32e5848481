//! Interactive calculator over the library grammar.
//!
//! With arguments, evaluates them as a single expression and exits
//! (non-zero on a parse failure). Without arguments, runs a
//! read-eval-print loop until EOF, interrupt, or an exit word.

use std::env;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use descent::calc::parse_calculator;

fn main() -> rustyline::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let expression = args.join(" ");
        match parse_calculator(&expression) {
            Ok(value) => println!("{value}"),
            Err(diag) => {
                eprintln!("{diag}");
                process::exit(1);
            }
        }
        return Ok(());
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if is_exit_word(line) {
                    break;
                }
                let _ = rl.add_history_entry(line);
                match parse_calculator(line) {
                    Ok(value) => println!("{value}"),
                    Err(diag) => eprintln!("{diag}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {err}");
                break;
            }
        }
    }
    Ok(())
}

fn is_exit_word(line: &str) -> bool {
    ["exit", "quit", "q"]
        .iter()
        .any(|word| line.eq_ignore_ascii_case(word))
}
