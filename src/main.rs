use std::{fs, io::Write};

use clap::Parser;
use shunter::{compute, engine::evaluator::evaluate};

/// shunter converts infix arithmetic expressions to postfix notation and
/// evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the expression argument as a file path and read the expression
    /// from it.
    #[arg(short, long)]
    file: bool,

    /// The expression is already in postfix notation; skip conversion.
    #[arg(short, long)]
    postfix: bool,

    /// The expression itself, or a path to it with --file. Read from
    /// `input.txt` when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = match &args.expression {
        Some(contents) if !args.file => contents.clone(),
        Some(path) => read_expression(path),
        None => read_expression("input.txt"),
    };

    if args.postfix {
        match evaluate(&source) {
            Ok(result) => {
                println!("Result: {result}");
                log_line("output.txt", &result.to_string());
            },
            Err(e) => report_failure(&e),
        }
    } else {
        match compute(&source) {
            Ok(evaluation) => {
                println!("Suffix expression: {}", evaluation.postfix);
                println!("Result: {}", evaluation.result);
                log_line("output.txt", &evaluation.postfix);
                log_line("output.txt", &evaluation.result.to_string());
            },
            Err(e) => report_failure(e.as_ref()),
        }
    }
}

/// Reads an expression from a file, trimming trailing line endings.
fn read_expression(path: &str) -> String {
    fs::read_to_string(path).map(|contents| contents.trim_end().to_string())
                            .unwrap_or_else(|_| {
                                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                std::process::exit(1);
                            })
}

/// Prints an engine error and records it in the error log.
fn report_failure(error: &dyn std::error::Error) {
    eprintln!("{error}");
    log_line("errorlog.txt", &error.to_string());
}

/// Appends one line to a log file. Logging is best effort; a failed write
/// must not mask the expression result or error being reported.
fn log_line(path: &str, line: &str) {
    let file = fs::OpenOptions::new().create(true).append(true).open(path);

    match file {
        Ok(mut file) => {
            let _ = writeln!(file, "{line}");
        },
        Err(e) => eprintln!("Failed to write to '{path}': {e}"),
    }
}
