//! FILENAME: app/src/main.rs
//! PURPOSE: Line-oriented front-end over the expression engine.
//! CONTEXT: Reads one expression per line from stdin and prints the
//! simplified form. `--json` switches the output to one serialized record
//! per line for driving from other tools; `-e EXPR` evaluates a single
//! expression and exits. The `:tokens` and `:tree` commands dump the lexer
//! and parser output for a line, which is the quickest way to see why an
//! input simplifies the way it does.

mod logging;

use std::io::{self, BufRead};

use serde::Serialize;

use engine::EngineError;
use parser::{Lexer, Token};

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut json = false;
    let mut one_shot: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "-e" => match args.get(i + 1) {
                Some(expr) => {
                    one_shot = Some(expr.clone());
                    i += 1;
                }
                None => {
                    eprintln!("error: -e requires an expression");
                    std::process::exit(2);
                }
            },
            other => {
                eprintln!("error: unknown argument {:?}", other);
                eprintln!("usage: app [--json] [-e EXPR]");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    if let Some(expr) = one_shot {
        std::process::exit(eval_line(&expr, json));
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };

        if let Some(rest) = line.strip_prefix(":tokens") {
            print_tokens(rest);
        } else if let Some(rest) = line.strip_prefix(":tree") {
            print_tree(rest);
        } else {
            eval_line(&line, json);
        }
    }
}

/// Evaluates one input line. Returns the process exit code for `-e` mode.
fn eval_line(input: &str, json: bool) -> i32 {
    match engine::evaluate(input) {
        Ok(output) => {
            if json {
                print_record(Record {
                    input,
                    output: Some(output),
                    error: None,
                });
            } else {
                println!("{}", output);
            }
            0
        }
        Err(err) => {
            log::debug!("evaluation failed for {:?}: {}", input, err);
            if json {
                print_record(Record {
                    input,
                    output: None,
                    error: Some(describe_error(&err)),
                });
            } else {
                eprintln!("error: {}", describe_error(&err));
            }
            1
        }
    }
}

fn describe_error(err: &EngineError) -> String {
    match err {
        EngineError::Parse(e) => e.to_string(),
        EngineError::Eval(e) => format!("Evaluation error: {}", e),
    }
}

fn print_record(record: Record) {
    match serde_json::to_string(&record) {
        Ok(line) => println!("{}", line),
        Err(e) => log::error!("record serialization failed: {}", e),
    }
}

/// Dumps the raw token stream for a line, Eof included.
fn print_tokens(input: &str) {
    let mut lexer = Lexer::new(input);
    loop {
        let token = lexer.next_token();
        println!("{:?}", token);
        if token == Token::Eof {
            break;
        }
    }
}

/// Dumps the unsimplified parse tree for a line.
fn print_tree(input: &str) {
    let mut arena = engine::ExprArena::new();
    match parser::parse(input, &mut arena) {
        Ok(root) => println!("{}", engine::render_debug(&arena, root)),
        Err(e) => eprintln!("error: {}", e),
    }
}
