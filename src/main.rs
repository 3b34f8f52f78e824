mod ast;
mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod highlighter;
mod parser;
mod reader;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::{PROMPT, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Environment;
use highlighter::LispHelper;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::rc::Rc;
use value::Value;

/// A small Lisp interpreter with closures, currying and first-class errors.
#[derive(Parser, Debug)]
#[command(name = "hyperlambda")]
#[command(version = config::VERSION)]
#[command(about = "An interactive interpreter for a small Lisp dialect")]
struct CliArgs {
    /// Files to load and run. With no files, starts an interactive REPL.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();
    let env = Environment::root();
    register_builtins(&env);

    if args.files.is_empty() {
        run_repl(&env);
    } else {
        run_files(&env, &args.files);
    }
}

fn run_files(env: &Rc<Environment>, files: &[PathBuf]) {
    for path in files {
        let call = Value::Active(vec![
            Value::Symbol("load".to_string()),
            Value::String(path.display().to_string()),
        ]);
        if let Value::Error(msg) = eval::eval(env, call) {
            println!("Error: {msg}");
        }
    }
}

fn run_repl(env: &Rc<Environment>) {
    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");

    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<LispHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).expect("failed to initialize line editor");
    rl.set_helper(Some(LispHelper::new()));
    let _ = rl.load_history(config::HISTORY_FILE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parser::parse_program(&line) {
                    Ok(node) => {
                        let value = reader::read(&node);
                        let result = eval::eval(env, value);
                        println!("{result}");
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                println!("Error: {e}");
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
}
