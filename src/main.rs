use std::fs;
use std::io;
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use log::error;

use wisp_lang::object::Value;
use wisp_lang::repl;

/// A tree-walking interpreter for the Wisp scripting language.
#[derive(Debug, ClapParser)]
#[command(author, version, about)]
struct Cli {
    /// Path to a source file to run. Starts the interactive REPL if omitted.
    path: Option<String>,

    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    verbosity: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    simple_logger::init_with_level(cli.verbosity.into()).expect("logger can only be set up once");

    match cli.path {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_repl() -> ExitCode {
    println!("Hello! This is the Wisp programming language.");
    println!("Type `exit` to leave.");

    let stdin = io::stdin();
    match repl::start(stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("REPL I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            error!("could not read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match repl::run(&source) {
        Ok(value) => {
            if let Value::Error(message) = value.as_ref() {
                eprintln!("ERROR: {message}");
                ExitCode::FAILURE
            } else {
                println!("{value}");
                ExitCode::SUCCESS
            }
        }
        Err(parse_error) => {
            eprintln!("{parse_error}");
            ExitCode::FAILURE
        }
    }
}

