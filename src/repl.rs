use std::io::{self, BufRead, Write};
use std::rc::Rc;

use log::debug;

use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::object::{Environment, Value};
use crate::parser::{ParseError, Parser};

pub const PROMPT: &str = ">> ";

/// Parses and evaluates a single program against a fresh environment,
/// returning the parser's accumulated errors (wrapped in [`ParseError`]) if
/// any, or the final evaluated value otherwise.
pub fn run(source: &str) -> Result<Rc<Value>, ParseError> {
    let program = Parser::parse(Lexer::new(source))?;
    let evaluator = Evaluator::new();
    let env = Environment::new();
    Ok(evaluator.eval_program(&program, &env))
}

/// Drives the interactive read-eval-print loop until `exit` is entered or the
/// input stream is closed. A single [`Environment`] and [`Evaluator`] persist
/// for the whole session, so bindings made on one line are visible on the
/// next.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();
    let evaluator = Evaluator::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();

        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        debug!("evaluating line: {line}");

        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(&mut output, parser.errors())?;
            continue;
        }

        let result = evaluator.eval_program(&program, &env);
        writeln!(output, "{result}")?;
    }

    Ok(())
}

fn print_parse_errors(output: &mut impl Write, errors: &[String]) -> io::Result<()> {
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
