use std::{error::Error, fmt::Display};

/// Carries the accumulated parser diagnostics for callers that want a single
/// `Result`-shaped value (the file-running path of the binary) rather than
/// inspecting [`super::Parser::errors`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub messages: Vec<String>,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Woops! We ran into some monkey business here!")?;
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\t{message}")?;
        }
        Ok(())
    }
}

impl Error for ParseError {}
