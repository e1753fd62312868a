use std::fmt::{self, Display};

use super::{
    ArrayLiteral, BooleanLiteral, CallExpression, FunctionLiteral, HashLiteral, Identifier,
    IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
    StringLiteral,
};

/// The closed set of expression forms. Each variant wraps a dedicated struct
/// so that per-node logic (parsing, display) stays in its own file.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    ArrayLiteral(ArrayLiteral),
    HashLiteral(HashLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
    Index(IndexExpression),
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{e}"),
            Expression::IntegerLiteral(e) => write!(f, "{e}"),
            Expression::BooleanLiteral(e) => write!(f, "{e}"),
            Expression::StringLiteral(e) => write!(f, "{e}"),
            Expression::ArrayLiteral(e) => write!(f, "{e}"),
            Expression::HashLiteral(e) => write!(f, "{e}"),
            Expression::Prefix(e) => write!(f, "{e}"),
            Expression::Infix(e) => write!(f, "{e}"),
            Expression::If(e) => write!(f, "{e}"),
            Expression::FunctionLiteral(e) => write!(f, "{e}"),
            Expression::Call(e) => write!(f, "{e}"),
            Expression::Index(e) => write!(f, "{e}"),
        }
    }
}
