use crate::interpreter::RuntimeError;
use crate::parser::ast::SourceLocation;
use crate::parser::ParseError;

/// Any failure of [`evaluate_str`](crate::evaluate_str)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn location(&self) -> SourceLocation {
        match self {
            Error::Parse(err) => err.location(),
            Error::Runtime(err) => err.location(),
        }
    }
}
