use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error that is not tied to any place in a script.
    pub fn without_position(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UsageError { .. } => "UsageError",
            ErrorImpl::IOError { .. } => "IOError",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UsageError { usage } => ErrorTip::Suggestion(usage.clone()),
            ErrorImpl::IOError { path, message } => {
                ErrorTip::Suggestion(format!("Cannot access `{}`: {}", path, message))
            }
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character: `{}`", character))
            }
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::UnexpectedToken { token, message: None } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedToken {
                token,
                message: Some(message),
            } => ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message)),
            ErrorImpl::UndefinedVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` is not defined", variable))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
        }
    }

    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match &self.internal_error {
            ErrorImpl::UsageError { .. } => 2,
            _ => 1,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("usage: {usage}")]
    UsageError { usage: String },
    #[error("cannot access {path:?}: {message}")]
    IOError { path: String, message: String },
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken {
        token: String,
        message: Option<String>,
    },
    #[error("undefined variable: {variable:?}")]
    UndefinedVariable { variable: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
