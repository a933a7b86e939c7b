//! Shell error types with user-facing message mapping.

use domain::{DomainError, ValidationError};
use thiserror::Error;

/// Shell-level error type that maps to a message for the user.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The first word of the line is not a known command.
    #[error("Unknown command '{0}'. Type 'help' to list commands.")]
    UnknownCommand(String),

    /// No order carries the requested code.
    #[error("Order {0} not found.")]
    OrderNotFound(String),

    /// Domain logic error.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ShellError {
    /// Returns true for failures of the store itself rather than of the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ShellError::Domain(DomainError::Store(_)))
    }

    /// Renders the error the way the user should see it.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::Domain(DomainError::Store(err)) => {
                format!("Error: storage failure ({err})")
            }
            other => format!("Error: {other}"),
        }
    }
}

impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::Domain(DomainError::Validation(err))
    }
}
