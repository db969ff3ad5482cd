// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Stack error
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Custom error message
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// creates a custom error from a string
    pub fn custom(s: &impl ToString) -> Error {
        Error::Custom(s.to_string())
    }
}

/// Stack errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    /// The named operation needed a value but the stack was empty
    #[error("{0} on an empty stack")]
    Empty(&'static str),
}
