//! Error types for the Z3 layer.

use std::ffi::NulError;
use std::str::Utf8Error;

use thiserror::Error;

pub type Z3Result<T> = Result<T, Z3Error>;

#[derive(Debug, Error)]
pub enum Z3Error {
    /// Z3 reported an error through its error code.
    #[error("Z3 error {code}: {message}")]
    Solver { code: u32, message: String },

    #[error("name contains an interior NUL byte: {0}")]
    Nul(#[from] NulError),

    #[error("Z3 returned invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("Z3 returned a null {0}")]
    NullHandle(&'static str),

    #[error("expected a {expected} expression, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}
