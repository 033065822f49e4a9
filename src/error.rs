//! Error types for wrapper generation.
//!
//! ```text
//! GenError
//! ├── NotRustFile / NoInputs  - bad invocation
//! ├── Io                      - reading inputs or writing the unit
//! ├── Directive               - a directive line that cannot be generated
//! └── Format                  - assembled output is not a valid Rust file
//! ```
//!
//! None of these are recoverable: generation is deterministic, so the fix is
//! always to correct the input and run again.

use std::path::PathBuf;

use thiserror::Error;

pub type GenResult<T> = Result<T, GenError>;

/// Top-level generation failure.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("not a .rs file: {}", .0.display())]
    NotRustFile(PathBuf),

    #[error("no input files")]
    NoInputs,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{location}: {source}")]
    Directive {
        /// `file:line` of the offending directive, or `<common>`.
        location: String,
        #[source]
        source: DirectiveError,
    },

    /// The raw, unformatted text is kept so it can be dumped for debugging.
    #[error("generated code does not parse: {source}")]
    Format {
        raw: String,
        #[source]
        source: syn::Error,
    },
}

impl GenError {
    pub(crate) fn directive(location: impl Into<String>, source: DirectiveError) -> Self {
        GenError::Directive {
            location: location.into(),
            source,
        }
    }

    /// The unformatted buffer, if this is a formatting failure.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            GenError::Format { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Errors in a single `//wrap:expr` line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("expected directive keyword `{0}`")]
    MissingKeyword(&'static str),

    #[error("missing method name")]
    MissingName,

    #[error("missing foreign function name")]
    MissingForeignFunction,

    #[error("directive declares no receiver argument")]
    NoReceiver,

    #[error("more than one `:` separator")]
    RepeatedSeparator,

    #[error("literal code {0:?} is only allowed in the foreign argument list")]
    LiteralInHostList(String),

    #[error("reference to unknown argument {0:?}")]
    UnknownArgument(String),

    #[error("argument {0:?} declared twice")]
    DuplicateArgument(String),

    #[error("variadic marker on {0:?} is only allowed on the last argument")]
    MisplacedVariadic(String),

    #[error("variadic argument {0:?} must be the last foreign argument")]
    VariadicNotLast(String),

    #[error("unterminated literal starting at column {0}")]
    UnterminatedLiteral(usize),

    #[error("empty name or type in {0:?}")]
    EmptyComponent(String),

    #[error("{what} {text:?} is not valid Rust: {reason}")]
    InvalidRust {
        what: &'static str,
        text: String,
        reason: String,
    },
}

impl DirectiveError {
    pub(crate) fn invalid(what: &'static str, text: &str, err: impl std::fmt::Display) -> Self {
        DirectiveError::InvalidRust {
            what,
            text: text.to_string(),
            reason: err.to_string(),
        }
    }
}
