//! Directive model and parsing.
//!
//! A directive is one comment line describing one wrapper method:
//!
//! ```text
//! //wrap:expr Name[:Result] [arg[:Type] ...] [ : ] ForeignFn carg [carg ...]
//! ```
//!
//! Without the bare `:` separator the foreign argument list doubles as the
//! host argument list.

mod parser;
pub mod token;

use crate::config::GenConfig;
use crate::error::DirectiveError;

pub use token::{Token, TokenKind, tokenize};

/// Suffix marking a host argument as a sequence flattened into an array.
pub const VARIADIC_MARKER: &str = "...";

/// One generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Name of the generated method.
    pub name: String,
    /// Declared result type.
    pub result: String,
    /// Host-facing arguments in declaration order; the first is the receiver.
    pub host_args: Vec<HostArg>,
    /// Foreign function called by the wrapper.
    pub foreign_fn: String,
    /// Foreign call arguments, after the implicit context.
    pub foreign_args: Vec<ForeignArg>,
    /// The last host argument is a sequence.
    pub variadic: bool,
    /// The host list was reused from the foreign list (no separator).
    pub passthrough: bool,
}

/// A host-side parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostArg {
    /// Name without any variadic marker.
    pub name: String,
    pub ty: String,
    pub variadic: bool,
}

/// One argument of the foreign call, before binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForeignArg {
    /// Code inserted verbatim.
    Literal(String),
    /// A host argument, optionally cast to a foreign primitive type.
    Reference { name: String, ctype: Option<String> },
}

impl Directive {
    /// Parse a full directive line, keyword included.
    pub fn parse(line: &str, config: &GenConfig) -> Result<Self, DirectiveError> {
        let tokens = tokenize(line)?;
        parser::parse(&tokens, config)
    }

    /// The receiver of the generated method.
    pub fn receiver(&self) -> &HostArg {
        // parse() rejects directives without host arguments
        &self.host_args[0]
    }

    /// Parameters after the receiver.
    pub fn params(&self) -> &[HostArg] {
        &self.host_args[1..]
    }

    pub fn host_arg(&self, name: &str) -> Option<&HostArg> {
        self.host_args.iter().find(|arg| arg.name == name)
    }

    /// The sequence argument, when the directive is variadic.
    pub fn variadic_arg(&self) -> Option<&HostArg> {
        self.host_args.last().filter(|arg| arg.variadic)
    }
}

/// Strip a trailing variadic marker.
pub(crate) fn strip_variadic(name: &str) -> (&str, bool) {
    match name.strip_suffix(VARIADIC_MARKER) {
        Some(base) => (base, true),
        None => (name, false),
    }
}
