//! String expressions.
//!
//! Z3 strings are sequences of characters; the sort is told apart from
//! other sequences with `Z3_is_string_sort`.

use std::ffi::CString;

use z3wrap_sys::*;

use crate::context::Context;
use crate::error::{Z3Error, Z3Result};
use crate::sort::Sort;

use super::{Ast, Expr, Kind, KindRegistry, value_type};

value_type!(
    /// A string expression.
    String
);

pub(super) fn register(registry: &mut KindRegistry) {
    registry.register(Kind::String, |ast| Expr::String(String::from(ast)));
}

impl Context {
    pub fn string_sort(&self) -> Sort {
        self.with_lock(|c| Sort::wrap_locked(self, c, unsafe { Z3_mk_string_sort(c) }))
    }

    /// A string constant named `name`.
    pub fn string_const(&self, name: &str) -> Z3Result<String> {
        match self.constant(name, &self.string_sort())? {
            Expr::String(value) => Ok(value),
            other => Err(Z3Error::UnexpectedKind {
                expected: "String",
                found: other.kind_name(),
            }),
        }
    }

    /// The string literal `value`.
    pub fn string_value(&self, value: &str) -> Z3Result<String> {
        let value = CString::new(value)?;
        let ast = self.with_lock(|c| {
            let raw = unsafe { Z3_mk_string(c, value.as_ptr()) };
            Ast::wrap_locked(self, c, raw)
        });
        Ok(String::from(ast))
    }
}

// Concat returns the concatenation of x and other.
//wrap:expr concat Z3_mk_seq_concat x other...

// Length returns the number of characters in x.
//wrap:expr length:Int x : Z3_mk_seq_length x

// PrefixOf returns whether x is a prefix of s.
//wrap:expr prefix_of:Bool x s : Z3_mk_seq_prefix x s

// SuffixOf returns whether x is a suffix of s.
//wrap:expr suffix_of:Bool x s : Z3_mk_seq_suffix x s

// Contains returns whether sub occurs in s.
//wrap:expr contains:Bool s sub : Z3_mk_seq_contains s sub

// At returns the one-character string at index, or the empty string when
// index is out of bounds.
//wrap:expr at s index:Int : Z3_mk_seq_at s index

mod wrap {
    include!(concat!(env!("OUT_DIR"), "/string.wrap.rs"));
}
