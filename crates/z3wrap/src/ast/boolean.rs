//! Boolean expressions.

use crate::context::Context;
use crate::error::{Z3Error, Z3Result};

use super::{Expr, Kind, KindRegistry, value_type};

value_type!(
    /// A boolean expression.
    Bool
);

pub(super) fn register(registry: &mut KindRegistry) {
    registry.register(Kind::Bool, |ast| Expr::Bool(Bool::from(ast)));
}

impl Context {
    /// The literal `true` or `false`.
    pub fn from_bool(&self, value: bool) -> Bool {
        if value {
            self.bool_true()
        } else {
            self.bool_false()
        }
    }

    /// A boolean constant named `name`.
    pub fn bool_const(&self, name: &str) -> Z3Result<Bool> {
        match self.constant(name, &self.bool_sort())? {
            Expr::Bool(value) => Ok(value),
            other => Err(Z3Error::UnexpectedKind {
                expected: "Bool",
                found: other.kind_name(),
            }),
        }
    }
}

// BoolTrue returns the boolean true.
//wrap:expr bool_true:Bool ctx:Context : Z3_mk_true

// BoolFalse returns the boolean false.
//wrap:expr bool_false:Bool ctx:Context : Z3_mk_false

// Not returns the negation of x.
//wrap:expr not Z3_mk_not x

// And returns the conjunction of x and others.
//wrap:expr and Z3_mk_and x others...

// Or returns the disjunction of x and others.
//wrap:expr or Z3_mk_or x others...

// Xor returns l xor r.
//wrap:expr xor Z3_mk_xor l r

// Implies returns l implies r.
//wrap:expr implies Z3_mk_implies l r

// Iff returns l if and only if r.
//wrap:expr iff Z3_mk_iff l r

// Ite returns cons if cond is true and alt otherwise. cons and alt must
// have the same sort.
//wrap:expr ite:Expr cond cons:Expr alt:Expr : Z3_mk_ite cond cons alt

mod wrap {
    include!(concat!(env!("OUT_DIR"), "/boolean.wrap.rs"));
}
