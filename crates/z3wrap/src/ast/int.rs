//! Integer expressions.

use crate::context::Context;
use crate::error::{Z3Error, Z3Result};

use super::{Expr, Kind, KindRegistry, value_type};

value_type!(
    /// An unbounded integer expression.
    Int
);

pub(super) fn register(registry: &mut KindRegistry) {
    registry.register(Kind::Int, |ast| Expr::Int(Int::from(ast)));
}

impl Context {
    /// An integer constant named `name`.
    pub fn int_const(&self, name: &str) -> Z3Result<Int> {
        match self.constant(name, &self.int_sort())? {
            Expr::Int(value) => Ok(value),
            other => Err(Z3Error::UnexpectedKind {
                expected: "Int",
                found: other.kind_name(),
            }),
        }
    }
}

// IntValue returns the integer literal v.
//wrap:expr int_value:Int ctx:Context v:i64 : Z3_mk_int64 v:i64 "ctx.int_sort().raw()"

// Add returns the sum of x and others.
//wrap:expr add Z3_mk_add x others...

// Mul returns the product of x and others.
//wrap:expr mul Z3_mk_mul x others...

// Sub returns x minus each of others.
//wrap:expr sub Z3_mk_sub x others...

// Neg returns -x.
//wrap:expr neg Z3_mk_unary_minus x

// Div returns the integer quotient l / r.
//wrap:expr div Z3_mk_div l r

// Rem returns the remainder of l / r, with the sign of r.
//wrap:expr rem Z3_mk_rem l r

// Modulo returns l mod r.
//wrap:expr modulo Z3_mk_mod l r

// Lt returns l < r.
//wrap:expr lt:Bool Z3_mk_lt l r

// Le returns l <= r.
//wrap:expr le:Bool Z3_mk_le l r

// Gt returns l > r.
//wrap:expr gt:Bool Z3_mk_gt l r

// Ge returns l >= r.
//wrap:expr ge:Bool Z3_mk_ge l r

mod wrap {
    include!(concat!(env!("OUT_DIR"), "/int.wrap.rs"));
}
