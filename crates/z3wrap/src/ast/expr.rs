//! Methods on [`Expr`](super::Expr) and context helpers that accept any
//! expression.

// Distinct returns an expression that is true if no two of vals are equal.
//wrap:expr distinct:Bool ctx:Context vals...:Expr : Z3_mk_distinct vals...

// Simplify returns a simplified form of x, lifted to its value type.
//wrap:expr simplify:Expr Z3_simplify x

mod wrap {
    include!(concat!(env!("OUT_DIR"), "/expr.wrap.rs"));
}
