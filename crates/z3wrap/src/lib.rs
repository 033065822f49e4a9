//! Safe wrappers around the Z3 SMT solver.
//!
//! ```no_run
//! use z3wrap::{Context, SatResult};
//!
//! let ctx = Context::default();
//! let x = ctx.int_const("x").unwrap();
//! let one = ctx.int_value(1);
//! let solver = ctx.solver();
//! solver.assert(&x.gt(&one));
//! assert_eq!(solver.check(), SatResult::Sat);
//! ```
//!
//! Every call into Z3 is serialized per [`Context`]. Values hold a Z3
//! reference count and a handle to their context, so they stay valid for
//! as long as they are reachable.

pub mod ast;
pub mod config;
pub mod context;
pub mod error;
pub mod solver;
pub mod sort;

pub use ast::{Ast, Bool, Expr, Int, Kind, KindRegistry, Sequence, String, register_kinds};
pub use config::Config;
pub use context::Context;
pub use error::{Z3Error, Z3Result};
pub use solver::{SatResult, Solver};
pub use sort::{Sort, SortKind};

/// Names the generated wrappers rely on.
pub mod prelude {
    pub use crate::ast::{Ast, Bool, Expr, Int, Kind, Sequence, String};
    pub use crate::context::Context;
    pub use crate::keep_alive;
    pub use std::os::raw::{c_int, c_uint};
}

/// Keep `value` reachable up to this point.
///
/// Arguments of a foreign call are released only after the call returns.
#[inline]
pub fn keep_alive<T: ?Sized>(value: &T) {
    std::hint::black_box(value);
}
