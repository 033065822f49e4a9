//! A minimal solver: assert and check.

use tracing::debug;
use z3wrap_sys::*;

use crate::ast::Bool;
use crate::context::Context;
use crate::keep_alive;

/// Outcome of [`Solver::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatResult {
    Sat,
    Unsat,
    Unknown,
}

pub struct Solver {
    ctx: Context,
    raw: Z3_solver,
}

impl Solver {
    pub(crate) fn new(ctx: &Context) -> Self {
        let raw = ctx.with_lock(|c| unsafe {
            let raw = Z3_mk_solver(c);
            Z3_solver_inc_ref(c, raw);
            raw
        });
        Self {
            ctx: ctx.clone(),
            raw,
        }
    }

    pub fn assert(&self, constraint: &Bool) {
        self.ctx
            .with_lock(|c| unsafe { Z3_solver_assert(c, self.raw, constraint.raw()) });
        keep_alive(constraint);
    }

    pub fn check(&self) -> SatResult {
        let result = self.ctx.with_lock(|c| unsafe { Z3_solver_check(c, self.raw) });
        let result = match result {
            Z3_L_TRUE => SatResult::Sat,
            Z3_L_FALSE => SatResult::Unsat,
            _ => SatResult::Unknown,
        };
        debug!(?result, "solver check");
        result
    }
}

impl Drop for Solver {
    fn drop(&mut self) {
        let raw = self.raw;
        self.ctx
            .with_lock(|c| unsafe { Z3_solver_dec_ref(c, raw) });
    }
}
