//! The Z3 context and its lock.
//!
//! Every call into Z3 goes through [`Context::with_lock`]. The lock is
//! reentrant so that reference counting and nested helper calls made while
//! a call is in flight do not deadlock.

use std::ffi::{CStr, CString};
use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tracing::debug;
use z3wrap_sys::*;

use crate::ast::{Ast, Expr, Kind, register_kinds};
use crate::config::Config;
use crate::error::{Z3Error, Z3Result};
use crate::solver::Solver;
use crate::sort::Sort;

struct ContextInner {
    raw: Z3_context,
    lock: ReentrantMutex<()>,
}

// Z3_context is only touched while `lock` is held.
unsafe impl Send for ContextInner {}
unsafe impl Sync for ContextInner {}

impl Drop for ContextInner {
    fn drop(&mut self) {
        debug!("deleting Z3 context");
        unsafe { Z3_del_context(self.raw) };
    }
}

/// A Z3 session. Cheap to clone; the last clone deletes the context.
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

impl Context {
    pub fn new(config: &Config) -> Self {
        register_kinds();

        let raw = unsafe {
            let raw = Z3_mk_context_rc(config.raw());
            // Record errors instead of aborting; `check_error` reads them.
            Z3_set_error_handler(raw, None);
            raw
        };
        debug!("created Z3 context");

        Self {
            inner: Arc::new(ContextInner {
                raw,
                lock: ReentrantMutex::new(()),
            }),
        }
    }

    pub fn raw(&self) -> Z3_context {
        self.inner.raw
    }

    /// Run `f` with exclusive access to the raw context.
    pub fn with_lock<R>(&self, f: impl FnOnce(Z3_context) -> R) -> R {
        let _guard = self.inner.lock.lock();
        f(self.inner.raw)
    }

    /// The error left by the last call, if any.
    pub fn check_error(&self) -> Z3Result<()> {
        self.with_lock(|c| unsafe {
            let code = Z3_get_error_code(c);
            if code == Z3_OK {
                return Ok(());
            }
            let message = CStr::from_ptr(Z3_get_error_msg(c, code)).to_str()?;
            Err(Z3Error::Solver {
                code: code as u32,
                message: message.to_string(),
            })
        })
    }

    pub fn bool_sort(&self) -> Sort {
        self.with_lock(|c| Sort::wrap_locked(self, c, unsafe { Z3_mk_bool_sort(c) }))
    }

    pub fn int_sort(&self) -> Sort {
        self.with_lock(|c| Sort::wrap_locked(self, c, unsafe { Z3_mk_int_sort(c) }))
    }

    /// A fresh constant named `name`, typed by its sort.
    pub fn constant(&self, name: &str, sort: &Sort) -> Z3Result<Expr> {
        let name = CString::new(name)?;
        let ast = self.with_lock(|c| -> Z3Result<Ast> {
            let raw = unsafe {
                let symbol = Z3_mk_string_symbol(c, name.as_ptr());
                Z3_mk_const(c, symbol, sort.raw())
            };
            if raw.is_null() {
                self.check_error()?;
                return Err(Z3Error::NullHandle("constant"));
            }
            Ok(Ast::wrap_locked(self, c, raw))
        })?;
        Ok(ast.lift(Kind::Unknown))
    }

    pub fn solver(&self) -> Solver {
        Solver::new(self)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(&Config::new())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("raw", &self.inner.raw).finish()
    }
}
