//! Sorts: the types of Z3 expressions.

use std::fmt;

use num_enum::FromPrimitive;
use z3wrap_sys::*;

use crate::context::Context;

/// `Z3_sort_kind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u32)]
pub enum SortKind {
    Uninterpreted = 0,
    Bool = 1,
    Int = 2,
    Real = 3,
    BitVector = 4,
    Array = 5,
    Datatype = 6,
    Relation = 7,
    FiniteDomain = 8,
    FloatingPoint = 9,
    RoundingMode = 10,
    Seq = 11,
    Re = 12,
    Char = 13,
    TypeVar = 14,
    #[num_enum(default)]
    Unknown = 1000,
}

/// A reference-counted sort handle.
pub struct Sort {
    ctx: Context,
    raw: Z3_sort,
}

impl Sort {
    /// Take a reference to `raw` inside the lock scope that produced it.
    pub(crate) fn wrap_locked(ctx: &Context, raw_ctx: Z3_context, raw: Z3_sort) -> Self {
        unsafe { Z3_inc_ref(raw_ctx, Z3_sort_to_ast(raw_ctx, raw)) };
        Self {
            ctx: ctx.clone(),
            raw,
        }
    }

    pub fn raw(&self) -> Z3_sort {
        self.raw
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn kind(&self) -> SortKind {
        let kind = self
            .ctx
            .with_lock(|c| unsafe { Z3_get_sort_kind(c, self.raw) });
        SortKind::from(kind as u32)
    }

    /// Sequence sorts of characters are strings.
    pub fn is_string(&self) -> bool {
        self.ctx
            .with_lock(|c| unsafe { Z3_is_string_sort(c, self.raw) })
    }
}

impl Clone for Sort {
    fn clone(&self) -> Self {
        self.ctx.with_lock(|c| Self::wrap_locked(&self.ctx, c, self.raw))
    }
}

impl Drop for Sort {
    fn drop(&mut self) {
        let raw = self.raw;
        self.ctx
            .with_lock(|c| unsafe { Z3_dec_ref(c, Z3_sort_to_ast(c, raw)) });
    }
}

impl fmt::Debug for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sort({self})")
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.ctx.with_lock(|c| unsafe {
            std::ffi::CStr::from_ptr(Z3_sort_to_string(c, self.raw))
                .to_string_lossy()
                .into_owned()
        });
        f.write_str(&text)
    }
}
