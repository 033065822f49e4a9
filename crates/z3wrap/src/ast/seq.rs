//! Sequence expressions.

use z3wrap_sys::*;

use crate::context::Context;
use crate::keep_alive;
use crate::sort::Sort;

use super::{Ast, Bool, Expr, Kind, KindRegistry, value_type};

value_type!(
    /// A sequence of elements of one sort.
    Sequence
);

pub(super) fn register(registry: &mut KindRegistry) {
    registry.register(Kind::Sequence, |ast| Expr::Sequence(Sequence::from(ast)));
}

impl Context {
    /// The sort of sequences of `element`.
    pub fn sequence_sort(&self, element: &Sort) -> Sort {
        let sort = self.with_lock(|c| {
            let raw = unsafe { Z3_mk_seq_sort(c, element.raw()) };
            Sort::wrap_locked(self, c, raw)
        });
        keep_alive(element);
        sort
    }

    /// The sequence holding only `item`.
    pub fn sequence_unit(&self, item: &Expr) -> Sequence {
        let ast = self.with_lock(|c| {
            let raw = unsafe { Z3_mk_seq_unit(c, item.ast().raw()) };
            Ast::wrap_locked(self, c, raw)
        });
        keep_alive(item);
        Sequence::from(ast)
    }
}

impl Sequence {
    /// Whether `item` occurs in this sequence as a subsequence.
    pub fn contains(&self, item: &Expr) -> Bool {
        let ctx = self.ctx();
        let ast = ctx.with_lock(|c| {
            let raw = unsafe { Z3_mk_seq_contains(c, self.raw(), item.ast().raw()) };
            Ast::wrap_locked(ctx, c, raw)
        });
        keep_alive(self);
        keep_alive(item);
        Bool::from(ast)
    }

    /// This sequence followed by each of `others`.
    pub fn concat(&self, others: &[Sequence]) -> Sequence {
        let args: Vec<Z3_ast> = std::iter::once(self.raw())
            .chain(others.iter().map(Sequence::raw))
            .collect();
        let ctx = self.ctx();
        let ast = ctx.with_lock(|c| {
            let raw = unsafe {
                Z3_mk_seq_concat(c, args.len() as std::os::raw::c_uint, args.as_ptr())
            };
            Ast::wrap_locked(ctx, c, raw)
        });
        keep_alive(self);
        keep_alive(others);
        Sequence::from(ast)
    }
}

// Length returns the number of elements in s.
//wrap:expr length:Int s : Z3_mk_seq_length s

// PrefixOf returns whether s is a prefix of t.
//wrap:expr prefix_of:Bool s t : Z3_mk_seq_prefix s t

// Nth returns the element of s at index.
//wrap:expr nth:Expr s index:Int : Z3_mk_seq_nth s index

mod wrap {
    include!(concat!(env!("OUT_DIR"), "/seq.wrap.rs"));
}
