//! Expressions.
//!
//! [`Ast`] is the reference-counted handle every value type wraps. Concrete
//! types (`Bool`, `Int`, ...) are newtypes over it; [`Expr`] holds any of
//! them and is produced by [`Ast::lift`] from the expression's sort.
//!
//! Most methods on these types are generated from the `//wrap:expr`
//! directives in the submodules.

mod boolean;
mod expr;
mod int;
mod seq;
mod string;

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::trace;
use z3wrap_sys::*;

use crate::context::Context;
use crate::sort::{Sort, SortKind};

pub use self::boolean::Bool;
pub use self::int::Int;
pub use self::seq::Sequence;
pub use self::string::String;

/// A reference-counted Z3 AST.
pub struct Ast {
    ctx: Context,
    raw: Z3_ast,
}

// The raw handle is only used under the context lock.
unsafe impl Send for Ast {}
unsafe impl Sync for Ast {}

impl Ast {
    /// Take a reference to `raw`, the result of a call made through
    /// `raw_ctx`.
    ///
    /// Must run inside the [`Context::with_lock`] scope of that call. Until
    /// the reference is taken the AST is only held by the context, and the
    /// next call on the context may free it.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is null, which Z3 returns when the call failed.
    pub fn wrap_locked(ctx: &Context, raw_ctx: Z3_context, raw: Z3_ast) -> Self {
        if raw.is_null() {
            match ctx.check_error() {
                Err(err) => panic!("Z3 call failed: {err}"),
                Ok(()) => panic!("Z3 returned a null AST"),
            }
        }
        unsafe { Z3_inc_ref(raw_ctx, raw) };
        trace!(?raw, "inc_ref");
        Self {
            ctx: ctx.clone(),
            raw,
        }
    }

    pub fn raw(&self) -> Z3_ast {
        self.raw
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn sort(&self) -> Sort {
        self.ctx.with_lock(|c| {
            let raw = unsafe { Z3_get_sort(c, self.raw) };
            Sort::wrap_locked(&self.ctx, c, raw)
        })
    }

    /// The value type for this expression's sort.
    pub fn kind(&self) -> Kind {
        let sort = self.sort();
        match sort.kind() {
            SortKind::Bool => Kind::Bool,
            SortKind::Int => Kind::Int,
            SortKind::Seq if sort.is_string() => Kind::String,
            SortKind::Seq => Kind::Sequence,
            _ => Kind::Unknown,
        }
    }

    /// Wrap as the value type registered for `kind`, or for the
    /// expression's own sort when `kind` is [`Kind::Unknown`].
    pub fn lift(self, kind: Kind) -> Expr {
        let kind = match kind {
            Kind::Unknown => self.kind(),
            kind => kind,
        };
        match register_kinds().get(&kind) {
            Some(wrap) => wrap(self),
            None => Expr::Other(self),
        }
    }
}

impl Clone for Ast {
    fn clone(&self) -> Self {
        self.ctx.with_lock(|c| Self::wrap_locked(&self.ctx, c, self.raw))
    }
}

impl Drop for Ast {
    fn drop(&mut self) {
        let raw = self.raw;
        self.ctx.with_lock(|c| unsafe { Z3_dec_ref(c, raw) });
        trace!(?raw, "dec_ref");
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.ctx.with_lock(|c| unsafe {
            std::ffi::CStr::from_ptr(Z3_ast_to_string(c, self.raw))
                .to_string_lossy()
                .into_owned()
        });
        f.write_str(&text)
    }
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ast({self})")
    }
}

/// Value types an expression can be lifted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Decide from the expression's sort.
    Unknown,
    Bool,
    Int,
    String,
    Sequence,
}

/// Any expression.
#[derive(Debug, Clone)]
pub enum Expr {
    Bool(Bool),
    Int(Int),
    String(String),
    Sequence(Sequence),
    /// A sort with no dedicated value type.
    Other(Ast),
}

impl Expr {
    pub fn ast(&self) -> &Ast {
        match self {
            Expr::Bool(v) => v.ast(),
            Expr::Int(v) => v.ast(),
            Expr::String(v) => v.ast(),
            Expr::Sequence(v) => v.ast(),
            Expr::Other(ast) => ast,
        }
    }

    pub fn raw(&self) -> Z3_ast {
        self.ast().raw()
    }

    pub fn ctx(&self) -> &Context {
        self.ast().ctx()
    }

    /// The lifted kind; `Unknown` for [`Expr::Other`].
    pub fn kind(&self) -> Kind {
        match self {
            Expr::Bool(_) => Kind::Bool,
            Expr::Int(_) => Kind::Int,
            Expr::String(_) => Kind::String,
            Expr::Sequence(_) => Kind::Sequence,
            Expr::Other(_) => Kind::Unknown,
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Expr::Bool(_) => "Bool",
            Expr::Int(_) => "Int",
            Expr::String(_) => "String",
            Expr::Sequence(_) => "Sequence",
            Expr::Other(_) => "other",
        }
    }
}

impl From<Ast> for Expr {
    fn from(ast: Ast) -> Self {
        ast.lift(Kind::Unknown)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.ast(), f)
    }
}

/// Constructors from a raw [`Ast`] to [`Expr`], by kind.
#[derive(Default)]
pub struct KindRegistry {
    wrappers: FxHashMap<Kind, fn(Ast) -> Expr>,
}

impl KindRegistry {
    pub fn register(&mut self, kind: Kind, wrap: fn(Ast) -> Expr) {
        self.wrappers.insert(kind, wrap);
    }

    pub fn get(&self, kind: &Kind) -> Option<fn(Ast) -> Expr> {
        self.wrappers.get(kind).copied()
    }
}

static KINDS: OnceLock<KindRegistry> = OnceLock::new();

/// Build the kind registry on first use; later calls return it unchanged.
pub fn register_kinds() -> &'static KindRegistry {
    KINDS.get_or_init(|| {
        let mut registry = KindRegistry::default();
        boolean::register(&mut registry);
        int::register(&mut registry);
        string::register(&mut registry);
        seq::register(&mut registry);
        registry
    })
}

/// Newtype over [`Ast`] with the accessors generated code relies on.
macro_rules! value_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(crate::ast::Ast);

        impl $name {
            pub fn ast(&self) -> &crate::ast::Ast {
                &self.0
            }

            pub fn raw(&self) -> z3wrap_sys::Z3_ast {
                self.0.raw()
            }

            pub fn ctx(&self) -> &crate::context::Context {
                self.0.ctx()
            }
        }

        impl From<crate::ast::Ast> for $name {
            fn from(ast: crate::ast::Ast) -> Self {
                Self(ast)
            }
        }

        impl From<$name> for crate::ast::Expr {
            fn from(value: $name) -> Self {
                crate::ast::Expr::$name(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use value_type;
