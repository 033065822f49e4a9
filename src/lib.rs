//! Generator for memory-safe Z3 wrapper methods.
//!
//! Declaration files carry `//wrap:expr` directives in ordinary comments.
//! Each directive names a method, its host-side arguments and the Z3 C
//! function it forwards to:
//!
//! ```text
//! // Lt returns l < r.
//! //wrap:expr lt:Bool l r : Z3_mk_lt l r
//! ```
//!
//! The [`Generator`] scans those files, emits one wrapper per directive plus
//! the common `eq`/`ne` methods, and writes a single formatted unit.
//!
//! # Example
//!
//! ```
//! use z3_genwrap::{GenConfig, Generator, SourceFile};
//!
//! let source = SourceFile::new("int.rs", "//wrap:expr neg Z3_mk_unary_minus x\n");
//! let code = Generator::new(GenConfig::new("Int")).generate(&[source]).unwrap();
//! assert!(code.contains("pub fn neg(&self) -> Int"));
//! ```

pub mod binder;
pub mod common;
pub mod config;
pub mod directive;
pub mod driver;
pub mod emit;
pub mod error;
pub mod format;

use std::sync::Once;

pub use binder::{Binding, BoundArg, BoundDirective, bind};
pub use common::emit_common;
pub use config::{DIRECTIVE_KEYWORD, GENERATED_HEADER, GenConfig};
pub use directive::{Directive, ForeignArg, HostArg};
pub use driver::{Generator, SourceFile};
pub use emit::emit_method;
pub use error::{DirectiveError, GenError, GenResult};
pub use format::format_unit;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
