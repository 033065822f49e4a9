//! Generator configuration.
//!
//! Everything the generator needs to know about the host object model lives
//! here, so the emitter never hard-codes a type name. The defaults describe
//! the `z3wrap` crate.

/// The comment keyword that introduces a directive.
pub const DIRECTIVE_KEYWORD: &str = "//wrap:expr";

/// Header written above every generated unit.
pub const GENERATED_HEADER: &str = "// Generated by genwrap. DO NOT EDIT.";

/// Host types passed by value and never retained.
const PRIMITIVES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32",
    "u64", "u128", "usize",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Type used for results and arguments that carry no `:Type`.
    pub default_type: String,
    /// The polymorphic expression type, resolved by kind at runtime.
    pub expr_type: String,
    /// The per-session context type.
    pub context_type: String,
    /// Result type of the common `ne` method.
    pub bool_type: String,
    /// Raw foreign handle type used for variadic argument arrays.
    pub handle_type: String,
    /// Path the generated code imports the runtime prelude from.
    pub runtime_path: String,
    /// Path of the raw bindings crate.
    pub sys_path: String,
    /// Native library named in the link directive.
    pub link_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            default_type: "Expr".to_string(),
            expr_type: "Expr".to_string(),
            context_type: "Context".to_string(),
            bool_type: "Bool".to_string(),
            handle_type: "Z3_ast".to_string(),
            runtime_path: "crate".to_string(),
            sys_path: "z3wrap_sys".to_string(),
            link_name: "z3".to_string(),
        }
    }
}

impl GenConfig {
    /// Configuration for the `z3wrap` object model with the given default type.
    pub fn new(default_type: impl Into<String>) -> Self {
        Self {
            default_type: default_type.into(),
            ..Self::default()
        }
    }

    pub fn with_expr_type(mut self, ty: impl Into<String>) -> Self {
        self.expr_type = ty.into();
        self
    }

    pub fn with_context_type(mut self, ty: impl Into<String>) -> Self {
        self.context_type = ty.into();
        self
    }

    pub fn with_bool_type(mut self, ty: impl Into<String>) -> Self {
        self.bool_type = ty.into();
        self
    }

    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    pub fn with_sys_path(mut self, path: impl Into<String>) -> Self {
        self.sys_path = path.into();
        self
    }

    pub fn with_link_name(mut self, name: impl Into<String>) -> Self {
        self.link_name = name.into();
        self
    }

    /// Whether `ty` is the polymorphic expression type.
    pub fn is_expr(&self, ty: &str) -> bool {
        strip_ref(ty) == self.expr_type
    }

    /// Whether `ty` denotes the execution context.
    pub fn is_context(&self, ty: &str) -> bool {
        strip_ref(ty) == self.context_type
    }

    /// Whether `ty` is a plain value type that needs no retention.
    pub fn is_primitive(&self, ty: &str) -> bool {
        PRIMITIVES.contains(&ty)
    }
}

pub(crate) fn strip_ref(ty: &str) -> &str {
    ty.strip_prefix('&').map(str::trim_start).unwrap_or(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_z3wrap() {
        let config = GenConfig::new("Bool");
        assert_eq!(config.default_type, "Bool");
        assert_eq!(config.expr_type, "Expr");
        assert_eq!(config.context_type, "Context");
        assert_eq!(config.sys_path, "z3wrap_sys");
    }

    #[test]
    fn test_type_classification() {
        let config = GenConfig::default();
        assert!(config.is_context("Context"));
        assert!(config.is_context("&Context"));
        assert!(config.is_expr("Expr"));
        assert!(!config.is_expr("Bool"));
        assert!(config.is_primitive("i64"));
        assert!(!config.is_primitive("Int"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GenConfig::new("Int")
            .with_runtime_path("z3wrap")
            .with_context_type("Session")
            .with_link_name("z3-4.12");
        assert_eq!(config.runtime_path, "z3wrap");
        assert!(config.is_context("Session"));
        assert!(!config.is_context("Context"));
        assert_eq!(config.link_name, "z3-4.12");
    }
}
