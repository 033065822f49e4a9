//! Method emission.
//!
//! Turns one bound directive into an `impl` block holding a single wrapper
//! method. The shape is fixed:
//!
//! ```text
//! impl Receiver {
//!     pub fn name(&self, params..) -> Result {
//!         let recv = self;
//!         let ctx = recv.ctx();
//!         let ast = ctx.with_lock(|raw_ctx| {
//!             let cexpr = unsafe { Z3_fn(raw_ctx, args..) };
//!             Ast::wrap_locked(ctx, raw_ctx, cexpr)
//!         });
//!         keep_alive(..);
//!         Result::from(ast)
//!     }
//! }
//! ```
//!
//! The reference on the new AST is taken inside the lock scope of the call.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use crate::binder::{BoundDirective, ident, parse_type};
use crate::config::{GenConfig, strip_ref};
use crate::directive::HostArg;
use crate::error::DirectiveError;

/// Text of a comment line as rustdoc content.
pub fn doc_text(line: &str) -> &str {
    let line = line.trim_end();
    line.strip_prefix("///")
        .or_else(|| line.strip_prefix("//!"))
        .or_else(|| line.strip_prefix("//"))
        .unwrap_or(line)
}

/// Emit the wrapper for `bound`.
///
/// `docs` are the raw comment lines preceding the directive; `label`, when
/// present, is appended as a `Generated from <label>.` doc line.
pub fn emit_method(
    bound: &BoundDirective<'_>,
    docs: &[String],
    label: Option<&str>,
    config: &GenConfig,
) -> Result<TokenStream, DirectiveError> {
    let directive = bound.directive;
    let receiver = directive.receiver();

    let self_ty = parse_type("receiver type", strip_ref(&receiver.ty))?;
    let name = ident(&directive.name)?;
    let result_ty = parse_type("result type", &directive.result)?;
    let recv = ident(&receiver.name)?;

    let params = directive
        .params()
        .iter()
        .map(|arg| param(arg, config.is_primitive(&arg.ty) || bound.is_cast(&arg.name)))
        .collect::<Result<Vec<_>, _>>()?;

    let context = if !config.is_context(&receiver.ty) {
        quote! { let ctx = #recv.ctx(); }
    } else if receiver.name != "ctx" {
        quote! { let ctx = #recv; }
    } else {
        TokenStream::new()
    };

    let foreign_fn = ident(&directive.foreign_fn)?;
    let (setup, call_args, retain) = match bound.variadic_arg() {
        Some(variadic) => {
            let handle_ty = parse_type("handle type", &config.handle_type)?;
            let seq = &variadic.host;
            let fixed = bound.fixed_args();
            let k = Literal::usize_unsuffixed(fixed.len());
            let slots = fixed.iter().enumerate().map(|(j, arg)| {
                let j = Literal::usize_unsuffixed(j);
                let value = arg.host_expr();
                quote! { cargs[#j] = #value; }
            });
            let item = variadic.expr(format_ident!("item"));
            let setup = quote! {
                let mut cargs: Vec<#handle_ty> = vec![::std::ptr::null_mut(); #seq.len() + #k];
                #(#slots)*
                for (i, item) in #seq.iter().enumerate() {
                    cargs[i + #k] = #item;
                }
            };
            let call_args = quote! { cargs.len() as ::std::os::raw::c_uint, cargs.as_ptr() };
            (setup, call_args, quote! { keep_alive(&cargs); })
        }
        None => {
            let args = bound.args.iter().map(|arg| arg.host_expr());
            let retained = directive
                .host_args
                .iter()
                .filter(|arg| {
                    !config.is_primitive(&arg.ty)
                        && !config.is_context(&arg.ty)
                        && !bound.is_cast(&arg.name)
                })
                .map(|arg| ident(&arg.name))
                .collect::<Result<Vec<_>, _>>()?;
            (
                TokenStream::new(),
                quote! { #(#args),* },
                quote! { #(keep_alive(#retained);)* },
            )
        }
    };

    let separator = if call_args.is_empty() {
        TokenStream::new()
    } else {
        quote! { , }
    };

    let result = if config.is_expr(&directive.result) {
        quote! { ast.lift(Kind::Unknown) }
    } else if is_plain_path(&result_ty) {
        quote! { #result_ty::from(ast) }
    } else {
        quote! { <#result_ty>::from(ast) }
    };

    let docs = doc_attrs(docs, label);

    Ok(quote! {
        impl #self_ty {
            #(#docs)*
            pub fn #name(&self #(, #params)*) -> #result_ty {
                let #recv = self;
                #context
                #setup
                let ast = ctx.with_lock(|raw_ctx| {
                    let cexpr = unsafe { #foreign_fn(raw_ctx #separator #call_args) };
                    Ast::wrap_locked(ctx, raw_ctx, cexpr)
                });
                #retain
                #result
            }
        }
    })
}

/// `name: Type` for one parameter after the receiver.
///
/// Primitives and arguments the call casts are taken by value.
fn param(arg: &HostArg, by_value: bool) -> Result<TokenStream, DirectiveError> {
    let name = ident(&arg.name)?;
    let ty = parse_type("argument type", &arg.ty)?;
    Ok(if arg.variadic {
        quote! { #name: &[#ty] }
    } else if by_value || arg.ty.starts_with('&') {
        quote! { #name: #ty }
    } else {
        quote! { #name: &#ty }
    })
}

fn doc_attrs(docs: &[String], label: Option<&str>) -> Vec<TokenStream> {
    let mut attrs: Vec<_> = docs
        .iter()
        .map(|line| {
            let text = doc_text(line);
            quote! { #[doc = #text] }
        })
        .collect();

    if let Some(label) = label {
        if !attrs.is_empty() {
            attrs.push(quote! { #[doc = ""] });
        }
        let text = format!(" Generated from {label}.");
        attrs.push(quote! { #[doc = #text] });
    }
    attrs
}

/// A path like `Bool` or `ast::Bool` that can be called as `T::from`.
fn is_plain_path(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => {
            path.qself.is_none()
                && path
                    .path
                    .segments
                    .iter()
                    .all(|segment| segment.arguments.is_none())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::bind;
    use crate::directive::Directive;

    fn squash(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn emit(line: &str, default: &str, docs: &[&str], label: Option<&str>) -> String {
        let config = GenConfig::new(default);
        let directive = Directive::parse(line, &config).unwrap();
        let bound = bind(&directive, &config).unwrap();
        let docs: Vec<String> = docs.iter().map(|d| d.to_string()).collect();
        let tokens = emit_method(&bound, &docs, label, &config).unwrap();
        squash(&tokens.to_string())
    }

    #[test]
    fn test_polymorphic_eq() {
        let out = emit("//wrap:expr Eq:Bool Z3_mk_eq l r", "Expr", &[], None);
        let expected = squash(
            r#"impl Expr {
                pub fn Eq(&self, r: &Expr) -> Bool {
                    let l = self;
                    let ctx = l.ctx();
                    let ast = ctx.with_lock(|raw_ctx| {
                        let cexpr = unsafe { Z3_mk_eq(raw_ctx, l.ast().raw(), r.ast().raw()) };
                        Ast::wrap_locked(ctx, raw_ctx, cexpr)
                    });
                    keep_alive(l);
                    keep_alive(r);
                    Bool::from(ast)
                }
            }"#,
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_variadic_lowering() {
        let out = emit(
            "//wrap:expr concat Z3_mk_seq_concat x other...",
            "String",
            &[],
            None,
        );
        let expected = squash(
            r#"impl String {
                pub fn concat(&self, other: &[String]) -> String {
                    let x = self;
                    let ctx = x.ctx();
                    let mut cargs: Vec<Z3_ast> = vec![::std::ptr::null_mut(); other.len() + 1];
                    cargs[0] = x.raw();
                    for (i, item) in other.iter().enumerate() {
                        cargs[i + 1] = item.raw();
                    }
                    let ast = ctx.with_lock(|raw_ctx| {
                        let cexpr = unsafe {
                            Z3_mk_seq_concat(raw_ctx, cargs.len() as ::std::os::raw::c_uint, cargs.as_ptr())
                        };
                        Ast::wrap_locked(ctx, raw_ctx, cexpr)
                    });
                    keep_alive(&cargs);
                    String::from(ast)
                }
            }"#,
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_context_receiver_without_arguments() {
        let out = emit("//wrap:expr bool_true:Bool ctx:Context : Z3_mk_true", "Bool", &[], None);
        assert!(out.starts_with("implContext{pubfnbool_true(&self)->Bool{letctx=self;letast=ctx.with_lock"));
        assert!(out.contains("letcexpr=unsafe{Z3_mk_true(raw_ctx)};Ast::wrap_locked(ctx,raw_ctx,cexpr)"));
        assert!(!out.contains("keep_alive"));
    }

    #[test]
    fn test_context_receiver_is_aliased() {
        let out = emit(
            "//wrap:expr distinct:Bool c:Context vals...:Expr : Z3_mk_distinct vals...",
            "Expr",
            &[],
            None,
        );
        assert!(out.contains("letc=self;letctx=c;"));
        assert!(out.contains("vals:&[Expr]"));
        assert!(out.contains("cargs[i+0]=item.ast().raw();"));
    }

    #[test]
    fn test_primitives_by_value_and_cast() {
        let out = emit(
            r#"//wrap:expr int_value:Int ctx:Context v:i64 : Z3_mk_int64 v:i64 "ctx.int_sort().raw()""#,
            "Int",
            &[],
            None,
        );
        assert!(out.contains("pubfnint_value(&self,v:i64)->Int"));
        assert!(out.contains("Z3_mk_int64(raw_ctx,vasi64,ctx.int_sort().raw())"));
        assert!(!out.contains("keep_alive"));
    }

    #[test]
    fn test_cast_argument_taken_by_value() {
        let out = emit("//wrap:expr shl Z3_mk_foo x n:c_uint", "Int", &[], None);
        assert!(out.contains("pubfnshl(&self,n:c_uint)->Int"), "{out}");
        assert!(out.contains("Z3_mk_foo(raw_ctx,x.raw(),nasc_uint)"));
        assert!(out.contains("keep_alive(x);"));
        assert!(!out.contains("keep_alive(n)"));
    }

    #[test]
    fn test_reference_taken_inside_lock_scope() {
        let out = emit("//wrap:expr neg Z3_mk_unary_minus x", "Int", &[], None);
        assert!(out.contains(
            "letast=ctx.with_lock(|raw_ctx|{letcexpr=unsafe{Z3_mk_unary_minus(raw_ctx,x.raw())};\
             Ast::wrap_locked(ctx,raw_ctx,cexpr)});keep_alive(x);Int::from(ast)"
        ));
    }

    #[test]
    fn test_reference_types_kept_as_written() {
        let out = emit("//wrap:expr f x s:&str : Z3_f x", "Int", &[], None);
        assert!(out.contains("s:&str"));
        assert!(out.contains("keep_alive(x);keep_alive(s);"));
    }

    #[test]
    fn test_expr_result_is_lifted() {
        let out = emit("//wrap:expr select:Expr a i : Z3_mk_select a i", "Expr", &[], None);
        assert!(out.ends_with("ast.lift(Kind::Unknown)}}"));
    }

    #[test]
    fn test_generic_result_uses_qualified_from() {
        let out = emit("//wrap:expr unit:Seq<Int> x : Z3_mk_seq_unit x", "Int", &[], None);
        assert!(out.contains("<Seq<Int>>::from(ast)"));
    }

    #[test]
    fn test_docs_and_provenance() {
        let out = emit(
            "//wrap:expr neg Z3_mk_unary_minus x",
            "Int",
            &["// Neg returns -x.", "/// Second line."],
            Some("int.rs:12"),
        );
        let expected = squash(
            r#"impl Int {
                #[doc = " Neg returns -x."]
                #[doc = " Second line."]
                #[doc = ""]
                #[doc = " Generated from int.rs:12."]
                pub fn neg"#,
        );
        assert!(out.starts_with(&expected), "{out}");
    }

    #[test]
    fn test_provenance_without_docs_has_no_blank_line() {
        let out = emit("//wrap:expr neg Z3_mk_unary_minus x", "Int", &[], Some("int.rs:3"));
        assert!(out.starts_with(&squash(r#"impl Int { #[doc = " Generated from int.rs:3."] pub fn"#)));
    }

    #[test]
    fn test_doc_text() {
        assert_eq!(doc_text("// hello  "), " hello");
        assert_eq!(doc_text("/// hello"), " hello");
        assert_eq!(doc_text("//"), "");
        assert_eq!(doc_text("//! inner"), " inner");
        assert_eq!(doc_text("//wrap:expr x"), "wrap:expr x");
    }

    #[test]
    fn test_invalid_result_type() {
        let config = GenConfig::new("Int");
        let directive = Directive::parse("//wrap:expr f:1x Z3_f x", &config).unwrap();
        let bound = bind(&directive, &config).unwrap();
        let err = emit_method(&bound, &[], None, &config).unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidRust { what: "result type", .. }));
    }
}
