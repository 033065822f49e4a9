//! Argument binding.
//!
//! Every foreign argument resolves to exactly one [`Binding`], checked in
//! this order:
//!
//! 1. quoted literal: inserted verbatim
//! 2. explicit ctype: `name as ctype`
//! 3. host type is the polymorphic expression type: `name.ast().raw()`
//! 4. anything else: `name.raw()`

use std::str::FromStr;

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};

use crate::config::GenConfig;
use crate::directive::{Directive, ForeignArg, strip_variadic};
use crate::error::DirectiveError;

/// How one foreign argument is produced.
#[derive(Debug, Clone)]
pub enum Binding {
    Literal(TokenStream),
    Unwrap,
    Handle,
    Cast(Box<syn::Type>),
}

#[derive(Debug, Clone)]
pub struct BoundArg {
    /// Host argument this binds, `None` for literals.
    pub host: Option<Ident>,
    pub binding: Binding,
    /// Binds the sequence of a variadic directive.
    pub variadic: bool,
}

impl BoundArg {
    /// The call expression, reading the host value from `var`.
    pub fn expr(&self, var: impl ToTokens) -> TokenStream {
        match &self.binding {
            Binding::Literal(code) => code.clone(),
            Binding::Unwrap => quote! { #var.ast().raw() },
            Binding::Handle => quote! { #var.raw() },
            Binding::Cast(ty) => quote! { #var as #ty },
        }
    }

    /// The call expression reading the host argument itself.
    pub fn host_expr(&self) -> TokenStream {
        self.expr(&self.host)
    }
}

/// A directive with every foreign argument resolved.
#[derive(Debug, Clone)]
pub struct BoundDirective<'d> {
    pub directive: &'d Directive,
    pub args: Vec<BoundArg>,
}

impl BoundDirective<'_> {
    /// Arguments filling fixed slots, i.e. all but the variadic one.
    pub fn fixed_args(&self) -> &[BoundArg] {
        match self.args.last() {
            Some(last) if last.variadic => &self.args[..self.args.len() - 1],
            _ => &self.args,
        }
    }

    pub fn variadic_arg(&self) -> Option<&BoundArg> {
        self.args.last().filter(|arg| arg.variadic)
    }

    /// Whether the call reads host argument `name` through an explicit cast.
    pub fn is_cast(&self, name: &str) -> bool {
        self.args.iter().any(|arg| {
            matches!(arg.binding, Binding::Cast(_)) && arg.host.as_ref().is_some_and(|host| host == name)
        })
    }
}

/// Resolve every foreign argument of `directive`.
pub fn bind<'d>(
    directive: &'d Directive,
    config: &GenConfig,
) -> Result<BoundDirective<'d>, DirectiveError> {
    let args = directive
        .foreign_args
        .iter()
        .map(|arg| bind_arg(directive, arg, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoundDirective { directive, args })
}

fn bind_arg(
    directive: &Directive,
    arg: &ForeignArg,
    config: &GenConfig,
) -> Result<BoundArg, DirectiveError> {
    let (name, ctype) = match arg {
        ForeignArg::Literal(code) => {
            let tokens = TokenStream::from_str(code)
                .map_err(|err| DirectiveError::invalid("literal code", code, err))?;
            return Ok(BoundArg {
                host: None,
                binding: Binding::Literal(tokens),
                variadic: false,
            });
        }
        ForeignArg::Reference { name, ctype } => (name, ctype),
    };

    let (base, _) = strip_variadic(name);
    let host = directive
        .host_arg(base)
        .ok_or_else(|| DirectiveError::UnknownArgument(name.clone()))?;

    let binding = match ctype {
        Some(ctype) => Binding::Cast(Box::new(parse_type("foreign type", ctype)?)),
        None if config.is_expr(&host.ty) => Binding::Unwrap,
        None => Binding::Handle,
    };

    Ok(BoundArg {
        host: Some(ident(&host.name)?),
        binding,
        variadic: host.variadic,
    })
}

/// Parse a directive name as a Rust identifier.
pub(crate) fn ident(name: &str) -> Result<Ident, DirectiveError> {
    syn::parse_str::<Ident>(name).map_err(|err| DirectiveError::invalid("identifier", name, err))
}

/// Parse a directive type as a Rust type.
pub(crate) fn parse_type(what: &'static str, ty: &str) -> Result<syn::Type, DirectiveError> {
    syn::parse_str::<syn::Type>(ty).map_err(|err| DirectiveError::invalid(what, ty, err))
}
