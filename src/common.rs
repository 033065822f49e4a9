//! Methods every generated unit carries for its default type.

use proc_macro2::TokenStream;
use quote::quote;

use crate::binder::{bind, parse_type};
use crate::config::GenConfig;
use crate::directive::Directive;
use crate::emit::emit_method;
use crate::error::DirectiveError;

const EQ_DOC: &str = "// eq returns an expression that is true if l and r are equal.";

/// `eq` and `ne` for `config.default_type`.
pub fn emit_common(config: &GenConfig) -> Result<TokenStream, DirectiveError> {
    let line = format!("//wrap:expr eq:{} Z3_mk_eq l r", config.bool_type);
    let directive = Directive::parse(&line, config)?;
    let eq = emit_method(&bind(&directive, config)?, &[EQ_DOC.to_string()], None, config)?;

    let ty = parse_type("default type", &config.default_type)?;
    let bool_ty = parse_type("bool type", &config.bool_type)?;
    let expr_ty = parse_type("expression type", &config.expr_type)?;

    Ok(quote! {
        #eq

        impl #ty {
            /// ne returns an expression that is true if l and r are not equal.
            pub fn ne(&self, r: &#ty) -> #bool_ty {
                self.ctx().distinct(&[#expr_ty::from(self.clone()), #expr_ty::from(r.clone())])
            }
        }
    })
}
