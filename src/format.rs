//! Formatting pass over an assembled unit.

use proc_macro2::TokenStream;

use crate::config::GENERATED_HEADER;
use crate::error::{GenError, GenResult};

/// Parse `tokens` as a Rust file and pretty-print it under the generated
/// header.
pub fn format_unit(tokens: TokenStream) -> GenResult<String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|source| GenError::Format {
        raw: tokens.to_string(),
        source,
    })?;
    Ok(format!("{GENERATED_HEADER}\n\n{}", prettyplease::unparse(&file)))
}
