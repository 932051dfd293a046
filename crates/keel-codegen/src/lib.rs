mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Model)]` on `input`.
///
/// Only syntactic problems are reported here. Whether the declaration makes
/// a valid table (one primary key, auto-increment on an integer key, and so
/// on) is checked when the schema is extracted at runtime.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}
