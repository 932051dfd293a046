/// `#[references(table = "users", column = "Id")]`
#[derive(Debug)]
pub(crate) struct References {
    pub(crate) table: syn::LitStr,
    pub(crate) column: syn::LitStr,
}

impl References {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<References> {
        let mut table = None;
        let mut column = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                if table.is_some() {
                    return Err(meta.error("duplicate `table` argument"));
                }
                table = Some(meta.value()?.parse::<syn::LitStr>()?);
            } else if meta.path.is_ident("column") {
                if column.is_some() {
                    return Err(meta.error("duplicate `column` argument"));
                }
                column = Some(meta.value()?.parse::<syn::LitStr>()?);
            } else {
                return Err(meta.error("expected `table` or `column`"));
            }

            Ok(())
        })?;

        match (table, column) {
            (Some(table), Some(column)) => Ok(References { table, column }),
            (None, _) => Err(syn::Error::new_spanned(
                attr,
                "#[references] requires a `table` argument",
            )),
            (_, None) => Err(syn::Error::new_spanned(
                attr,
                "#[references] requires a `column` argument",
            )),
        }
    }
}
