use super::{Column, ErrorSet, References};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field name, without any `r#` prefix
    pub(crate) name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set by `#[key]`
    pub(crate) key: bool,

    /// Set by `#[auto]`
    pub(crate) auto: bool,

    /// Set by `#[unique]`
    pub(crate) unique: bool,

    /// Set by `#[unsigned]`
    pub(crate) unsigned: bool,

    /// Set by `#[nullable]`
    pub(crate) nullable: bool,

    /// Set by `#[skip]`
    pub(crate) skip: bool,

    /// Optional database column name and / or type
    pub(crate) column: Option<Column>,

    /// Referenced table and column
    pub(crate) references: Option<References>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            let path = attr.path();

            let flag = if path.is_ident("key") {
                Some(&mut attrs.key)
            } else if path.is_ident("auto") {
                Some(&mut attrs.auto)
            } else if path.is_ident("unique") {
                Some(&mut attrs.unique)
            } else if path.is_ident("unsigned") {
                Some(&mut attrs.unsigned)
            } else if path.is_ident("nullable") {
                Some(&mut attrs.nullable)
            } else if path.is_ident("skip") {
                Some(&mut attrs.skip)
            } else {
                None
            };

            if let Some(flag) = flag {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if *flag {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        format!("duplicate #[{}] attribute", path.segments[0].ident),
                    ));
                } else {
                    *flag = true;
                }
            } else if path.is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if path.is_ident("references") {
                if attrs.references.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[references] attribute",
                    ));
                } else {
                    match References::from_ast(attr) {
                        Ok(references) => attrs.references = Some(references),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: ident.unraw().to_string(),
            attrs,
            ty: field.ty.clone(),
        })
    }
}
