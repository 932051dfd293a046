use super::Expand;
use crate::schema::{Column, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let keel = &self.keel;
        let name = &self.model.name;
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        let table_name = match &self.model.table {
            Some(table) => quote!(Some(#table.to_string())),
            None => quote!(None),
        };

        quote! {
            fn schema() -> #keel::schema::app::Model {
                #[allow(unused_imports)]
                use #keel::schema::{
                    app::{Field, FieldAttrs, Model, Type},
                    db,
                };

                Model {
                    name: #name.to_string(),
                    table_name: #table_name,
                    fields: vec![#( #fields ),*],
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let keel = &self.keel;
        let name = &field.name;
        let attrs = &field.attrs;
        let rust_ty = &field.ty;

        // Skipped fields never become columns, so their type does not need a
        // column mapping.
        let (ty, nullable) = if attrs.skip {
            (quote!(Type::Unmapped), quote!(false))
        } else {
            (
                quote!(<#rust_ty as #keel::Primitive>::TYPE),
                quote!(<#rust_ty as #keel::Primitive>::NULLABLE),
            )
        };

        let column_name = match &attrs.column {
            Some(Column {
                name: Some(name), ..
            }) => quote!(Some(#name.to_string())),
            _ => quote!(None),
        };

        let storage_ty = match &attrs.column {
            Some(Column { ty: Some(ty), .. }) => quote!(Some(#ty)),
            _ => quote!(None),
        };

        let foreign_key = match &attrs.references {
            Some(references) => {
                let table = &references.table;
                let column = &references.column;
                quote!(Some(db::ForeignKey {
                    table: #table.to_string(),
                    column: #column.to_string(),
                }))
            }
            None => quote!(None),
        };

        let nullable_attr = attrs.nullable;
        let unique = attrs.unique;
        let primary_key = attrs.key;
        let auto_increment = attrs.auto;
        let unsigned = attrs.unsigned;
        let skip = attrs.skip;

        quote! {
            Field {
                name: #name.to_string(),
                ty: #ty,
                nullable: #nullable,
                attrs: FieldAttrs {
                    column_name: #column_name,
                    storage_ty: #storage_ty,
                    nullable: #nullable_attr,
                    unique: #unique,
                    primary_key: #primary_key,
                    auto_increment: #auto_increment,
                    unsigned: #unsigned,
                    foreign_key: #foreign_key,
                    skip: #skip,
                },
            }
        }
    }
}
