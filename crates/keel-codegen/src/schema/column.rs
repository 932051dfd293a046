use quote::quote;
use syn::parenthesized;

#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) ty: Option<ColumnType>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            ty: None,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(type = bigint)]
        // #[column("name", type = varchar(64))]
        // #[column(type = "DECIMAL(10, 2)", "name")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type]) {
                if result.ty.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column type"));
                }
                let _type_token: syn::Token![type] = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.ty = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

mod kw {
    syn::custom_keyword!(boolean);
    syn::custom_keyword!(tinyint);
    syn::custom_keyword!(smallint);
    syn::custom_keyword!(int);
    syn::custom_keyword!(bigint);
    syn::custom_keyword!(double);
    syn::custom_keyword!(text);
    syn::custom_keyword!(varchar);
    syn::custom_keyword!(blob);
    syn::custom_keyword!(date);
    syn::custom_keyword!(datetime);
}

#[derive(Debug)]
pub(crate) enum ColumnType {
    Boolean,
    Integer(u8),
    Double,
    Text,
    VarChar(u64),
    Blob,
    Date,
    DateTime,
    Custom(syn::LitStr),
}

impl syn::parse::Parse for ColumnType {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(syn::LitStr) {
            Ok(Self::Custom(input.parse()?))
        } else if lookahead.peek(kw::boolean) {
            let _kw: kw::boolean = input.parse()?;
            Ok(Self::Boolean)
        } else if lookahead.peek(kw::tinyint) {
            let _kw: kw::tinyint = input.parse()?;
            Ok(Self::Integer(1))
        } else if lookahead.peek(kw::smallint) {
            let _kw: kw::smallint = input.parse()?;
            Ok(Self::Integer(2))
        } else if lookahead.peek(kw::int) {
            let _kw: kw::int = input.parse()?;
            Ok(Self::Integer(4))
        } else if lookahead.peek(kw::bigint) {
            let _kw: kw::bigint = input.parse()?;
            Ok(Self::Integer(8))
        } else if lookahead.peek(kw::double) {
            let _kw: kw::double = input.parse()?;
            Ok(Self::Double)
        } else if lookahead.peek(kw::text) {
            let _kw: kw::text = input.parse()?;
            Ok(Self::Text)
        } else if lookahead.peek(kw::varchar) {
            let _kw: kw::varchar = input.parse()?;
            let content;
            parenthesized!(content in input);
            let lit: syn::LitInt = content.parse()?;
            Ok(Self::VarChar(lit.base10_parse()?))
        } else if lookahead.peek(kw::blob) {
            let _kw: kw::blob = input.parse()?;
            Ok(Self::Blob)
        } else if lookahead.peek(kw::datetime) {
            let _kw: kw::datetime = input.parse()?;
            Ok(Self::DateTime)
        } else if lookahead.peek(kw::date) {
            let _kw: kw::date = input.parse()?;
            Ok(Self::Date)
        } else {
            Err(lookahead.error())
        }
    }
}

impl quote::ToTokens for ColumnType {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        match self {
            Self::Boolean => quote! { db::Type::Boolean },
            Self::Integer(size) => quote! { db::Type::Integer(#size) },
            Self::Double => quote! { db::Type::Double },
            Self::Text => quote! { db::Type::Text },
            Self::VarChar(size) => quote! { db::Type::VarChar(#size) },
            Self::Blob => quote! { db::Type::Blob },
            Self::Date => quote! { db::Type::Date },
            Self::DateTime => quote! { db::Type::DateTime },
            Self::Custom(custom) => quote! { db::Type::Custom(#custom.to_string()) },
        }
        .to_tokens(tokens);
    }
}
