mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for keel types
    keel: TokenStream,
}

pub(super) fn model(model: &Model) -> TokenStream {
    let expand = Expand {
        model,
        keel: quote!(_keel),
    };

    let keel = &expand.keel;
    let model_ident = &model.ident;
    let model_schema = expand.expand_model_schema();

    wrap_in_const(quote! {
        impl #keel::Model for #model_ident {
            #model_schema
        }
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use keel as _keel;
            #code
        };
    }
}
