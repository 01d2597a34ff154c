mod record;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for cypherx types
    cypherx: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let assignable_impl = self.expand_assignable_impl();

        wrap_in_const(quote! {
            #record_impl
            #assignable_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        cypherx: quote!(_cypherx::codegen_support),
    }
    .expand()
}

pub(super) fn receiver(ident: &syn::Ident) -> TokenStream {
    let cypherx = quote!(_cypherx::codegen_support);

    wrap_in_const(quote! {
        impl #cypherx::Assignable for #ident {
            fn field_ty() -> #cypherx::FieldTy {
                #cypherx::FieldTy::Receiver
            }

            fn field_mut(&mut self) -> #cypherx::FieldMut<'_> {
                #cypherx::FieldMut::Receiver(self)
            }
        }
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use cypherx as _cypherx;
            #code
        };
    }
}
