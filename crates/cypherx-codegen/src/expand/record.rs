use super::{util, Expand};
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let cypherx = &self.cypherx;
        let ident = &self.record.ident;

        let accessors = self
            .record
            .fields
            .iter()
            .map(|field| self.expand_accessor(field));
        let decls = self.record.fields.iter().map(|field| self.expand_decl(field));

        quote! {
            impl #cypherx::Record for #ident {
                fn fields() -> #cypherx::Vec<#cypherx::FieldDecl<Self>> {
                    #( #accessors )*

                    #cypherx::Vec::from([ #( #decls ),* ])
                }
            }
        }
    }

    /// Nested records are assignable through their own shape.
    pub(super) fn expand_assignable_impl(&self) -> TokenStream {
        let cypherx = &self.cypherx;
        let ident = &self.record.ident;

        quote! {
            impl #cypherx::Assignable for #ident {
                fn field_ty() -> #cypherx::FieldTy {
                    #cypherx::FieldTy::Record(#cypherx::RecordTy::of::<Self>())
                }

                fn field_mut(&mut self) -> #cypherx::FieldMut<'_> {
                    #cypherx::FieldMut::Record(self)
                }
            }
        }
    }

    fn expand_accessor(&self, field: &Field) -> TokenStream {
        let cypherx = &self.cypherx;
        let record_ident = &self.record.ident;
        let accessor = accessor_ident(field);
        let field_ident = &field.ident;
        let ty = &field.ty;

        // Non-exported fields are never assigned, so their type does not
        // need to be assignable.
        let body = if field.exported {
            quote!(<#ty as #cypherx::Assignable>::field_mut(&mut record.#field_ident))
        } else {
            quote!({
                let _ = record;
                #cypherx::FieldMut::Unsupported
            })
        };

        quote! {
            fn #accessor(record: &mut #record_ident) -> #cypherx::FieldMut<'_> {
                #body
            }
        }
    }

    fn expand_decl(&self, field: &Field) -> TokenStream {
        let cypherx = &self.cypherx;
        let accessor = accessor_ident(field);
        let name = &field.name;
        let ty = &field.ty;

        let decl = if field.exported {
            quote! {
                #cypherx::FieldDecl::new(
                    #name,
                    <#ty as #cypherx::Assignable>::field_ty(),
                    #accessor,
                )
            }
        } else {
            let ty_name = quote!(#ty).to_string();
            quote! {
                #cypherx::FieldDecl::private(
                    #name,
                    #cypherx::FieldTy::Unsupported(#ty_name),
                    #accessor,
                )
            }
        };

        match &field.tag {
            Some(tag) => quote!(#decl.tag(#tag)),
            None => decl,
        }
    }
}

fn accessor_ident(field: &Field) -> syn::Ident {
    util::ident(&format!("access_{}", field.name))
}
