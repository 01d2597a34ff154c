extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Record, attributes(cypher))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match cypherx_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Receiver)]
pub fn derive_receiver(input: TokenStream) -> TokenStream {
    match cypherx_codegen::generate_receiver(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
