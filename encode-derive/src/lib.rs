extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as Tokens;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Index};

/// Derives `Encode` by writing every field in declaration order.
///
/// A field marked `#[count]` is prefixed with its length as a `VarInt`.
/// `Encode` and `VarInt` must be in scope where the derive is used.
#[proc_macro_derive(Encode, attributes(count))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_encode(&ast).into()
}

/// Derives `Decode`, the mirror image of `Encode`.
///
/// A field marked `#[count]` is read as a `VarInt` length followed by that
/// many elements. `Buffer`, `Decode`, `DecodeResult` and `VarInt` must be in
/// scope where the derive is used.
#[proc_macro_derive(Decode, attributes(count))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_decode(&ast).into()
}

fn struct_fields(ast: &DeriveInput) -> &Fields {
    match ast.data {
        Data::Struct(ref data) => &data.fields,
        _ => panic!("#[derive(Encode)] and #[derive(Decode)] can only be used with structs"),
    }
}

fn is_counted(field: &Field) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident("count"))
}

fn impl_encode(ast: &DeriveInput) -> Tokens {
    let name = &ast.ident;
    let fields = generate_encode_fields(struct_fields(ast));
    quote! {
        impl Encode for #name {
            fn encode(&self, mut buff: &mut Vec<u8>) -> Result<(), ::std::io::Error> {
                #(#fields)*
                Ok(())
            }
        }
    }
}

fn generate_encode_fields(fields: &Fields) -> Vec<Tokens> {
    let mut result = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let member = match field.ident {
            Some(ref ident) => quote!(#ident),
            None => {
                let index = Index::from(i);
                quote!(#index)
            }
        };
        if is_counted(field) {
            result.push(quote! {
                VarInt::new(self.#member.len() as u64).encode(&mut buff)?;
            });
        }
        result.push(quote! {
            self.#member.encode(&mut buff)?;
        });
    }
    result
}

fn impl_decode(ast: &DeriveInput) -> Tokens {
    let name = &ast.ident;
    let fields = struct_fields(ast);
    let values: Vec<Tokens> = fields
        .iter()
        .map(|field| {
            if is_counted(field) {
                quote! {
                    {
                        let count = VarInt::decode(buf)?.value();
                        buf.decode_list(count)?
                    }
                }
            } else {
                quote!(Decode::decode(buf)?)
            }
        })
        .collect();

    let body = match *fields {
        Fields::Named(_) => {
            let idents = fields.iter().map(|f| &f.ident);
            quote!(#name { #(#idents: #values,)* })
        }
        Fields::Unnamed(_) => quote!(#name ( #(#values,)* )),
        Fields::Unit => quote!(#name),
    };

    quote! {
        impl Decode for #name {
            fn decode(buf: &mut Buffer<'_>) -> DecodeResult<Self> {
                Ok(#body)
            }
        }
    }
}
