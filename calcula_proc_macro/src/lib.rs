use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Data, DeriveInput, Fields, Ident, LitStr};

/// Derives the name lookup for an enum of unit variants. Each variant is
/// known by its lowercased identifier, so `Sqrt` answers to `"sqrt"`.
#[proc_macro_derive(FunctionTable)]
pub fn function_table_macro(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    function_table(input.into()).into()
}

fn function_table(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(input) => input,
        Err(error) => return error.to_compile_error(),
    };

    let name = input.ident;

    let variants = match input.data {
        Data::Enum(en) => en.variants,
        _ => return quote! { compile_error!("Only supported for enums"); },
    };

    if variants
        .iter()
        .any(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return quote! { compile_error!("Only unit variants can be named functions"); };
    }

    let variant_idents: Vec<Ident> = variants
        .iter()
        .map(|variant| variant.ident.clone())
        .collect();

    let variant_names: Vec<LitStr> = variant_idents
        .iter()
        .map(|ident| LitStr::new(&ident.to_string().to_lowercase(), ident.span()))
        .collect();

    quote! {
        impl #name {
            pub const ALL: &'static [#name] = &[#( #name::#variant_idents ),*];

            pub fn name(&self) -> &'static str {
                match self {
                    #( #name::#variant_idents => #variant_names, )*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    #( #variant_names => Some(#name::#variant_idents), )*
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use quote::quote;

    use crate::function_table;

    #[test]
    fn lowercases_variant_names() {
        let expanded = function_table(quote! {
            enum Function {
                Sin,
                Sqrt,
            }
        })
        .to_string();

        assert!(expanded.contains("\"sin\""));
        assert!(expanded.contains("\"sqrt\""));
        assert!(expanded.contains("fn from_name"));
    }

    #[test]
    fn rejects_structs() {
        let expanded = function_table(quote! {
            struct Testing {
                a: f64,
            }
        })
        .to_string();

        assert!(expanded.contains("compile_error"));
    }

    #[test]
    fn rejects_data_variants() {
        let expanded = function_table(quote! {
            enum Function {
                Custom(String),
            }
        })
        .to_string();

        assert!(expanded.contains("compile_error"));
    }
}
