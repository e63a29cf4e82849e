//! Config derive macro - generates the FIELDS path accessor struct.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields};

/// Generate the `FIELDS` constant for a config struct.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_string_attr(&input.attrs, "section").unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let paths: Vec<(syn::Ident, String)> = fields
        .iter()
        .filter(|f| !has_flag(&f.attrs, "skip"))
        .filter_map(|f| {
            let ident = f.ident.clone()?;
            let user_name = get_string_attr(&f.attrs, "name")
                .unwrap_or_else(|| to_camel_case(&ident.to_string()));
            let full_path = if section.is_empty() {
                user_name
            } else {
                format!("{section}.{user_name}")
            };
            Some((ident, full_path))
        })
        .collect();

    let field_defs = paths.iter().map(|(ident, _)| {
        quote! { pub #ident: crate::config::FieldPath, }
    });

    let field_inits = paths.iter().map(|(ident, path)| {
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }
    }
}

/// Convert a snake_case ident to the camelCase spelling used in config files.
fn to_camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = false;
    for ch in ident.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
fn has_flag(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::to_camel_case;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("display"), "display");
        assert_eq!(to_camel_case("sort_by"), "sortBy");
        assert_eq!(to_camel_case("respect_prefers_color_scheme"), "respectPrefersColorScheme");
    }
}
