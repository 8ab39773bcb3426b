//! Render a [`ProxyClass`] as Rust tokens.
//!
//! Rust has no inheritance, so "extends the document type" becomes a wrapper that owns the document and
//! dereferences to it. Methods the document already defines stay reachable through `Deref`; the proxy only adds
//! the planned accessors and the marker trait implementation.
//!
//! ## Notes
//! - Used both by the `#[derive(Proxy)]` expansion and by the offline Rust backend (which formats the tokens).
//! - Property types come from the descriptor. A planned accessor whose property has no type cannot be rendered.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use thiserror::Error;

use crate::conventions::{RUST_BASE_FIELD, RUST_INIT_FLAG_FIELD};
use crate::descriptor::Property;
use crate::keywords::{NON_RAW_KEYWORDS, is_rust_keyword};
use crate::model::{Member, ProxyClass};
use crate::naming::snake_case;

/// Error while rendering Rust tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("property `{property}` of `{class}` has no Rust type")]
    MissingType { class: String, property: String },

    #[error("property `{property}` has type `{ty}`, which is not a Rust type: {message}")]
    InvalidType {
        property: String,
        ty: String,
        message: String,
    },

    #[error("`{path}` is not a Rust path: {message}")]
    InvalidPath { path: String, message: String },

    #[error("`{0}` cannot be used as a Rust identifier")]
    ReservedIdentifier(String),
}

/// Options for the Rust rendering.
#[derive(Clone)]
pub struct RustTokenOptions {
    /// Visibility of the proxy struct.
    pub visibility: syn::Visibility,
}

impl Default for RustTokenOptions {
    fn default() -> Self {
        Self {
            visibility: syn::parse_quote!(pub),
        }
    }
}

/// Identifier for a validated name, escaping keywords as raw identifiers.
fn ident(name: &str) -> Result<Ident, TokenError> {
    if NON_RAW_KEYWORDS.contains(&name) {
        return Err(TokenError::ReservedIdentifier(name.to_string()));
    }
    if is_rust_keyword(name) {
        Ok(Ident::new_raw(name, Span::call_site()))
    } else {
        Ok(Ident::new(name, Span::call_site()))
    }
}

/// Fully qualified path tokens for a name.
///
/// The proxy lives in its own module, so a path not rooted at `crate`/`self`/`super` is written with a leading
/// `::` to keep it from resolving relative to that module.
fn path(segments: &[String]) -> Result<syn::Path, TokenError> {
    let joined = segments.join("::");
    let rooted = matches!(segments.first().map(String::as_str), Some("crate" | "self" | "super"));
    let text = if rooted { joined } else { format!("::{joined}") };
    syn::parse_str::<syn::Path>(&text).map_err(|e| TokenError::InvalidPath {
        path: text.clone(),
        message: e.to_string(),
    })
}

fn property_type(class: &ProxyClass, property: &Property) -> Result<syn::Type, TokenError> {
    let Some(ty) = property.ty.as_deref() else {
        return Err(TokenError::MissingType {
            class: class.base.join("::"),
            property: property.name.clone(),
        });
    };
    syn::parse_str::<syn::Type>(ty).map_err(|e| TokenError::InvalidType {
        property: property.name.clone(),
        ty: ty.to_string(),
        message: e.to_string(),
    })
}

/// Render the proxy struct, its accessors, conversions, `Deref`/`DerefMut`, and the marker implementation.
#[tracing::instrument(skip_all, fields(class = %class.name, members = class.members.len()))]
pub fn rust_tokens(class: &ProxyClass, options: &RustTokenOptions) -> Result<TokenStream, TokenError> {
    let name = ident(&class.name)?;
    let base = path(class.base.segments())?;
    let marker = path(class.marker.segments())?;
    let vis = &options.visibility;
    let base_field = format_ident!("{}", RUST_BASE_FIELD);
    let flag = format_ident!("{}", RUST_INIT_FLAG_FIELD);

    let mut accessors = Vec::new();
    let mut marker_fns = Vec::new();
    for member in &class.members {
        match member {
            // Part of the struct definition below.
            Member::InitFlagField => {}
            Member::IsInitialized => marker_fns.push(quote! {
                fn is_initialized(&self) -> bool {
                    self.#flag
                }
            }),
            Member::SetInitialized => marker_fns.push(quote! {
                fn set_initialized(&mut self, initialized: bool) {
                    self.#flag = initialized;
                }
            }),
            Member::Getter { method, property } => {
                let fn_name = format_ident!("{}", snake_case(method));
                let field = ident(&property.name)?;
                let ty = property_type(class, property)?;
                accessors.push(quote! {
                    pub fn #fn_name(&self) -> &#ty {
                        &self.#base_field.#field
                    }
                });
            }
            Member::Setter { method, property } => {
                let fn_name = format_ident!("{}", snake_case(method));
                let field = ident(&property.name)?;
                let ty = property_type(class, property)?;
                accessors.push(quote! {
                    pub fn #fn_name(&mut self, #field: #ty) {
                        self.#base_field.#field = #field;
                    }
                });
            }
        }
    }

    let doc = format!(" Lazy-initialization proxy for `{}`.", class.base.join("::"));
    Ok(quote! {
        #[doc = #doc]
        #vis struct #name {
            #base_field: #base,
            #flag: bool,
        }

        #[allow(dead_code)]
        impl #name {
            /// Wrap a document. The proxy starts uninitialized.
            pub fn new(#base_field: #base) -> Self {
                Self {
                    #base_field,
                    #flag: false,
                }
            }

            pub fn into_inner(self) -> #base {
                self.#base_field
            }

            #(#accessors)*
        }

        impl ::core::convert::From<#base> for #name {
            fn from(#base_field: #base) -> Self {
                Self::new(#base_field)
            }
        }

        impl ::core::ops::Deref for #name {
            type Target = #base;

            fn deref(&self) -> &Self::Target {
                &self.#base_field
            }
        }

        impl ::core::ops::DerefMut for #name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#base_field
            }
        }

        impl #marker for #name {
            #(#marker_fns)*
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ClassDescriptor, QualifiedName};
    use crate::introspect::collect_property_names;
    use crate::model::ModelOptions;
    use crate::plan::plan_accessors;

    fn build(ty: &ClassDescriptor) -> ProxyClass {
        let properties = collect_property_names(ty).unwrap();
        let plans = plan_accessors(ty, &properties);
        let options = ModelOptions {
            proxy_segment: "_proxy".to_string(),
            qualify_with_name: false,
            marker: QualifiedName::parse("::docproxy::ProxyInterface").unwrap(),
        };
        ProxyClass::build(ty, &plans, &options)
    }

    fn render(ty: &ClassDescriptor) -> Result<String, TokenError> {
        rust_tokens(&build(ty), &RustTokenOptions::default()).map(|t| t.to_string())
    }

    #[test]
    fn test_tokens_parse_as_items() {
        let ty = ClassDescriptor::new("crate::docs::Article")
            .with_typed_property("title", "String")
            .with_typed_property("published_at", "Option<u64>");
        let tokens = rust_tokens(&build(&ty), &RustTokenOptions::default()).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        // struct + inherent impl + From + Deref + DerefMut + marker impl
        assert_eq!(file.items.len(), 6);
    }

    #[test]
    fn test_accessors_are_snake_case() {
        let ty = ClassDescriptor::new("crate::docs::Article").with_typed_property("publishedAt", "u64");
        let text = render(&ty).unwrap();
        assert!(text.contains("fn get_published_at"));
        assert!(text.contains("fn set_published_at"));
    }

    #[test]
    fn test_marker_path_is_absolute() {
        let class = build(&ClassDescriptor::new("crate::docs::Article"));
        let tokens = rust_tokens(&class, &RustTokenOptions::default()).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        let marker = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Impl(imp) => imp
                    .trait_
                    .as_ref()
                    .map(|(_, path, _)| path)
                    .filter(|path| path.segments.last().is_some_and(|s| s.ident == "ProxyInterface")),
                _ => None,
            })
            .unwrap();
        assert!(marker.leading_colon.is_some());
        assert_eq!(marker.segments.first().unwrap().ident, "docproxy");
    }

    #[test]
    fn test_unrooted_base_path_is_absolute() {
        let class = build(&ClassDescriptor::new("docs::Article"));
        let tokens = rust_tokens(&class, &RustTokenOptions::default()).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        let syn::Item::Struct(proxy) = &file.items[0] else {
            panic!("expected the proxy struct first");
        };
        let base = proxy.fields.iter().next().unwrap();
        let syn::Type::Path(ty) = &base.ty else {
            panic!("expected a path type");
        };
        assert!(ty.path.leading_colon.is_some());
        assert_eq!(ty.path.segments.len(), 2);

        let class = build(&ClassDescriptor::new("crate::docs::Article"));
        let text = rust_tokens(&class, &RustTokenOptions::default()).unwrap().to_string();
        assert!(text.contains("crate :: docs :: Article"));
        assert!(!text.contains(":: crate"));
    }

    #[test]
    fn test_keyword_property_is_raw() {
        let ty = ClassDescriptor::new("crate::docs::Article").with_typed_property("type", "String");
        let text = render(&ty).unwrap();
        assert!(text.contains("r#type"));

        let ty = ClassDescriptor::new("crate::jobs::Job").with_typed_property("gen", "u32");
        let text = render(&ty).unwrap();
        assert!(text.contains("r#gen"));
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let ty = ClassDescriptor::new("crate::docs::Article").with_property("title");
        assert_eq!(
            render(&ty),
            Err(TokenError::MissingType {
                class: "crate::docs::Article".to_string(),
                property: "title".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_type_is_fine_when_nothing_is_generated() {
        let ty = ClassDescriptor::new("crate::docs::Article")
            .with_property("title")
            .with_method("getTitle")
            .with_method("setTitle");
        assert!(render(&ty).is_ok());
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let ty = ClassDescriptor::new("crate::docs::Article").with_typed_property("title", "not a type");
        assert!(matches!(render(&ty), Err(TokenError::InvalidType { .. })));
    }
}
