//! Derive macro for docproxy document types.
//!
//! `#[derive(Proxy)]` expands, at compile time, the same proxy the offline generator would emit for a Rust
//! document: a wrapper type with the document's name, placed in a sibling module, that adds the
//! initialization flag, implements `docproxy::ProxyInterface`, and defines the missing accessors.
//!
//! # Example
//! ```ignore
//! #[derive(Proxy)]
//! pub struct Comment {
//!     #[proxy(getter = false)] // Comment::get_body is written by hand
//!     pub body: String,
//!     #[proxy(skip)]
//!     pub cached_html: Option<String>,
//! }
//!
//! // Generates `pub mod comment_proxy { pub struct Comment { .. } .. }` with `set_body`,
//! // `is_initialized` and `set_initialized`.
//! ```
//!
//! ## Attributes
//!
//! - `#[proxy(module = "name")]` on the struct: module the proxy is placed in (default `<snake_name>_proxy`).
//! - `#[proxy(skip)]` on a field: not a document property.
//! - `#[proxy(getter = false)]` / `#[proxy(setter = false)]` on a field: the accessor already exists on the
//!   document type, so the proxy must not define it.

use docproxy_core::conventions::{DERIVE_MODULE_SUFFIX, RUST_MARKER_TRAIT};
use docproxy_core::naming::{getter_name, setter_name, snake_case};
use docproxy_core::{
    ClassDescriptor, ModelOptions, Property, ProxyClass, QualifiedName, RustTokenOptions, collect_property_names,
    plan_accessors, rust_tokens,
};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::visit_mut::{self, VisitMut};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitBool, LitStr, PathSegment, Visibility, parse_macro_input};

/// Expands a lazy-initialization proxy for a document struct.
#[proc_macro_derive(Proxy, attributes(proxy))]
pub fn derive_proxy(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_proxy(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Default)]
struct ContainerAttrs {
    module: Option<String>,
}

struct FieldAttrs {
    skip: bool,
    getter: bool,
    setter: bool,
}

fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("proxy")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("module") {
                let lit: LitStr = meta.value()?.parse()?;
                out.module = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported proxy attribute, expected `module = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        skip: false,
        getter: true,
        setter: true,
    };
    for attr in attrs.iter().filter(|a| a.path().is_ident("proxy")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
            } else if meta.path.is_ident("getter") {
                out.getter = meta.value()?.parse::<LitBool>()?.value;
            } else if meta.path.is_ident("setter") {
                out.setter = meta.value()?.parse::<LitBool>()?.value;
            } else {
                return Err(meta.error("unsupported proxy attribute, expected `skip`, `getter` or `setter`"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Re-roots module-relative paths in a field type for use one module deeper: `self::X` becomes `super::X` and
/// `super::X` becomes `super::super::X`.
struct RerootRelativePaths;

impl VisitMut for RerootRelativePaths {
    fn visit_path_mut(&mut self, path: &mut syn::Path) {
        if path.leading_colon.is_none() {
            let root = path.segments.first().map(|s| s.ident.to_string());
            match root.as_deref() {
                Some("self") => {
                    let span = path.segments[0].ident.span();
                    path.segments[0].ident = Ident::new("super", span);
                }
                Some("super") => {
                    let span = path.segments[0].ident.span();
                    path.segments.insert(0, PathSegment::from(Ident::new("super", span)));
                }
                _ => {}
            }
        }
        visit_mut::visit_path_mut(self, path);
    }
}

fn expand_proxy(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "Proxy cannot be derived for generic types"));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(name, "Proxy requires a struct with named fields")),
        },
        _ => return Err(syn::Error::new_spanned(name, "Proxy can only be derived for structs")),
    };
    let container = container_attrs(&input.attrs)?;
    let type_name = name.unraw().to_string();

    // The proxy module is a child of the document's module, so `super::Name` is the document. Field types are
    // spelled as written apart from `self::`/`super::` roots; the glob import below keeps them resolvable.
    let mut descriptor = ClassDescriptor::from_qualified(QualifiedName::new(vec!["super".to_string(), type_name.clone()]));
    for field in fields {
        let attrs = field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let property = ident.unraw().to_string();
        let mut ty = field.ty.clone();
        RerootRelativePaths.visit_type_mut(&mut ty);
        if !attrs.getter {
            descriptor.push_method(getter_name(&property));
        }
        if !attrs.setter {
            descriptor.push_method(setter_name(&property));
        }
        descriptor.push_property(Property::typed(property, quote!(#ty).to_string()));
    }

    let module = container
        .module
        .unwrap_or_else(|| format!("{}{}", snake_case(&type_name), DERIVE_MODULE_SUFFIX));
    let marker = QualifiedName::parse(RUST_MARKER_TRAIT)
        .ok_or_else(|| syn::Error::new_spanned(name, "invalid marker trait path"))?;
    let options = ModelOptions {
        proxy_segment: module.clone(),
        qualify_with_name: false,
        marker,
    };

    let properties = collect_property_names(&descriptor).map_err(|e| syn::Error::new_spanned(name, e))?;
    let plans = plan_accessors(&descriptor, &properties);
    let class = ProxyClass::build(&descriptor, &plans, &options);

    let visibility: Visibility = match &input.vis {
        Visibility::Public(_) => syn::parse_quote!(pub),
        _ => syn::parse_quote!(pub(super)),
    };
    let items = rust_tokens(&class, &RustTokenOptions { visibility }).map_err(|e| syn::Error::new_spanned(name, e))?;

    let module_ident = syn::parse_str::<syn::Ident>(&module)
        .map_err(|_| syn::Error::new_spanned(name, format!("`{module}` is not a valid module name")))?;
    let doc = format!(" Lazy-initialization proxy for `{type_name}`.");

    Ok(quote! {
        #[doc = #doc]
        pub mod #module_ident {
            #[allow(unused_imports)]
            use super::*;

            #items
        }
    })
}
