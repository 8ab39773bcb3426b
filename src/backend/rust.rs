//! Rust proxy modules.
//!
//! The proxy tokens come from `docproxy_core::rust_tokens` (the same rendering `#[derive(Proxy)]` expands to);
//! this backend only parses them back into a `syn::File` and pretty-prints it.
//!
//! A generated file is the body of the proxy module named in its header comment, for example:
//! ```ignore
//! pub mod _proxy {
//!     include!(concat!(env!("OUT_DIR"), "/docs/_proxy/article.rs"));
//! }
//! ```

use std::path::PathBuf;

use docproxy_core::conventions::{INITIALIZED_PARAM, RUST_MARKER_TRAIT, RUST_PROXY_SEGMENT};
use docproxy_core::naming::snake_case;
use docproxy_core::{ProxyClass, QualifiedName, RustTokenOptions, rust_tokens};
use quote::{format_ident, quote};

use super::Backend;
use crate::config::GeneratorConfig;
use crate::error::EmitError;

#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

fn banner(banner: &str, module: &str) -> String {
    let mut out = String::new();
    for line in banner.lines() {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str(&format!("// {line}\n"));
        }
    }
    if !module.is_empty() {
        out.push_str(&format!("// Module: {module}\n"));
    }
    out.push('\n');
    out
}

/// Format tokens as a file.
fn unparse(tokens: proc_macro2::TokenStream) -> Result<String, EmitError> {
    let file: syn::File = syn::parse2(tokens)?;
    Ok(prettyplease::unparse(&file))
}

impl Backend for RustBackend {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn namespace_separator(&self) -> &'static str {
        "::"
    }

    fn default_proxy_segment(&self) -> &'static str {
        RUST_PROXY_SEGMENT
    }

    fn default_marker(&self) -> &'static str {
        RUST_MARKER_TRAIT
    }

    fn render(&self, class: &ProxyClass, config: &GeneratorConfig) -> Result<String, EmitError> {
        let tokens = rust_tokens(class, &RustTokenOptions::default())?;
        let body = unparse(tokens)?;
        Ok(banner(&config.banner, &class.namespace.join("::")) + &body)
    }

    fn render_marker(&self, config: &GeneratorConfig) -> Result<String, EmitError> {
        let invalid = || EmitError::InvalidName {
            kind: "marker",
            name: config.marker().to_string(),
        };
        let marker = QualifiedName::parse(config.marker()).ok_or_else(invalid)?;
        let name = syn::parse_str::<syn::Ident>(marker.short_name()).map_err(|_| invalid())?;
        let param = format_ident!("{}", INITIALIZED_PARAM);
        let tokens = quote! {
            /// Capability marker implemented by every generated proxy.
            pub trait #name {
                fn is_initialized(&self) -> bool;

                fn set_initialized(&mut self, #param: bool);
            }
        };
        Ok(banner(&config.banner, &marker.namespace().join("::")) + &unparse(tokens)?)
    }

    fn relative_path(&self, class: &ProxyClass) -> PathBuf {
        let mut path: PathBuf = class
            .namespace
            .iter()
            .skip_while(|segment| segment.as_str() == "crate")
            .map(|segment| segment.to_lowercase())
            .collect();
        path.push(format!("{}.{}", snake_case(&class.name), self.file_extension()));
        path
    }
}
