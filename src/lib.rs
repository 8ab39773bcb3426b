#![forbid(unsafe_code)]
//! docproxy: lazy-initialization proxies for document mapping layers
//!
//! A proxy is a generated subtype of a document type. It carries an initialization flag, implements the
//! `ProxyInterface` capability marker, and fills in the getters and setters the document type does not already
//! define, so an object mapper can hand out placeholders and populate them later.
//!
//! This crate provides:
//! - the [`ProxyFactory`] facade (introspect, plan, render one type or a whole registry),
//! - the language backends (PHP source text, formatted Rust source),
//! - JSON type manifests and the `docproxy` CLI,
//! - `#[derive(Proxy)]` and the [`ProxyInterface`] trait for Rust documents.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! # Example
//! ```rust
//! use docproxy::{ClassDescriptor, GeneratorConfig, ProxyFactory};
//!
//! let article = ClassDescriptor::new("App\\Document\\Article").with_properties(["title"]);
//! let factory = ProxyFactory::new(GeneratorConfig::default());
//! let source = factory.generate(&article).unwrap();
//! assert_eq!(source.namespace, "App\\Document\\_Proxy");
//! assert!(source.as_str().contains("public function getTitle()"));
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod manifest;
pub mod version;

pub use docproxy_core::{
    Accessor, AccessorPlan, ClassDecl, ClassDescriptor, Member, Property, PropertySet, ProxyClass, ProxyInterface,
    QualifiedName, TypeDescriptor, TypeRegistry, TypeResolutionError, collect_property_names, plan_accessors,
};
pub use docproxy_core::naming;
pub use docproxy_derive::Proxy;

pub use backend::{Backend, Target};
pub use config::GeneratorConfig;
pub use error::{EmitError, GenerationError};
pub use factory::{GeneratedSource, ProxyFactory};
pub use manifest::{Manifest, ManifestError};
