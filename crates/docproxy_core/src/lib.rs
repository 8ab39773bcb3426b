#![forbid(unsafe_code)]
//! Provide the pure, deterministic core of the docproxy generator.
//!
//! Everything a proxy generation run needs before text is produced lives here:
//! - type descriptors and the name-keyed registry that resolves parent chains,
//! - the property-name naming transform,
//! - the introspector (property discovery across an inheritance chain),
//! - the accessor planner (which getters/setters are missing),
//! - the structured code model of a proxy type, and its Rust token rendering.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no language backend text.
//! - The derive crate and the CLI backends both build on [`model::ProxyClass`], so a proxy expanded at compile
//!   time and a proxy emitted offline have the same shape.

pub mod conventions;
pub mod descriptor;
pub mod errors;
pub mod introspect;
pub mod keywords;
pub mod model;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod runtime;
pub mod tokens;

pub use descriptor::{ClassDescriptor, Property, QualifiedName, TypeDescriptor};
pub use errors::TypeResolutionError;
pub use introspect::{PropertySet, collect_property_names};
pub use model::{Member, ModelOptions, ProxyClass, proxy_namespace};
pub use plan::{Accessor, AccessorPlan, plan_accessors};
pub use registry::{ClassDecl, TypeRegistry};
pub use runtime::ProxyInterface;
pub use tokens::{RustTokenOptions, TokenError, rust_tokens};
