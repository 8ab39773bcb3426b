//! Shared proxy conventions (well-known identifiers).

/// Namespace segment appended to a document's namespace for PHP proxies.
pub const PHP_PROXY_SEGMENT: &str = "_Proxy";

/// Module segment appended to a document's module path for Rust proxies.
pub const RUST_PROXY_SEGMENT: &str = "_proxy";

/// Suffix of the module a `#[derive(Proxy)]` expansion places its proxy in (`article_proxy`).
pub const DERIVE_MODULE_SUFFIX: &str = "_proxy";

/// Prefix of generated getter identifiers.
pub const GETTER_PREFIX: &str = "get";

/// Prefix of generated setter identifiers.
pub const SETTER_PREFIX: &str = "set";

/// Fully qualified name of the PHP capability marker interface.
pub const PHP_MARKER_INTERFACE: &str = "Docproxy\\Mapping\\Proxy\\ProxyInterface";

/// Path of the Rust capability marker trait.
pub const RUST_MARKER_TRAIT: &str = "::docproxy::ProxyInterface";

/// Initialization flag field (PHP).
pub const PHP_INIT_FLAG_FIELD: &str = "__isInitialized";

/// Initialization flag getter (PHP).
pub const PHP_IS_INITIALIZED_METHOD: &str = "__isInitialized";

/// Initialization flag setter (PHP).
pub const PHP_SET_INITIALIZED_METHOD: &str = "__setInitialized";

/// Parameter name of the initialization flag setter.
pub const INITIALIZED_PARAM: &str = "initialized";

/// Initialization flag field (Rust).
pub const RUST_INIT_FLAG_FIELD: &str = "__is_initialized";

/// Field of a Rust proxy that owns the wrapped document.
pub const RUST_BASE_FIELD: &str = "base";

/// Upper bound on inheritance depth the introspector follows.
pub const MAX_INHERITANCE_DEPTH: usize = 64;

/// Banner placed at the top of every generated file.
pub const GENERATED_BANNER: &str = "DO NOT EDIT THIS FILE - IT WAS CREATED BY THE DOCPROXY PROXY FACTORY.";
