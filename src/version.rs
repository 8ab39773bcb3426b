//! docproxy version information.
//!
//! The CLI `--version` output and the banner of generated Rust files read the same constant.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The docproxy version string (for example, `0.1.0-alpha.1`).
pub const DOCPROXY_VERSION: &str = env!("CARGO_PKG_VERSION");
