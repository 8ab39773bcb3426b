//! Language backends
//!
//! A backend turns a [`ProxyClass`] into source text for one target language. The model is language-neutral;
//! everything syntactic (separators, file layout, how the initialization flag and accessors are spelled) lives
//! behind the [`Backend`] trait.
//!
//! ## Module Organization
//!
//! - `php.rs` - PHP class text, built with the indentation-tracking writer
//! - `rust.rs` - Rust module text, rendered from `syn` tokens and formatted with `prettyplease`
//! - `writer.rs` - Indentation-tracking text writer

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod php;
pub mod rust;
pub mod writer;

use std::fmt;
use std::path::PathBuf;

use docproxy_core::ProxyClass;

use crate::config::GeneratorConfig;
use crate::error::EmitError;

pub use php::PhpBackend;
pub use rust::RustBackend;

/// Output language of a generated proxy.
pub trait Backend: Send + Sync {
    /// Language name, for logs and messages.
    fn language(&self) -> &'static str;

    /// Extension of generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Separator between namespace segments in the target language.
    fn namespace_separator(&self) -> &'static str;

    /// Segment appended to a document's namespace when the config does not set one.
    fn default_proxy_segment(&self) -> &'static str;

    /// Capability marker implemented when the config does not set one.
    fn default_marker(&self) -> &'static str;

    /// Render one proxy as a complete source file.
    fn render(&self, class: &ProxyClass, config: &GeneratorConfig) -> Result<String, EmitError>;

    /// Render the source of the capability marker itself.
    fn render_marker(&self, config: &GeneratorConfig) -> Result<String, EmitError>;

    /// Path of the generated file relative to an output directory.
    fn relative_path(&self, class: &ProxyClass) -> PathBuf;
}

/// Selects a [`Backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Target {
    #[default]
    Php,
    Rust,
}

static PHP: PhpBackend = PhpBackend;
static RUST: RustBackend = RustBackend;

impl Target {
    pub fn backend(self) -> &'static dyn Backend {
        match self {
            Target::Php => &PHP,
            Target::Rust => &RUST,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend().language())
    }
}
