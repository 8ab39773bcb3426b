//! Generation errors
//!
//! A generation call fails as a whole: either the described type cannot be introspected
//! ([`GenerationError::Resolution`]) or the proxy cannot be rendered in the target language
//! ([`GenerationError::Emission`]). Nothing partial is ever returned.

use docproxy_core::{TokenError, TypeResolutionError};
use miette::Diagnostic;
use thiserror::Error;

/// The proxy model could not be rendered.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Rendered Rust tokens did not parse back as a file.
    #[error("generated Rust code does not parse: {0}")]
    SynParse(#[from] syn::Error),

    #[error(transparent)]
    Tokens(#[from] TokenError),

    /// A proxy segment, marker, or setter parameter is not usable as a name in the target language.
    #[error("{kind} `{name}` is not a valid name")]
    InvalidName { kind: &'static str, name: String },
}

/// A single proxy generation failed.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error(transparent)]
    #[diagnostic(
        code(docproxy::resolution),
        help("check the type's name, its parent chain and its property names")
    )]
    Resolution(#[from] TypeResolutionError),

    #[error("cannot emit proxy: {0}")]
    #[diagnostic(
        code(docproxy::emission),
        help("Rust targets need a type for every property that receives an accessor")
    )]
    Emission(#[from] EmitError),
}

impl From<TokenError> for GenerationError {
    fn from(err: TokenError) -> Self {
        GenerationError::Emission(EmitError::Tokens(err))
    }
}
