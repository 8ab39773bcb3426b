//! Define the resolution errors shared by the registry and the introspector.
//!
//! A [`TypeResolutionError`] means the described type cannot be introspected: the mapping layer handed over a
//! malformed or unresolvable description. It is fatal to a single generation call and never retried.

use thiserror::Error;

use crate::conventions::MAX_INHERITANCE_DEPTH;

/// The supplied type cannot be introspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolutionError {
    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("type `{child}` extends unknown type `{parent}`")]
    UnknownParent { child: String, parent: String },

    #[error("inheritance cycle through `{0}`")]
    Cycle(String),

    #[error("type name is empty")]
    EmptyName,

    #[error("type `{type_name}` has invalid {kind} `{name}`")]
    InvalidIdentifier {
        type_name: String,
        kind: IdentifierKind,
        name: String,
    },

    #[error("inheritance chain of `{0}` is deeper than {max} levels", max = MAX_INHERITANCE_DEPTH)]
    TooDeep(String),
}

/// Which part of a descriptor failed identifier validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    ShortName,
    NamespaceSegment,
    Property,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::ShortName => write!(f, "short name"),
            IdentifierKind::NamespaceSegment => write!(f, "namespace segment"),
            IdentifierKind::Property => write!(f, "property name"),
        }
    }
}
