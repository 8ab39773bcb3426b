//! JSON type manifests
//!
//! The CLI learns about document types from a manifest instead of from a live mapping layer:
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "App\\Document\\Comment", "properties": ["body"], "methods": ["getBody"] },
//!     {
//!       "name": "App\\Document\\Reply",
//!       "extends": "App\\Document\\Comment",
//!       "properties": [{ "name": "authorName", "type": "String" }]
//!     }
//!   ]
//! }
//! ```
//!
//! A property is either a bare name or an object with an optional `type` (needed by the Rust target).

use std::fs;
use std::path::{Path, PathBuf};

use docproxy_core::{ClassDecl, Property, TypeRegistry};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A manifest could not be loaded.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("cannot read manifest `{}`: {source}", .path.display())]
    #[diagnostic(code(docproxy::manifest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    #[diagnostic(
        code(docproxy::manifest::json),
        help("expected a `types` array of objects with `name`, `extends`, `properties` and `methods`")
    )]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is declared more than once")]
    #[diagnostic(code(docproxy::manifest::duplicate))]
    DuplicateType(String),
}

/// A property entry: bare name, or name with type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyEntry {
    Name(String),
    Typed {
        name: String,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        ty: Option<String>,
    },
}

impl From<PropertyEntry> for Property {
    fn from(entry: PropertyEntry) -> Self {
        match entry {
            PropertyEntry::Name(name) => Property::new(name),
            PropertyEntry::Typed { name, ty: Some(ty) } => Property::typed(name, ty),
            PropertyEntry::Typed { name, ty: None } => Property::new(name),
        }
    }
}

/// One declared document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl From<TypeEntry> for ClassDecl {
    fn from(entry: TypeEntry) -> Self {
        let mut decl = ClassDecl::new(entry.name);
        decl.parent = entry.extends;
        decl.properties = entry.properties.into_iter().map(Property::from).collect();
        decl.methods = entry.methods;
        decl
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        tracing::debug!(types = manifest.types.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Turn the declarations into a registry.
    ///
    /// ## Errors
    /// - [`ManifestError::DuplicateType`] if two entries name the same type (after name normalization).
    pub fn into_registry(self) -> Result<TypeRegistry, ManifestError> {
        let mut registry = TypeRegistry::new();
        for entry in self.types {
            let name = entry.name.clone();
            if registry.insert(entry.into()).is_some() {
                return Err(ManifestError::DuplicateType(name));
            }
        }
        Ok(registry)
    }
}
