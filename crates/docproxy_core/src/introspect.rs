//! Collect the instance properties of a type and all of its ancestors.
//!
//! The result is a set: a property declared on both a type and one of its ancestors appears once, with the
//! declaration closest to the type winning. Iteration order (own properties first, then each ancestor's) only
//! makes output reproducible; no caller relies on it for meaning.

use indexmap::IndexMap;

use crate::conventions::MAX_INHERITANCE_DEPTH;
use crate::descriptor::{Property, TypeDescriptor};
use crate::errors::{IdentifierKind, TypeResolutionError};
use crate::keywords::is_identifier;

/// De-duplicated, insertion-ordered set of properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: IndexMap<String, Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property unless one with the same name is already present.
    ///
    /// ## Returns
    /// - `true` if the property was new.
    pub fn insert(&mut self, property: Property) -> bool {
        if self.entries.contains_key(&property.name) {
            return false;
        }
        self.entries.insert(property.name.clone(), property);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Check that a descriptor's names can be introspected at all.
pub fn validate_descriptor(ty: &dyn TypeDescriptor) -> Result<(), TypeResolutionError> {
    let short_name = ty.short_name();
    if short_name.is_empty() {
        return Err(TypeResolutionError::EmptyName);
    }
    let type_name = ty.qualified_name().to_string();
    if !is_identifier(short_name) {
        return Err(TypeResolutionError::InvalidIdentifier {
            type_name,
            kind: IdentifierKind::ShortName,
            name: short_name.to_string(),
        });
    }
    if let Some(segment) = ty.namespace().iter().find(|s| !is_identifier(s)) {
        return Err(TypeResolutionError::InvalidIdentifier {
            type_name,
            kind: IdentifierKind::NamespaceSegment,
            name: segment.clone(),
        });
    }
    if let Some(property) = ty.properties().iter().find(|p| !is_identifier(&p.name)) {
        return Err(TypeResolutionError::InvalidIdentifier {
            type_name,
            kind: IdentifierKind::Property,
            name: property.name.clone(),
        });
    }
    Ok(())
}

/// Collect the properties declared on `ty` and every ancestor.
///
/// ## Errors
/// - [`TypeResolutionError`] if any type in the chain has an invalid name or property, or the chain is deeper
///   than [`MAX_INHERITANCE_DEPTH`] (a descriptor whose parent chain loops back on itself).
#[tracing::instrument(skip_all, fields(type_name = ty.short_name()))]
pub fn collect_property_names(ty: &dyn TypeDescriptor) -> Result<PropertySet, TypeResolutionError> {
    let mut set = PropertySet::new();
    let mut current = Some(ty);
    let mut depth = 0;

    while let Some(class) = current {
        if depth == MAX_INHERITANCE_DEPTH {
            return Err(TypeResolutionError::TooDeep(ty.qualified_name().to_string()));
        }
        validate_descriptor(class)?;
        for property in class.properties() {
            set.insert(property.clone());
        }
        current = class.parent();
        depth += 1;
    }

    tracing::debug!(count = set.len(), depth, "collected properties");
    Ok(set)
}
