//! Resolve type declarations by name into owned descriptor chains.
//!
//! Mapping layers usually describe a document's parent by name. The registry holds those flat declarations and
//! turns one of them into a [`ClassDescriptor`] whose parent chain is fully resolved, or reports why it cannot.

use indexmap::IndexMap;

use crate::descriptor::{ClassDescriptor, Property, QualifiedName};
use crate::errors::TypeResolutionError;

/// A flat type declaration: parent referenced by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub parent: Option<String>,
    pub properties: Vec<Property>,
    pub methods: Vec<String>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }
}

/// Normalize a type name so `\App\Article`, `App\Article` and `App::Article` address the same declaration.
fn key(name: &str) -> Option<String> {
    QualifiedName::parse(name).map(|q| q.join("\\"))
}

/// Name-keyed declarations, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    decls: IndexMap<String, ClassDecl>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any earlier one with the same name.
    ///
    /// ## Returns
    /// - The replaced declaration, if there was one.
    pub fn insert(&mut self, decl: ClassDecl) -> Option<ClassDecl> {
        let key = key(&decl.name).unwrap_or_else(|| decl.name.clone());
        self.decls.insert(key, decl)
    }

    pub fn contains(&self, name: &str) -> bool {
        key(name).is_some_and(|k| self.decls.contains_key(&k))
    }

    pub fn get(&self, name: &str) -> Option<&ClassDecl> {
        key(name).and_then(|k| self.decls.get(&k))
    }

    /// Declared type names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decls.values().map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Resolve `name` and its whole parent chain.
    ///
    /// ## Errors
    /// - [`TypeResolutionError::EmptyName`] for a blank or malformed name.
    /// - [`TypeResolutionError::UnknownType`] if `name` is not declared.
    /// - [`TypeResolutionError::UnknownParent`] if some type in the chain extends an undeclared type.
    /// - [`TypeResolutionError::Cycle`] if the chain loops.
    pub fn resolve(&self, name: &str) -> Result<ClassDescriptor, TypeResolutionError> {
        let Some(start) = key(name) else {
            return Err(TypeResolutionError::EmptyName);
        };
        let Some(first) = self.decls.get(&start) else {
            return Err(TypeResolutionError::UnknownType(name.to_string()));
        };

        // Walk child → root, then build root → child so each descriptor can own its parent.
        let mut chain: Vec<&ClassDecl> = vec![first];
        let mut seen: Vec<String> = vec![start];
        let mut current = first;
        while let Some(parent) = current.parent.as_deref() {
            let unknown = || TypeResolutionError::UnknownParent {
                child: current.name.clone(),
                parent: parent.to_string(),
            };
            let parent_key = key(parent).ok_or_else(unknown)?;
            if seen.contains(&parent_key) {
                return Err(TypeResolutionError::Cycle(parent.to_string()));
            }
            let decl = self.decls.get(&parent_key).ok_or_else(unknown)?;
            seen.push(parent_key);
            chain.push(decl);
            current = decl;
        }

        let mut resolved: Option<ClassDescriptor> = None;
        for decl in chain.into_iter().rev() {
            let mut descriptor = ClassDescriptor::new(&decl.name);
            for property in &decl.properties {
                descriptor.push_property(property.clone());
            }
            for method in &decl.methods {
                descriptor.push_method(method.clone());
            }
            if let Some(parent) = resolved.take() {
                descriptor = descriptor.with_parent(parent);
            }
            resolved = Some(descriptor);
        }
        resolved.ok_or_else(|| TypeResolutionError::UnknownType(name.to_string()))
    }
}

impl FromIterator<ClassDecl> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = ClassDecl>>(iter: I) -> Self {
        let mut registry = TypeRegistry::new();
        for decl in iter {
            registry.insert(decl);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;

    fn registry() -> TypeRegistry {
        [
            ClassDecl::new("App\\Comment")
                .property(Property::new("body"))
                .method("getBody"),
            ClassDecl::new("App\\Reply")
                .extends("App\\Comment")
                .property(Property::new("authorName")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_chain() {
        let reply = registry().resolve("App\\Reply").unwrap();
        assert_eq!(reply.short_name(), "Reply");
        let parent = reply.parent().unwrap();
        assert_eq!(parent.short_name(), "Comment");
        assert!(parent.parent().is_none());
        assert!(reply.has_method("getBody"));
    }

    #[test]
    fn test_names_are_normalized() {
        let registry = registry();
        assert!(registry.contains("\\App\\Reply"));
        assert!(registry.contains("App::Reply"));
        assert!(registry.resolve("\\App\\Comment").is_ok());
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            registry().resolve("App\\Missing").unwrap_err(),
            TypeResolutionError::UnknownType("App\\Missing".to_string())
        );
    }

    #[test]
    fn test_unknown_parent() {
        let registry: TypeRegistry = [ClassDecl::new("App\\Reply").extends("App\\Comment")].into_iter().collect();
        assert_eq!(
            registry.resolve("App\\Reply").unwrap_err(),
            TypeResolutionError::UnknownParent {
                child: "App\\Reply".to_string(),
                parent: "App\\Comment".to_string(),
            }
        );
    }

    #[test]
    fn test_cycle() {
        let registry: TypeRegistry = [
            ClassDecl::new("App\\A").extends("App\\B"),
            ClassDecl::new("App\\B").extends("App\\A"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            registry.resolve("App\\A").unwrap_err(),
            TypeResolutionError::Cycle("App\\A".to_string())
        );
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let registry: TypeRegistry = [ClassDecl::new("App\\A").extends("App\\A")].into_iter().collect();
        assert!(matches!(registry.resolve("App\\A"), Err(TypeResolutionError::Cycle(_))));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(registry().resolve("  ").unwrap_err(), TypeResolutionError::EmptyName);
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = registry().names().map(str::to_string).collect();
        assert_eq!(names, ["App\\Comment", "App\\Reply"]);
    }
}
