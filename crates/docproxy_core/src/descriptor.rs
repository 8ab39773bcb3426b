//! Describe document-mapping types to the generator.
//!
//! The mapping layer owns the real types; the generator only sees them through [`TypeDescriptor`]. Names are
//! kept as segments so each backend can join them with its own separator (`\` for PHP, `::` for Rust).

use std::fmt;

/// A namespaced type name, stored as segments (`["App", "Document", "Article"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a `\`- or `::`-separated name. Leading separators are ignored.
    ///
    /// ## Returns
    /// - `None` if the name is empty or contains an empty segment (`App\\\\Article`).
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim().trim_start_matches("::").trim_start_matches('\\');
        if trimmed.is_empty() {
            return None;
        }
        let segments: Vec<String> = if trimmed.contains("::") {
            trimmed.split("::").map(str::to_string).collect()
        } else {
            trimmed.split('\\').map(str::to_string).collect()
        };
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Every segment but the last.
    pub fn namespace(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, ns)) => ns,
            None => &[],
        }
    }

    /// The last segment.
    pub fn short_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("\\"))
    }
}

/// A declared instance property of a document type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: String,
    /// Host-language type, when the mapping layer knows it. Only the Rust rendering needs it.
    pub ty: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }
}

/// Read-only view of a declared type, supplied by the mapping/reflection layer.
pub trait TypeDescriptor {
    /// Simple (unqualified) name.
    fn short_name(&self) -> &str;

    /// Namespace segments, outermost first. Empty for the global namespace.
    fn namespace(&self) -> &[String];

    /// Instance properties declared directly on this type (not inherited ones).
    fn properties(&self) -> &[Property];

    fn parent(&self) -> Option<&dyn TypeDescriptor>;

    /// Whether a method with this name is already defined on the type (including inherited methods).
    fn has_method(&self, name: &str) -> bool;

    fn qualified_name(&self) -> QualifiedName {
        let mut segments = self.namespace().to_vec();
        segments.push(self.short_name().to_string());
        QualifiedName::new(segments)
    }
}

/// Owned [`TypeDescriptor`] with its parent chain resolved.
///
/// Method lookups are ASCII case-insensitive, following the host reflection the descriptions come from
/// (`getbody` and `getBody` name the same method there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: QualifiedName,
    properties: Vec<Property>,
    methods: Vec<String>,
    parent: Option<Box<ClassDescriptor>>,
}

impl ClassDescriptor {
    /// Create a descriptor for a fully qualified name (`App\Document\Article` or `crate::docs::Article`).
    ///
    /// An unparsable name yields a descriptor with an empty short name; the introspector rejects it.
    pub fn new(name: &str) -> Self {
        Self::from_qualified(QualifiedName::parse(name).unwrap_or_else(|| QualifiedName::new(Vec::new())))
    }

    pub fn from_qualified(name: QualifiedName) -> Self {
        Self {
            name,
            properties: Vec::new(),
            methods: Vec::new(),
            parent: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property::new(name));
        self
    }

    pub fn with_typed_property(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.properties.push(Property::typed(name, ty));
        self
    }

    pub fn with_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.extend(names.into_iter().map(Property::new));
        self
    }

    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    pub fn with_parent(mut self, parent: ClassDescriptor) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn push_method(&mut self, name: impl Into<String>) {
        self.methods.push(name.into());
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }
}

impl TypeDescriptor for ClassDescriptor {
    fn short_name(&self) -> &str {
        self.name.short_name()
    }

    fn namespace(&self) -> &[String] {
        self.name.namespace()
    }

    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn parent(&self) -> Option<&dyn TypeDescriptor> {
        self.parent.as_deref().map(|p| p as &dyn TypeDescriptor)
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(name))
            || self.parent.as_ref().is_some_and(|p| p.has_method(name))
    }

    fn qualified_name(&self) -> QualifiedName {
        self.name.clone()
    }
}
