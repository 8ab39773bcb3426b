//! Structured model of a generated proxy type.
//!
//! Backends render a [`ProxyClass`] instead of splicing strings, so the proxy's shape (namespace, base type,
//! marker, members) can be inspected and tested on its own.
//!
//! ## Notes
//! - The initialization-flag members are always present and always first. They are not subject to existence
//!   checks: the lazy-load runtime owns them.
//! - Accessors follow plan order, getter before setter.

use crate::descriptor::{Property, QualifiedName, TypeDescriptor};
use crate::plan::AccessorPlan;

/// A member of the generated proxy type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Boolean initialization flag, `false` on construction.
    InitFlagField,
    /// "is-initialized" operation of the marker interface.
    IsInitialized,
    /// "set-initialized" operation of the marker interface.
    SetInitialized,
    /// Direct read of an inherited property.
    Getter { method: String, property: Property },
    /// Direct write of an inherited property.
    Setter { method: String, property: Property },
}

impl Member {
    /// Accessor identifier, for getters and setters.
    pub fn method_name(&self) -> Option<&str> {
        match self {
            Member::Getter { method, .. } | Member::Setter { method, .. } => Some(method),
            _ => None,
        }
    }

    pub fn property(&self) -> Option<&Property> {
        match self {
            Member::Getter { property, .. } | Member::Setter { property, .. } => Some(property),
            _ => None,
        }
    }
}

/// Options controlling where the proxy lives and what it implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOptions {
    /// Segment appended to the document's namespace.
    pub proxy_segment: String,
    /// Also append the document's short name to the derived namespace.
    pub qualify_with_name: bool,
    /// Fully qualified capability marker.
    pub marker: QualifiedName,
}

/// The generated proxy type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClass {
    /// Derived namespace segments.
    pub namespace: Vec<String>,
    /// Same short name as the document type.
    pub name: String,
    pub base: QualifiedName,
    pub marker: QualifiedName,
    pub members: Vec<Member>,
}

/// Derived namespace of a proxy: the document's namespace, the proxy segment, and optionally the short name.
///
/// ## Examples
/// ```rust
/// use docproxy_core::{ClassDescriptor, proxy_namespace};
/// let ty = ClassDescriptor::new("App\\Document\\Article");
/// assert_eq!(proxy_namespace(&ty, "_Proxy", false), ["App", "Document", "_Proxy"]);
/// assert_eq!(proxy_namespace(&ty, "_Proxy", true), ["App", "Document", "_Proxy", "Article"]);
/// ```
pub fn proxy_namespace(ty: &dyn TypeDescriptor, segment: &str, with_name: bool) -> Vec<String> {
    let mut namespace = ty.namespace().to_vec();
    namespace.push(segment.to_string());
    if with_name {
        namespace.push(ty.short_name().to_string());
    }
    namespace
}

impl ProxyClass {
    /// Build the proxy model for `ty` from its accessor plans.
    pub fn build(ty: &dyn TypeDescriptor, plans: &[AccessorPlan], options: &ModelOptions) -> Self {
        let mut members = vec![Member::InitFlagField, Member::IsInitialized, Member::SetInitialized];
        for plan in plans {
            if plan.getter.generate {
                members.push(Member::Getter {
                    method: plan.getter.name.clone(),
                    property: plan.property.clone(),
                });
            }
            if plan.setter.generate {
                members.push(Member::Setter {
                    method: plan.setter.name.clone(),
                    property: plan.property.clone(),
                });
            }
        }

        Self {
            namespace: proxy_namespace(ty, &options.proxy_segment, options.qualify_with_name),
            name: ty.short_name().to_string(),
            base: ty.qualified_name(),
            marker: options.marker.clone(),
            members,
        }
    }

    /// Fully qualified name of the proxy type.
    pub fn qualified_name(&self) -> QualifiedName {
        let mut segments = self.namespace.clone();
        segments.push(self.name.clone());
        QualifiedName::new(segments)
    }

    /// Getter and setter members only.
    pub fn accessors(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| matches!(m, Member::Getter { .. } | Member::Setter { .. }))
    }

    pub fn defines_method(&self, name: &str) -> bool {
        self.accessors().any(|m| m.method_name() == Some(name))
    }
}
