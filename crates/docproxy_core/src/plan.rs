//! Decide which accessors a proxy has to add.
//!
//! Every property gets a canonical getter and setter identifier. An accessor is only generated when the target
//! type does not already define a method with that identifier, spelled either as written (`getBody`) or in the
//! snake case Rust proxies use (`get_body`); getter and setter are decided independently.

use std::collections::HashSet;

use crate::descriptor::{Property, TypeDescriptor};
use crate::introspect::PropertySet;
use crate::naming::{getter_name, setter_name, snake_case};

/// One accessor identifier and whether the proxy must define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    pub generate: bool,
}

/// Getter/setter decision for a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorPlan {
    pub property: Property,
    pub getter: Accessor,
    pub setter: Accessor,
}

impl AccessorPlan {
    /// Number of accessors this plan generates (0, 1 or 2).
    pub fn generated_count(&self) -> usize {
        usize::from(self.getter.generate) + usize::from(self.setter.generate)
    }
}

/// Plan accessors for every property in `properties`, in set order.
///
/// ## Notes
/// - Two distinct properties can classify to the same identifier (`published_at` and `publishedAt`). Only the
///   first one gets the accessor; emitting it twice would not load.
#[tracing::instrument(skip_all, fields(type_name = ty.short_name(), property_count = properties.len()))]
pub fn plan_accessors(ty: &dyn TypeDescriptor, properties: &PropertySet) -> Vec<AccessorPlan> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut decide = |name: String| Accessor {
        generate: !ty.has_method(&name)
            && !ty.has_method(&snake_case(&name))
            && claimed.insert(name.to_ascii_lowercase()),
        name,
    };

    let plans: Vec<AccessorPlan> = properties
        .iter()
        .map(|property| AccessorPlan {
            property: property.clone(),
            getter: decide(getter_name(&property.name)),
            setter: decide(setter_name(&property.name)),
        })
        .collect();

    tracing::debug!(
        accessors = plans.iter().map(AccessorPlan::generated_count).sum::<usize>(),
        "planned accessors"
    );
    plans
}
