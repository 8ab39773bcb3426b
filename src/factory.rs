//! Proxy factory
//!
//! The factory runs the whole pipeline for a type: introspect its properties, plan the missing accessors, build
//! the proxy model, and render it with the configured backend.
//!
//! ## Notes
//!
//! - Generation is a pure function of the type description and the config. The factory holds no caches, so it
//!   can be shared freely between threads.
//! - Persisting the generated source is the caller's business (see `docproxy generate --out`).

use std::fmt;
use std::path::PathBuf;

use docproxy_core::keywords::is_identifier;
use docproxy_core::{
    ModelOptions, ProxyClass, QualifiedName, TypeDescriptor, TypeRegistry, collect_property_names, plan_accessors,
    proxy_namespace,
};

use crate::backend::Backend;
use crate::config::GeneratorConfig;
use crate::error::{EmitError, GenerationError};

/// Generated proxy source and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Derived namespace, joined with the target's separator.
    pub namespace: String,
    /// Fully qualified proxy type name.
    pub class_name: String,
    /// File path relative to an output directory.
    pub relative_path: PathBuf,
    /// Complete source text.
    pub code: String,
}

impl GeneratedSource {
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn into_string(self) -> String {
        self.code
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Generates lazy-initialization proxies for document types.
#[derive(Debug, Clone, Default)]
pub struct ProxyFactory {
    config: GeneratorConfig,
}

impl ProxyFactory {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn backend(&self) -> &'static dyn Backend {
        self.config.target.backend()
    }

    fn model_options(&self) -> Result<ModelOptions, EmitError> {
        let segment = self.config.proxy_segment();
        if !is_identifier(segment) {
            return Err(EmitError::InvalidName {
                kind: "proxy segment",
                name: segment.to_string(),
            });
        }
        let marker = self.config.marker();
        let invalid_marker = || EmitError::InvalidName {
            kind: "marker",
            name: marker.to_string(),
        };
        let marker_name = QualifiedName::parse(marker).ok_or_else(invalid_marker)?;
        if !marker_name.segments().iter().all(|s| is_identifier(s)) {
            return Err(invalid_marker());
        }
        Ok(ModelOptions {
            proxy_segment: segment.to_string(),
            qualify_with_name: self.config.qualify_with_name,
            marker: marker_name,
        })
    }

    /// Derived namespace of the proxy for `ty`.
    ///
    /// ## Parameters
    /// - `with_name`: also append the type's short name, independently of the config.
    ///
    /// ## Examples
    /// ```rust
    /// use docproxy::{ClassDescriptor, ProxyFactory};
    /// let factory = ProxyFactory::default();
    /// let ty = ClassDescriptor::new("App\\Document\\Article");
    /// assert_eq!(factory.proxy_namespace(&ty, false), "App\\Document\\_Proxy");
    /// assert_eq!(factory.proxy_namespace(&ty, true), "App\\Document\\_Proxy\\Article");
    /// ```
    pub fn proxy_namespace(&self, ty: &dyn TypeDescriptor, with_name: bool) -> String {
        proxy_namespace(ty, self.config.proxy_segment(), with_name).join(self.backend().namespace_separator())
    }

    /// Fully qualified name of the proxy type for `ty`.
    pub fn proxy_class_name(&self, ty: &dyn TypeDescriptor) -> String {
        let separator = self.backend().namespace_separator();
        let namespace = self.proxy_namespace(ty, self.config.qualify_with_name);
        format!("{namespace}{separator}{}", ty.short_name())
    }

    /// Introspect `ty` and build its proxy model without rendering it.
    pub fn build_model(&self, ty: &dyn TypeDescriptor) -> Result<ProxyClass, GenerationError> {
        let options = self.model_options()?;
        let properties = collect_property_names(ty)?;
        let plans = plan_accessors(ty, &properties);
        Ok(ProxyClass::build(ty, &plans, &options))
    }

    /// Generate the proxy source for `ty`.
    ///
    /// ## Errors
    /// - [`GenerationError::Resolution`] if `ty` (or an ancestor) cannot be introspected.
    /// - [`GenerationError::Emission`] if the configured names or a property type cannot be rendered.
    #[tracing::instrument(skip_all, fields(type_name = %ty.qualified_name(), target = %self.config.target))]
    pub fn generate(&self, ty: &dyn TypeDescriptor) -> Result<GeneratedSource, GenerationError> {
        let class = self.build_model(ty)?;
        let backend = self.backend();
        let code = backend.render(&class, &self.config)?;
        tracing::debug!(members = class.members.len(), bytes = code.len(), "generated proxy");

        Ok(GeneratedSource {
            namespace: class.namespace.join(backend.namespace_separator()),
            class_name: class.qualified_name().join(backend.namespace_separator()),
            relative_path: backend.relative_path(&class),
            code,
        })
    }

    /// Generate proxies for every declared type, in declaration order.
    ///
    /// Fails on the first type that cannot be generated; no partial result is returned.
    pub fn generate_all(&self, registry: &TypeRegistry) -> Result<Vec<GeneratedSource>, GenerationError> {
        registry
            .names()
            .map(|name| {
                let ty = registry.resolve(name)?;
                self.generate(&ty)
            })
            .collect()
    }

    /// Source of the capability marker the proxies implement.
    pub fn marker_source(&self) -> Result<String, GenerationError> {
        Ok(self.backend().render_marker(&self.config)?)
    }
}
