//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use docproxy_core::{ClassDescriptor, TypeDescriptor, TypeRegistry, collect_property_names, plan_accessors};

use super::{CliError, CliResult, ExitCode, GeneratorArgs};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::factory::{GeneratedSource, ProxyFactory};
use crate::manifest::Manifest;

/// Maximum manifest file size (16 MB)
const MAX_MANIFEST_SIZE: u64 = 16 * 1024 * 1024;

/// Build the generator config from command-line options.
pub fn config(args: &GeneratorArgs, with_name: bool) -> GeneratorConfig {
    let mut config = GeneratorConfig::new()
        .with_target(args.target)
        .with_qualify_with_name(with_name);
    if let Some(segment) = &args.segment {
        config = config.with_proxy_segment(segment.clone());
    }
    if let Some(marker) = &args.marker {
        config = config.with_marker(marker.clone());
    }
    config
}

/// Load a manifest and turn it into a registry.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed or exceeds `MAX_MANIFEST_SIZE`
/// - The JSON is malformed or declares a type twice
pub fn load_registry(path: &Path) -> CliResult<TypeRegistry> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;
    if metadata.len() > MAX_MANIFEST_SIZE {
        return Err(CliError::failure(format!(
            "Manifest '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_MANIFEST_SIZE
        )));
    }

    Manifest::load(path)
        .and_then(Manifest::into_registry)
        .map_err(CliError::diagnostic)
}

fn resolve(registry: &TypeRegistry, name: &str) -> CliResult<ClassDescriptor> {
    registry
        .resolve(name)
        .map_err(|e| CliError::diagnostic(GenerationError::from(e)))
}

/// Validate the output directory to prevent path traversal.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    for component in out_dir.components() {
        if let std::path::Component::ParentDir = component {
            return Err(CliError::failure(format!(
                "Output directory '{}' contains path traversal (..)",
                out_dir.display()
            )));
        }
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

/// Generate proxies for `types` (every declared type when empty).
pub fn generate(
    manifest: &Path,
    types: &[String],
    config: &GeneratorConfig,
    out_dir: Option<&Path>,
    check: bool,
) -> CliResult<ExitCode> {
    let registry = load_registry(manifest)?;
    let factory = ProxyFactory::new(config.clone());

    let sources = if types.is_empty() {
        factory.generate_all(&registry).map_err(CliError::diagnostic)?
    } else {
        let mut sources = Vec::with_capacity(types.len());
        for name in types {
            let ty = resolve(&registry, name)?;
            sources.push(factory.generate(&ty).map_err(CliError::diagnostic)?);
        }
        sources
    };

    match out_dir {
        Some(dir) => write_sources(dir, &sources, check),
        None => {
            for (i, source) in sources.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", source);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Write generated sources under `dir`, leaving unchanged files untouched.
///
/// In check mode nothing is written; the command fails if any file would change.
pub fn write_sources(dir: &Path, sources: &[GeneratedSource], check: bool) -> CliResult<ExitCode> {
    validate_output_dir(dir)?;

    let mut written = 0;
    let mut stale = 0;
    for source in sources {
        let path = dir.join(&source.relative_path);
        let unchanged = fs::read_to_string(&path).is_ok_and(|existing| existing == source.code);
        if unchanged {
            tracing::debug!(path = %path.display(), "unchanged");
            continue;
        }

        if check {
            println!("Out of date: {}", path.display());
            stale += 1;
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::failure(format!("Error creating {}: {}", parent.display(), e)))?;
        }
        fs::write(&path, &source.code)
            .map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
        tracing::info!(class = %source.class_name, path = %path.display(), "wrote proxy");
        written += 1;
    }

    if check {
        if stale > 0 {
            return Err(CliError::failure(format!("\n{} of {} proxy file(s) out of date", stale, sources.len())));
        }
        println!("✓ {} proxy file(s) up to date", sources.len());
    } else {
        println!("✓ {} proxy file(s) written, {} unchanged", written, sources.len() - written);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the accessor plan of a declared type.
pub fn plan(manifest: &Path, type_name: &str) -> CliResult<ExitCode> {
    let registry = load_registry(manifest)?;
    let ty = resolve(&registry, type_name)?;
    let properties = collect_property_names(&ty).map_err(|e| CliError::diagnostic(GenerationError::from(e)))?;

    println!("{}", ty.qualified_name());
    for plan in plan_accessors(&ty, &properties) {
        let decision = |generate: bool| if generate { "generate" } else { "skip" };
        println!(
            "  {}: {} ({}), {} ({})",
            plan.property.name,
            plan.getter.name,
            decision(plan.getter.generate),
            plan.setter.name,
            decision(plan.setter.generate)
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the derived proxy namespace of a declared type.
pub fn namespace(manifest: &Path, type_name: &str, config: &GeneratorConfig, with_name: bool) -> CliResult<ExitCode> {
    let registry = load_registry(manifest)?;
    let ty = resolve(&registry, type_name)?;
    let factory = ProxyFactory::new(config.clone());
    println!("{}", factory.proxy_namespace(&ty, with_name));
    Ok(ExitCode::SUCCESS)
}

/// Print the capability marker source.
pub fn marker(config: &GeneratorConfig) -> CliResult<ExitCode> {
    let factory = ProxyFactory::new(config.clone());
    let source = factory.marker_source().map_err(CliError::diagnostic)?;
    print!("{}", source);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("docproxy_cli_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn source(path: &str, code: &str) -> GeneratedSource {
        GeneratedSource {
            namespace: "App\\_Proxy".to_string(),
            class_name: "App\\_Proxy\\Article".to_string(),
            relative_path: PathBuf::from(path),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_validate_output_dir_rejects_traversal() {
        assert!(validate_output_dir(Path::new("gen/../../etc")).is_err());
        assert!(validate_output_dir(Path::new("gen/proxies")).is_ok());
    }

    #[test]
    fn test_write_then_check() {
        let dir = scratch("write_then_check");
        let sources = [source("App/_Proxy/Article.php", "<?php\n")];

        assert_eq!(write_sources(&dir, &sources, true).unwrap_err().exit_code, ExitCode::FAILURE);
        assert!(!dir.join("App/_Proxy/Article.php").exists());

        write_sources(&dir, &sources, false).unwrap();
        assert_eq!(fs::read_to_string(dir.join("App/_Proxy/Article.php")).unwrap(), "<?php\n");
        assert_eq!(write_sources(&dir, &sources, true).unwrap(), ExitCode::SUCCESS);

        let changed = [source("App/_Proxy/Article.php", "<?php\n// changed\n")];
        assert!(write_sources(&dir, &changed, true).is_err());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_manifest() {
        let err = load_registry(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.message.contains("does/not/exist.json"));
    }

    #[test]
    fn test_config_from_args() {
        let args = GeneratorArgs {
            target: crate::backend::Target::Rust,
            segment: Some("lazy".to_string()),
            marker: None,
        };
        let config = config(&args, true);
        assert_eq!(config.proxy_segment(), "lazy");
        assert_eq!(config.marker(), "::docproxy::ProxyInterface");
        assert!(config.qualify_with_name);
    }
}
