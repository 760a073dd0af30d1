//! Manifest-backed target introspection.
//!
//! A manifest describes types and callables in YAML or JSON:
//!
//! ```yaml
//! types:
//!   - name: App\Mailer
//!     constructor:
//!       parameters:
//!         - { name: logger, type: Psr\Log\LoggerInterface }
//!         - { name: retries, type: int, default: 5 }
//!   - name: App\Repository
//!     kind: interface
//! callables:
//!   - name: strlen
//!     opaque: true
//!     parameters:
//!       - { name: value, type: string }
//! ```
//!
//! `opaque: true` marks routines implemented outside the described source
//! (native or foreign functions, constructors of runtime builtin types).
//! Their declared types and defaults are not trusted during resolution.

use anyhow::{bail, Context, Result};
use di_resolver::TypeIntrospector;
use di_types::{CallableSpec, SignatureSpec, TypeSpec};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Types and callables described by a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
    #[serde(default)]
    pub callables: Vec<CallableSpec>,
}

impl Manifest {
    /// Load and validate a manifest. `.yaml`/`.yml` files are parsed as YAML,
    /// everything else as JSON.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let manifest = if ext == "yaml" || ext == "yml" {
            Self::from_yaml_str(&raw)
                .with_context(|| format!("Invalid YAML manifest in {}", path.display()))?
        } else {
            Self::from_json_str(&raw)
                .with_context(|| format!("Invalid JSON manifest in {}", path.display()))?
        };

        manifest.validate()?;
        debug!(
            path = %path.display(),
            types = manifest.types.len(),
            callables = manifest.callables.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        self.collect_validation_issues(&mut issues);
        if issues.is_empty() {
            return Ok(());
        }

        let formatted = issues
            .into_iter()
            .enumerate()
            .map(|(idx, issue)| format!("  {}. {}", idx + 1, issue))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Manifest validation failed:\n{formatted}");
    }

    fn collect_validation_issues(&self, issues: &mut Vec<String>) {
        let mut type_names = HashSet::new();
        for ty in &self.types {
            if ty.name.trim().is_empty() {
                issues.push("type with an empty name".to_string());
                continue;
            }
            if !type_names.insert(normalize_type_name(&ty.name)) {
                issues.push(format!("duplicate type '{}'", ty.name));
            }
            if let Some(ctor) = &ty.constructor {
                collect_signature_issues(
                    &format!("constructor of '{}'", ty.name),
                    &ctor.signature,
                    issues,
                );
            }
        }

        let mut callable_names = HashSet::new();
        for callable in &self.callables {
            if callable.name.trim().is_empty() {
                issues.push("callable with an empty name".to_string());
                continue;
            }
            if !callable_names.insert(callable.name.as_str()) {
                issues.push(format!("duplicate callable '{}'", callable.name));
            }
            collect_signature_issues(
                &format!("callable '{}'", callable.name),
                &callable.signature,
                issues,
            );
        }
    }
}

fn collect_signature_issues(owner: &str, signature: &SignatureSpec, issues: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for param in &signature.parameters {
        if param.name.trim().is_empty() {
            issues.push(format!("{owner} has a parameter with an empty name"));
        } else if !seen.insert(param.name.as_str()) {
            issues.push(format!("{owner} declares parameter '{}' twice", param.name));
        }
    }
}

/// Type names are matched without a leading namespace separator.
fn normalize_type_name(name: &str) -> &str {
    name.trim().trim_start_matches('\\')
}

/// [`TypeIntrospector`] over a validated [`Manifest`].
#[derive(Debug, Clone, Default)]
pub struct ManifestIntrospector {
    types: BTreeMap<String, TypeSpec>,
    callables: BTreeMap<String, CallableSpec>,
}

impl ManifestIntrospector {
    pub fn new(manifest: Manifest) -> Result<Self> {
        manifest.validate()?;
        let types = manifest
            .types
            .into_iter()
            .map(|ty| (normalize_type_name(&ty.name).to_string(), ty))
            .collect();
        let callables = manifest
            .callables
            .into_iter()
            .map(|callable| (callable.name.clone(), callable))
            .collect();
        Ok(Self { types, callables })
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::new(Manifest::load_from_path(path)?)
    }

    pub fn callable(&self, name: &str) -> Option<&CallableSpec> {
        self.callables.get(name)
    }

    /// Described types, ordered by name.
    pub fn types(&self) -> impl Iterator<Item = &TypeSpec> {
        self.types.values()
    }

    /// Described callables, ordered by name.
    pub fn callables(&self) -> impl Iterator<Item = &CallableSpec> {
        self.callables.values()
    }
}

impl TypeIntrospector for ManifestIntrospector {
    type Type = TypeSpec;

    fn find_type(&self, name: &str) -> Option<&TypeSpec> {
        self.types.get(normalize_type_name(name))
    }
}
