//! CLI configuration.
//!
//! Command-line flags take precedence; unset flags fall back to the
//! environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DI_INSPECT_MANIFEST` | manifest path |
//! | `DI_INSPECT_JSON` | JSON output when truthy |

use anyhow::{anyhow, Result};
use di_types::env_utils::{env_bool, env_path};
use std::path::{Path, PathBuf};

pub const MANIFEST_ENV: &str = "DI_INSPECT_MANIFEST";
pub const JSON_ENV: &str = "DI_INSPECT_JSON";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectConfig {
    pub manifest: Option<PathBuf>,
    pub json: bool,
}

impl InspectConfig {
    pub fn from_env() -> Self {
        Self {
            manifest: env_path(MANIFEST_ENV),
            json: env_bool(JSON_ENV),
        }
    }

    /// Overlay command-line values. A flag that was not given keeps the
    /// current value.
    pub fn with_cli(mut self, manifest: Option<PathBuf>, json: bool) -> Self {
        if manifest.is_some() {
            self.manifest = manifest;
        }
        self.json |= json;
        self
    }

    pub fn manifest_path(&self) -> Result<&Path> {
        self.manifest.as_deref().ok_or_else(|| {
            anyhow!("No manifest given: pass --manifest <PATH> or set {MANIFEST_ENV}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_manifest() {
        let config = InspectConfig {
            manifest: Some(PathBuf::from("env.yaml")),
            json: false,
        }
        .with_cli(Some(PathBuf::from("cli.yaml")), true);
        assert_eq!(config.manifest_path().unwrap(), Path::new("cli.yaml"));
        assert!(config.json);
    }

    #[test]
    fn test_missing_flags_keep_env_values() {
        let config = InspectConfig {
            manifest: Some(PathBuf::from("env.yaml")),
            json: true,
        }
        .with_cli(None, false);
        assert_eq!(config.manifest_path().unwrap(), Path::new("env.yaml"));
        assert!(config.json);
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let err = InspectConfig::default().manifest_path().unwrap_err();
        assert!(err.to_string().contains(MANIFEST_ENV));
    }
}
