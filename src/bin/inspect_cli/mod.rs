//! CLI subcommand implementations for di-inspect

pub mod callable;
pub mod check;
pub mod constructor;
pub mod list;
pub mod output;

use anyhow::Result;
use di_inspect::{InspectConfig, ManifestIntrospector};
use di_resolver::ParameterResolver;

/// Everything a subcommand needs: the loaded manifest and output mode.
pub struct InspectContext {
    pub resolver: ParameterResolver<ManifestIntrospector>,
    pub json: bool,
}

impl InspectContext {
    pub fn load(config: &InspectConfig) -> Result<Self> {
        let introspector = ManifestIntrospector::load(config.manifest_path()?)?;
        Ok(Self {
            resolver: ParameterResolver::new(introspector),
            json: config.json,
        })
    }

    pub fn introspector(&self) -> &ManifestIntrospector {
        self.resolver.introspector()
    }
}
