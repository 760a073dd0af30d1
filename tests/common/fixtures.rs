//! Fixture loading utilities for tests.

use di_inspect::ManifestIntrospector;
use di_resolver::ParameterResolver;
use std::path::PathBuf;

/// YAML fixture manifest, relative to the project root.
pub const FIXTURE_YAML: &str = "tests/fixtures/services.yaml";

/// JSON fixture manifest, relative to the project root.
pub const FIXTURE_JSON: &str = "tests/fixtures/services.json";

/// Absolute path of a fixture file.
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Load a resolver over a fixture manifest.
///
/// # Panics
///
/// Panics if the fixture is missing or invalid.
pub fn fixture_resolver(relative: &str) -> ParameterResolver<ManifestIntrospector> {
    let introspector =
        ManifestIntrospector::load(&fixture_path(relative)).expect("fixture manifest should load");
    ParameterResolver::new(introspector)
}
