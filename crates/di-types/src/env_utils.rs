//! Environment variable helpers for configuration fallbacks.
//!
//! # Example
//!
//! ```
//! use di_types::env_utils::{env_bool, env_path};
//!
//! let json_output = env_bool("DI_INSPECT_JSON");
//! let manifest = env_path("DI_INSPECT_MANIFEST");
//! ```

use std::path::PathBuf;

/// Check if an environment variable is set to a truthy value.
///
/// Returns `true` if the variable is set to "1", "true", "yes", or "on" (case-insensitive).
pub fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Read a non-empty environment variable as a path.
pub fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variables() {
        assert!(!env_bool("DI_TYPES_TEST_SURELY_UNSET_BOOL"));
        assert!(env_path("DI_TYPES_TEST_SURELY_UNSET_PATH").is_none());
    }
}
