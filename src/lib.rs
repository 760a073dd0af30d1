//! DI Inspect
//!
//! Tooling around the dependency parameter resolver:
//!
//! - **Manifests**: describe types and callables in YAML or JSON and use
//!   them as the resolver's introspection source ([`manifest`])
//! - **Reports**: resolved bindings labelled with parameter names and
//!   declared types ([`report`])
//! - **Checks**: resolve a whole manifest and list every parameter a
//!   container would fail on ([`check`])
//!
//! The resolver itself lives in `di_resolver`; the binding vocabulary in
//! `di_types`.

pub mod check;
pub mod config;
pub mod manifest;
pub mod report;

pub use check::CheckReport;
pub use config::InspectConfig;
pub use manifest::{Manifest, ManifestIntrospector};
pub use report::{ReportEntry, ResolutionReport, TargetKind};
