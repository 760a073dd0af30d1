//! Whole-manifest resolution check.
//!
//! Resolves every instantiable type and every callable of a manifest and
//! collects the parameters a container would fail on.

use di_resolver::{Instantiability, ParameterResolver, TypeDescriptor};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

use crate::manifest::ManifestIntrospector;
use crate::report::ResolutionReport;

/// A type skipped because it cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedType {
    pub name: String,
    pub reason: String,
}

/// A parameter that resolved to an invalid definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvableParameter {
    pub target: String,
    pub position: usize,
    pub parameter: String,
    pub declared_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub reports: Vec<ResolutionReport>,
    pub skipped: Vec<SkippedType>,
    pub unresolvable: Vec<UnresolvableParameter>,
}

impl CheckReport {
    pub fn run(resolver: &ParameterResolver<ManifestIntrospector>) -> Self {
        let mut check = CheckReport::default();
        let introspector = resolver.introspector();

        for ty in introspector.types() {
            if let Instantiability::NotInstantiable(reason) = ty.instantiability() {
                check.skipped.push(SkippedType {
                    name: ty.name.clone(),
                    reason: reason.to_string(),
                });
                continue;
            }
            match ResolutionReport::for_constructor(resolver, &ty.name) {
                Ok(report) => check.push(report),
                // Types come from the same introspector, so lookup cannot miss
                Err(err) => warn!(type_name = %ty.name, error = %err, "constructor check failed"),
            }
        }

        for callable in introspector.callables() {
            check.push(ResolutionReport::for_callable(
                resolver,
                &callable.name,
                callable,
            ));
        }

        check
    }

    fn push(&mut self, report: ResolutionReport) {
        for entry in report.invalid_entries() {
            self.unresolvable.push(UnresolvableParameter {
                target: report.target.clone(),
                position: entry.position,
                parameter: entry.parameter.clone(),
                declared_type: entry.declared_type.clone(),
            });
        }
        self.reports.push(report);
    }

    pub fn is_clean(&self) -> bool {
        self.unresolvable.is_empty()
    }

    pub fn format_text(&self) -> String {
        let mut out = String::new();
        for item in &self.unresolvable {
            let declared = item
                .declared_type
                .as_deref()
                .map(|ty| format!(" ({ty})"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "[INVALID] {} #{} ${}{}: no default and no resolvable class type",
                item.target, item.position, item.parameter, declared
            );
        }
        for skipped in &self.skipped {
            let _ = writeln!(out, "[SKIP] {}: {}", skipped.name, skipped.reason);
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "Summary: {} targets resolved, {} unresolvable parameters, {} non-instantiable types",
            self.reports.len(),
            self.unresolvable.len(),
            self.skipped.len()
        );
        out
    }
}
