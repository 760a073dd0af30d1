//! Resolution reports.
//!
//! Binding descriptions carry no reference to their parameter; a report
//! pairs each one with the parameter it was derived from so results can be
//! shown by name.

use di_resolver::{
    CallableDescriptor, DependencyResolver, ParameterDescriptor, ParameterResolver, ResolveError,
    TypeDescriptor, TypeIntrospector,
};
use di_types::BindingDescription;
use serde::Serialize;
use std::fmt::Write as _;

/// What kind of target a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Constructor,
    Callable,
}

/// One resolved parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub position: usize,
    pub parameter: String,
    pub declared_type: Option<String>,
    pub binding: BindingDescription,
}

/// Resolution of one target, position by position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    pub target: String,
    pub target_kind: TargetKind,
    pub opaque: bool,
    pub entries: Vec<ReportEntry>,
}

impl ResolutionReport {
    /// Resolve a type's constructor and label every binding.
    pub fn for_constructor<I: TypeIntrospector>(
        resolver: &ParameterResolver<I>,
        type_name: &str,
    ) -> Result<Self, ResolveError> {
        let bindings = resolver.resolve_constructor(type_name)?;
        let constructor = resolver
            .introspector()
            .find_type(type_name)
            .and_then(|ty| ty.constructor());

        let (opaque, entries) = match constructor {
            Some(ctor) => (ctor.is_opaque(), label(ctor, bindings)),
            None => (false, Vec::new()),
        };

        Ok(Self {
            target: type_name.to_string(),
            target_kind: TargetKind::Constructor,
            opaque,
            entries,
        })
    }

    /// Resolve a callable and label every binding.
    pub fn for_callable<I, C>(resolver: &ParameterResolver<I>, name: &str, callable: &C) -> Self
    where
        I: TypeIntrospector,
        C: CallableDescriptor + ?Sized,
    {
        let bindings = resolver.resolve_callable(callable);
        Self {
            target: name.to_string(),
            target_kind: TargetKind::Callable,
            opaque: callable.is_opaque(),
            entries: label(callable, bindings),
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &BindingDescription> {
        self.entries.iter().map(|entry| &entry.binding)
    }

    /// Parameters a container will fail on.
    pub fn invalid_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.binding.is_invalid())
    }

    pub fn format_text(&self) -> String {
        let mut out = String::new();
        let kind = match self.target_kind {
            TargetKind::Constructor => "constructor",
            TargetKind::Callable => "callable",
        };
        let _ = write!(out, "{} {}", kind, self.target);
        if self.opaque {
            out.push_str(" (opaque)");
        }
        out.push('\n');

        if self.entries.is_empty() {
            out.push_str("  (no parameters)\n");
            return out;
        }

        let name_width = self
            .entries
            .iter()
            .map(|entry| entry.parameter.len())
            .max()
            .unwrap_or(0);
        for entry in &self.entries {
            let declared = entry.declared_type.as_deref().unwrap_or("-");
            let _ = writeln!(
                out,
                "  #{} {:<width$}  {:<16} {}",
                entry.position,
                entry.parameter,
                declared,
                entry.binding,
                width = name_width
            );
        }
        out
    }
}

fn label<C: CallableDescriptor + ?Sized>(
    callable: &C,
    bindings: Vec<BindingDescription>,
) -> Vec<ReportEntry> {
    callable
        .parameters()
        .iter()
        .zip(bindings)
        .enumerate()
        .map(|(position, (parameter, binding))| ReportEntry {
            position,
            parameter: parameter.name().to_string(),
            declared_type: parameter.declared_type().map(ToString::to_string),
            binding,
        })
        .collect()
}
