//! # Parameter Resolution
//!
//! Classifies every parameter of a constructor or callable into a
//! [`BindingDescription`], without invoking anything.
//!
//! Each parameter is decided on its own, in declaration order:
//!
//! ```text
//! nullable declared type, or opaque target ──► Value(default or null)
//!            │ no
//!            ▼
//! default available ─────────────────────────► Value(default)
//!            │ no
//!            ▼
//! structured declared type ──────────────────► Class(type name, nullable = false)
//!            │ no
//!            ▼
//!                                               Invalid
//! ```
//!
//! Parameter names never take part in the decision. The resolver holds no
//! mutable state, so resolving the same target twice yields equal results
//! and concurrent calls need no coordination.

use di_types::{is_builtin_type, BindingDescription, DeclaredType, Value};
use tracing::{debug, trace};

use crate::error::{NotInstantiableError, ResolveError};
use crate::introspect::{
    CallableDescriptor, Instantiability, ParameterDescriptor, TypeDescriptor, TypeIntrospector,
};

/// Resolution contract consumed by a container.
pub trait DependencyResolver {
    /// Resolve the constructor parameters of the named type.
    ///
    /// Returns an empty list for a type without an explicit constructor.
    /// Fails if the type is unknown or cannot be instantiated.
    fn resolve_constructor(&self, type_name: &str)
        -> Result<Vec<BindingDescription>, ResolveError>;

    /// Resolve the parameters of a callable. Never fails.
    fn resolve_callable<C: CallableDescriptor + ?Sized>(
        &self,
        callable: &C,
    ) -> Vec<BindingDescription>;
}

/// Resolves parameters by declared type and default value, looking types
/// up through a [`TypeIntrospector`].
#[derive(Debug, Clone, Default)]
pub struct ParameterResolver<I> {
    introspector: I,
}

impl<I: TypeIntrospector> ParameterResolver<I> {
    pub fn new(introspector: I) -> Self {
        Self { introspector }
    }

    pub fn introspector(&self) -> &I {
        &self.introspector
    }
}

impl<I: TypeIntrospector> DependencyResolver for ParameterResolver<I> {
    fn resolve_constructor(
        &self,
        type_name: &str,
    ) -> Result<Vec<BindingDescription>, ResolveError> {
        let ty = self
            .introspector
            .find_type(type_name)
            .ok_or_else(|| ResolveError::UnknownType {
                type_name: type_name.to_string(),
            })?;

        if let Instantiability::NotInstantiable(reason) = ty.instantiability() {
            debug!(type_name, %reason, "type is not instantiable");
            return Err(NotInstantiableError::new(type_name, reason).into());
        }

        match ty.constructor() {
            Some(constructor) => {
                debug!(
                    type_name,
                    parameters = constructor.parameters().len(),
                    opaque = constructor.is_opaque(),
                    "resolving constructor"
                );
                Ok(resolve_parameters(constructor))
            }
            None => {
                debug!(type_name, "no explicit constructor");
                Ok(Vec::new())
            }
        }
    }

    fn resolve_callable<C: CallableDescriptor + ?Sized>(
        &self,
        callable: &C,
    ) -> Vec<BindingDescription> {
        debug!(
            parameters = callable.parameters().len(),
            opaque = callable.is_opaque(),
            "resolving callable"
        );
        resolve_parameters(callable)
    }
}

/// Resolve every parameter of a callable, in declaration order.
pub fn resolve_parameters<C: CallableDescriptor + ?Sized>(callable: &C) -> Vec<BindingDescription> {
    let opaque = callable.is_opaque();
    callable
        .parameters()
        .iter()
        .map(|parameter| {
            let binding = resolve_parameter(parameter, opaque);
            trace!(parameter = parameter.name(), %binding, "resolved parameter");
            binding
        })
        .collect()
}

/// Decide how a single parameter is supplied.
///
/// `opaque_target` is the opaque flag of the callable the parameter belongs to.
pub fn resolve_parameter<P: ParameterDescriptor + ?Sized>(
    parameter: &P,
    opaque_target: bool,
) -> BindingDescription {
    let declared = parameter.declared_type();

    // Nullable or untrusted: the default if there is one, else null
    if declared.is_some_and(DeclaredType::allows_null) || opaque_target {
        let value = parameter.default_value().cloned().unwrap_or(Value::Null);
        return BindingDescription::value(value);
    }

    if let Some(default) = parameter.default_value() {
        return BindingDescription::value(default.clone());
    }

    match declared {
        // Nullable types were handled above
        Some(ty) if ty.is_structured() && !is_builtin_type(ty.name()) => {
            BindingDescription::class(ty.name(), false)
        }
        _ => BindingDescription::invalid(),
    }
}
