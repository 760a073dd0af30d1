//! DI Resolver
//!
//! Analysis phase of a dependency-injection container: turns the parameter
//! list of a constructor or callable into one [`BindingDescription`] per
//! parameter, without instantiating anything.
//!
//! This crate provides:
//! - [`introspect`]: traits through which target metadata is read
//! - [`resolver`]: the [`ParameterResolver`] and the per-parameter algorithm
//! - [`error`]: [`ResolveError`] and [`NotInstantiableError`]
//!
//! # Example
//!
//! ```
//! use di_resolver::{DependencyResolver, ParameterResolver};
//! use di_types::{
//!     BindingDescription, ConstructorSpec, DeclaredType, ParameterSpec, SignatureSpec, TypeSpec,
//! };
//! use std::collections::HashMap;
//!
//! let mailer = TypeSpec::class("Mailer").with_constructor(ConstructorSpec::public(
//!     SignatureSpec::new(vec![
//!         ParameterSpec::new("logger").with_type(DeclaredType::parse("Logger").unwrap()),
//!     ]),
//! ));
//! let types: HashMap<String, TypeSpec> = [("Mailer".to_string(), mailer)].into();
//!
//! let resolver = ParameterResolver::new(types);
//! let bindings = resolver.resolve_constructor("Mailer").unwrap();
//! assert_eq!(bindings, vec![BindingDescription::class("Logger", false)]);
//! ```

pub mod error;
pub mod introspect;
pub mod resolver;

pub use error::{NotInstantiableError, ResolveError};
pub use introspect::{
    CallableDescriptor, Instantiability, NotInstantiableReason, ParameterDescriptor,
    TypeDescriptor, TypeIntrospector,
};
pub use resolver::{resolve_parameter, resolve_parameters, DependencyResolver, ParameterResolver};

pub use di_types::BindingDescription;
