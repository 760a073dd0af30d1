//! Shared types for the di-inspect workspace.
//!
//! - [`definition`]: the [`BindingDescription`] vocabulary produced by
//!   parameter resolution and consumed by a container
//! - [`declared_type`]: parsing of declared parameter types
//! - [`signature`]: plain-data descriptions of types and callables
//! - [`env_utils`]: environment variable helpers

pub mod declared_type;
pub mod definition;
pub mod env_utils;
pub mod signature;

pub use declared_type::{is_builtin_type, DeclaredType, DeclaredTypeError, TypeCategory};
pub use definition::{BindingDescription, ClassDefinition, InvalidDefinition, ValueDefinition};
pub use signature::{
    CallableSpec, ConstructorSpec, ParameterSpec, SignatureSpec, TypeKind, TypeSpec, Visibility,
};

/// Literal argument value. `Value::Null` is the null literal.
pub use serde_json::Value;
