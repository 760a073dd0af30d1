//! # Target Introspection
//!
//! Traits through which the resolver reads the facts it needs about a
//! target. A metadata source (a manifest, generated descriptors, a registry
//! built at startup) implements these; the resolution algorithm depends on
//! nothing else.
//!
//! | Trait | Describes |
//! |-------|-----------|
//! | [`ParameterDescriptor`] | one declared parameter |
//! | [`CallableDescriptor`] | a parameter list plus the opaque flag |
//! | [`TypeDescriptor`] | a type: instantiability and constructor |
//! | [`TypeIntrospector`] | lookup of types by name |
//!
//! The plain-data specs from `di_types` implement all of them.

use di_types::{
    CallableSpec, ConstructorSpec, DeclaredType, ParameterSpec, SignatureSpec, TypeKind, TypeSpec,
    Value, Visibility,
};
use std::collections::HashMap;
use std::fmt;

/// Facts about one declared parameter.
pub trait ParameterDescriptor {
    /// Parameter name. Used for diagnostics only, never for resolution.
    fn name(&self) -> &str;

    fn declared_type(&self) -> Option<&DeclaredType>;

    /// The default value, if one is available. A parameter with a default
    /// is optional.
    fn default_value(&self) -> Option<&Value>;
}

/// A parameter list in declaration order.
pub trait CallableDescriptor {
    type Parameter: ParameterDescriptor;

    fn parameters(&self) -> &[Self::Parameter];

    /// Whether declared types and defaults of this target cannot be trusted,
    /// e.g. a routine implemented outside the introspectable source.
    fn is_opaque(&self) -> bool;
}

/// Why a type cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotInstantiableReason {
    Abstract,
    Interface,
    Trait,
    Enum,
    /// The constructor exists but is not public.
    InaccessibleConstructor,
}

impl fmt::Display for NotInstantiableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NotInstantiableReason::Abstract => "type is abstract",
            NotInstantiableReason::Interface => "type is an interface",
            NotInstantiableReason::Trait => "type is a trait",
            NotInstantiableReason::Enum => "type is an enum",
            NotInstantiableReason::InaccessibleConstructor => "constructor is not public",
        };
        f.write_str(reason)
    }
}

/// Whether a type can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instantiability {
    Instantiable,
    NotInstantiable(NotInstantiableReason),
}

impl Instantiability {
    pub fn is_instantiable(self) -> bool {
        matches!(self, Instantiability::Instantiable)
    }
}

/// Facts about a type.
pub trait TypeDescriptor {
    type Constructor: CallableDescriptor;

    fn name(&self) -> &str;

    fn instantiability(&self) -> Instantiability;

    /// The explicit constructor, or `None` for zero-argument construction.
    fn constructor(&self) -> Option<&Self::Constructor>;
}

/// Lookup of type descriptors by name.
pub trait TypeIntrospector {
    type Type: TypeDescriptor;

    fn find_type(&self, name: &str) -> Option<&Self::Type>;
}

impl<T: TypeIntrospector + ?Sized> TypeIntrospector for &T {
    type Type = T::Type;

    fn find_type(&self, name: &str) -> Option<&Self::Type> {
        (**self).find_type(name)
    }
}

impl<T: TypeDescriptor> TypeIntrospector for HashMap<String, T> {
    type Type = T;

    fn find_type(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

// =============================================================================
// Spec implementations
// =============================================================================

impl ParameterDescriptor for ParameterSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

impl CallableDescriptor for SignatureSpec {
    type Parameter = ParameterSpec;

    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn is_opaque(&self) -> bool {
        self.opaque
    }
}

impl CallableDescriptor for ConstructorSpec {
    type Parameter = ParameterSpec;

    fn parameters(&self) -> &[ParameterSpec] {
        &self.signature.parameters
    }

    fn is_opaque(&self) -> bool {
        self.signature.opaque
    }
}

impl CallableDescriptor for CallableSpec {
    type Parameter = ParameterSpec;

    fn parameters(&self) -> &[ParameterSpec] {
        &self.signature.parameters
    }

    fn is_opaque(&self) -> bool {
        self.signature.opaque
    }
}

impl TypeDescriptor for TypeSpec {
    type Constructor = ConstructorSpec;

    fn name(&self) -> &str {
        &self.name
    }

    fn instantiability(&self) -> Instantiability {
        let reason = match self.kind {
            TypeKind::Class => match &self.constructor {
                Some(ctor) if ctor.visibility != Visibility::Public => {
                    NotInstantiableReason::InaccessibleConstructor
                }
                _ => return Instantiability::Instantiable,
            },
            TypeKind::Abstract => NotInstantiableReason::Abstract,
            TypeKind::Interface => NotInstantiableReason::Interface,
            TypeKind::Trait => NotInstantiableReason::Trait,
            TypeKind::Enum => NotInstantiableReason::Enum,
        };
        Instantiability::NotInstantiable(reason)
    }

    fn constructor(&self) -> Option<&ConstructorSpec> {
        self.constructor.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_spec_instantiability() {
        assert_eq!(
            TypeSpec::class("Clock").instantiability(),
            Instantiability::Instantiable
        );
        assert_eq!(
            TypeSpec::class("Repo")
                .with_kind(TypeKind::Interface)
                .instantiability(),
            Instantiability::NotInstantiable(NotInstantiableReason::Interface)
        );

        let private_ctor = ConstructorSpec {
            visibility: Visibility::Private,
            signature: SignatureSpec::default(),
        };
        assert_eq!(
            TypeSpec::class("Singleton")
                .with_constructor(private_ctor)
                .instantiability(),
            Instantiability::NotInstantiable(NotInstantiableReason::InaccessibleConstructor)
        );
    }

    #[test]
    fn test_parameter_spec_default_distinguishes_null() {
        let param = ParameterSpec::new("retries");
        assert!(ParameterDescriptor::default_value(&param).is_none());
        let param = param.with_default(Value::Null);
        assert_eq!(ParameterDescriptor::default_value(&param), Some(&Value::Null));
    }
}
