//! Plain-data descriptions of resolution targets.
//!
//! These structs describe types and callables the way a metadata source
//! reports them: parameters in declaration order, each with an optional
//! declared type and an optional default value. They deserialize from
//! manifest files and can be built directly in code.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{DeclaredType, Value};

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    /// Declared type, if any
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<DeclaredType>,
    /// Default value. A present `null` is a default of `null`, not a missing default.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// An untyped parameter with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default: None,
        }
    }

    pub fn with_type(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Map any present value, including `null`, to `Some`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A callable's parameter list and whether it can be introspected precisely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureSpec {
    /// Implemented outside the described source (native or foreign routine);
    /// declared types and defaults are not trusted.
    #[serde(default)]
    pub opaque: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl SignatureSpec {
    pub fn new(parameters: Vec<ParameterSpec>) -> Self {
        Self {
            opaque: false,
            parameters,
        }
    }

    pub fn opaque(parameters: Vec<ParameterSpec>) -> Self {
        Self {
            opaque: true,
            parameters,
        }
    }
}

/// Constructor visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// An explicit constructor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorSpec {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(flatten)]
    pub signature: SignatureSpec,
}

impl ConstructorSpec {
    pub fn public(signature: SignatureSpec) -> Self {
        Self {
            visibility: Visibility::Public,
            signature,
        }
    }
}

/// Kind of a described type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Abstract,
    Interface,
    Trait,
    Enum,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Abstract => "abstract",
            TypeKind::Interface => "interface",
            TypeKind::Trait => "trait",
            TypeKind::Enum => "enum",
        }
    }
}

/// A described type and its constructor, if it declares one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<ConstructorSpec>,
}

impl TypeSpec {
    /// A concrete class with no explicit constructor.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            constructor: None,
        }
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructor = Some(constructor);
        self
    }
}

/// A named free-standing callable (function, closure, or method).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallableSpec {
    pub name: String,
    #[serde(flatten)]
    pub signature: SignatureSpec,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_default_null_is_present() {
        let param: ParameterSpec =
            serde_json::from_value(json!({"name": "cache", "default": null})).unwrap();
        assert_eq!(param.default, Some(Value::Null));

        let param: ParameterSpec = serde_json::from_value(json!({"name": "cache"})).unwrap();
        assert_eq!(param.default, None);
    }

    #[test]
    fn test_parameter_type_is_parsed() {
        let param: ParameterSpec =
            serde_json::from_value(json!({"name": "logger", "type": "?Logger"})).unwrap();
        let ty = param.declared_type.unwrap();
        assert_eq!(ty.name(), "Logger");
        assert!(ty.allows_null());

        let err = serde_json::from_value::<ParameterSpec>(json!({"name": "x", "type": ""}));
        assert!(err.is_err());
    }

    #[test]
    fn test_type_spec_defaults() {
        let spec: TypeSpec = serde_json::from_value(json!({"name": "Clock"})).unwrap();
        assert_eq!(spec.kind, TypeKind::Class);
        assert!(spec.constructor.is_none());

        let spec: TypeSpec = serde_json::from_value(json!({
            "name": "Mailer",
            "constructor": {
                "visibility": "private",
                "parameters": [{"name": "transport", "type": "Transport"}]
            }
        }))
        .unwrap();
        let ctor = spec.constructor.unwrap();
        assert_eq!(ctor.visibility, Visibility::Private);
        assert!(!ctor.signature.opaque);
        assert_eq!(ctor.signature.parameters.len(), 1);
    }

    #[test]
    fn test_callable_spec_flattens_signature() {
        let spec: CallableSpec = serde_json::from_value(json!({
            "name": "strlen",
            "opaque": true,
            "parameters": [{"name": "value", "type": "string"}]
        }))
        .unwrap();
        assert!(spec.signature.opaque);
        assert_eq!(spec.signature.parameters[0].name, "value");
    }
}
