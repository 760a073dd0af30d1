//! Binding definitions emitted by parameter resolution.
//!
//! A [`BindingDescription`] tells a container how to obtain one argument:
//! use a literal ([`ValueDefinition`]), resolve another service by type
//! ([`ClassDefinition`]), or fail when the argument is actually needed
//! ([`InvalidDefinition`]).
//!
//! Definitions are immutable and carry no reference back to the parameter
//! they were derived from.

use serde::Serialize;
use std::fmt;

use crate::Value;

/// A literal argument value, used verbatim by the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueDefinition {
    value: Value,
}

impl ValueDefinition {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The `null` literal.
    pub fn null() -> Self {
        Self { value: Value::Null }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A dependency on another service, looked up by its declared type name.
///
/// `type_name` never names a builtin type; resolution only builds this
/// definition for structured types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDefinition {
    type_name: String,
    nullable: bool,
}

impl ClassDefinition {
    pub fn new(type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            type_name: type_name.into(),
            nullable,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether `null` is an acceptable substitute if the service cannot be built.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// Marker for a parameter no scheme could resolve.
///
/// This is data, not an error: the container decides when to fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InvalidDefinition;

/// How one parameter should eventually be supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingDescription {
    Value(ValueDefinition),
    Class(ClassDefinition),
    Invalid(InvalidDefinition),
}

impl BindingDescription {
    pub fn value(value: Value) -> Self {
        BindingDescription::Value(ValueDefinition::new(value))
    }

    pub fn class(type_name: impl Into<String>, nullable: bool) -> Self {
        BindingDescription::Class(ClassDefinition::new(type_name, nullable))
    }

    pub fn invalid() -> Self {
        BindingDescription::Invalid(InvalidDefinition)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, BindingDescription::Value(_))
    }

    pub fn is_class(&self) -> bool {
        matches!(self, BindingDescription::Class(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, BindingDescription::Invalid(_))
    }
}

impl From<ValueDefinition> for BindingDescription {
    fn from(def: ValueDefinition) -> Self {
        BindingDescription::Value(def)
    }
}

impl From<ClassDefinition> for BindingDescription {
    fn from(def: ClassDefinition) -> Self {
        BindingDescription::Class(def)
    }
}

impl From<InvalidDefinition> for BindingDescription {
    fn from(def: InvalidDefinition) -> Self {
        BindingDescription::Invalid(def)
    }
}

impl fmt::Display for BindingDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingDescription::Value(def) => write!(f, "value({})", def.value),
            BindingDescription::Class(def) if def.nullable => {
                write!(f, "class(?{})", def.type_name)
            }
            BindingDescription::Class(def) => write!(f, "class({})", def.type_name),
            BindingDescription::Invalid(_) => write!(f, "invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(BindingDescription::value(json!(5)).to_string(), "value(5)");
        assert_eq!(
            BindingDescription::value(json!("info")).to_string(),
            "value(\"info\")"
        );
        assert_eq!(
            BindingDescription::class("Logger", false).to_string(),
            "class(Logger)"
        );
        assert_eq!(
            BindingDescription::class("Logger", true).to_string(),
            "class(?Logger)"
        );
        assert_eq!(BindingDescription::invalid().to_string(), "invalid");
    }

    #[test]
    fn test_serialize_is_tagged_by_kind() {
        let value = serde_json::to_value(BindingDescription::value(Value::Null)).unwrap();
        assert_eq!(value, json!({"kind": "value", "value": null}));

        let class = serde_json::to_value(BindingDescription::class("App\\Logger", false)).unwrap();
        assert_eq!(
            class,
            json!({"kind": "class", "type_name": "App\\Logger", "nullable": false})
        );

        let invalid = serde_json::to_value(BindingDescription::invalid()).unwrap();
        assert_eq!(invalid, json!({"kind": "invalid"}));
    }

    #[test]
    fn test_accessors() {
        let def = ClassDefinition::new("Cache", true);
        assert_eq!(def.type_name(), "Cache");
        assert!(def.is_nullable());

        let binding = BindingDescription::from(def);
        assert!(binding.is_class());

        assert_eq!(ValueDefinition::null().value(), &Value::Null);
    }
}
