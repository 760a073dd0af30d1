//! Resolution errors.
//!
//! Only constructor resolution can fail. An unresolvable parameter is not
//! an error; it resolves to an `InvalidDefinition`.

use std::fmt;

use crate::introspect::NotInstantiableReason;

/// The requested type cannot be constructed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInstantiableError {
    type_name: String,
    reason: NotInstantiableReason,
}

impl NotInstantiableError {
    pub fn new(type_name: impl Into<String>, reason: NotInstantiableReason) -> Self {
        Self {
            type_name: type_name.into(),
            reason,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn reason(&self) -> NotInstantiableReason {
        self.reason
    }
}

impl fmt::Display for NotInstantiableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Can not instantiate {}: {}",
            self.type_name, self.reason
        )
    }
}

impl std::error::Error for NotInstantiableError {}

/// Failure of `resolve_constructor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The introspector has no descriptor for the type.
    UnknownType { type_name: String },
    NotInstantiable(NotInstantiableError),
}

impl ResolveError {
    /// Name of the type the failed resolution was for.
    pub fn type_name(&self) -> &str {
        match self {
            ResolveError::UnknownType { type_name } => type_name,
            ResolveError::NotInstantiable(err) => err.type_name(),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownType { type_name } => {
                write!(f, "Unknown type {}: no descriptor available", type_name)
            }
            ResolveError::NotInstantiable(err) => write!(f, "{}", err),
        }
    }
}

// `NotInstantiable` displays the inner error itself, so it reports no source.
impl std::error::Error for ResolveError {}

impl From<NotInstantiableError> for ResolveError {
    fn from(err: NotInstantiableError) -> Self {
        ResolveError::NotInstantiable(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_instantiable_message_names_type() {
        let err = NotInstantiableError::new("App\\Repository", NotInstantiableReason::Interface);
        assert_eq!(
            err.to_string(),
            "Can not instantiate App\\Repository: type is an interface"
        );

        let wrapped = ResolveError::from(err);
        assert_eq!(wrapped.type_name(), "App\\Repository");
        assert_eq!(
            wrapped.to_string(),
            "Can not instantiate App\\Repository: type is an interface"
        );
        assert!(std::error::Error::source(&wrapped).is_none());
    }
}
