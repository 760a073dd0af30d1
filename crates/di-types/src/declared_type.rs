//! Declared parameter types.
//!
//! Parses a type as spelled in a declaration into the facts resolution
//! needs: the type name, whether `null` is accepted, and whether the type
//! is builtin, structured, a union or an intersection.
//!
//! Supports:
//! - Builtin types: `int`, `float`, `string`, `bool`, `array`, `iterable`,
//!   `callable`, `object`, `mixed`, `void`, `null`, `false`, `true`, `never`
//! - Nullable types: `?Logger`, `Logger|null`, `null|Logger`
//! - Structured types: `Logger`, `\App\Logger` (leading `\` is dropped)
//! - Unions of two or more non-null members: `int|string`, `A|B|null`
//! - Intersections: `Countable&Traversable`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type names that never name a service.
pub const BUILTIN_TYPES: &[&str] = &[
    "int", "float", "string", "bool", "array", "iterable", "callable", "object", "mixed", "void",
    "null", "false", "true", "never",
];

/// Check whether a type name is builtin (case-insensitive).
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES
        .iter()
        .any(|builtin| builtin.eq_ignore_ascii_case(name))
}

/// What kind of type a declaration names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Builtin,
    Structured,
    Union,
    Intersection,
}

/// Error produced when a type spelling cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredTypeError {
    /// The spelling is empty or only whitespace.
    Empty,
    /// A union, intersection or nullable marker with a missing member,
    /// e.g. `?`, `int|` or `A&`.
    EmptyMember { spelling: String },
}

impl fmt::Display for DeclaredTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredTypeError::Empty => write!(f, "declared type is empty"),
            DeclaredTypeError::EmptyMember { spelling } => {
                write!(f, "declared type '{}' has an empty member", spelling)
            }
        }
    }
}

impl std::error::Error for DeclaredTypeError {}

/// A parameter's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeclaredType {
    name: String,
    nullable: bool,
    category: TypeCategory,
}

impl DeclaredType {
    /// Parse a declared type spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use di_types::DeclaredType;
    ///
    /// let ty = DeclaredType::parse("?App\\Logger").unwrap();
    /// assert_eq!(ty.name(), "App\\Logger");
    /// assert!(ty.allows_null());
    /// assert!(ty.is_structured());
    /// ```
    pub fn parse(spelling: &str) -> Result<Self, DeclaredTypeError> {
        let spelling = spelling.trim();
        if spelling.is_empty() {
            return Err(DeclaredTypeError::Empty);
        }

        let (body, mut nullable) = match spelling.strip_prefix('?') {
            Some(rest) => (rest.trim(), true),
            None => (spelling, false),
        };

        let mut members = Vec::new();
        for member in body.split('|').map(str::trim) {
            if member.is_empty() {
                return Err(DeclaredTypeError::EmptyMember {
                    spelling: spelling.to_string(),
                });
            }
            if member.eq_ignore_ascii_case("null") {
                nullable = true;
            } else {
                members.push(member);
            }
        }

        // A bare `null` declaration
        if members.is_empty() {
            return Ok(Self::builtin("null", true));
        }

        if members.len() > 1 {
            let name = members
                .iter()
                .map(|m| normalize_name(m))
                .collect::<Vec<_>>()
                .join("|");
            return Ok(Self {
                name,
                nullable,
                category: TypeCategory::Union,
            });
        }

        let member = members[0];
        if member.contains('&') {
            let mut parts = Vec::new();
            for part in member.split('&').map(str::trim) {
                if part.is_empty() {
                    return Err(DeclaredTypeError::EmptyMember {
                        spelling: spelling.to_string(),
                    });
                }
                parts.push(normalize_name(part));
            }
            return Ok(Self {
                name: parts.join("&"),
                nullable,
                category: TypeCategory::Intersection,
            });
        }

        Ok(Self::structured(member, nullable))
    }

    /// A builtin type such as `int` or `string`.
    pub fn builtin(name: &str, nullable: bool) -> Self {
        Self {
            name: name.to_string(),
            nullable,
            category: TypeCategory::Builtin,
        }
    }

    /// A structured (class or interface) type.
    ///
    /// A leading `\` is dropped. A builtin name yields a builtin type.
    pub fn structured(name: &str, nullable: bool) -> Self {
        let name = name.trim_start_matches('\\');
        if is_builtin_type(name) {
            let name = name.to_ascii_lowercase();
            let nullable = nullable || name == "mixed";
            return Self::builtin(&name, nullable);
        }
        Self {
            name: name.to_string(),
            nullable,
            category: TypeCategory::Structured,
        }
    }

    /// Type name without nullability markers.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allows_null(&self) -> bool {
        self.nullable
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    pub fn is_builtin(&self) -> bool {
        self.category == TypeCategory::Builtin
    }

    /// A single non-builtin type that can name a service.
    pub fn is_structured(&self) -> bool {
        self.category == TypeCategory::Structured
    }
}

fn normalize_name(name: &str) -> String {
    if is_builtin_type(name) {
        name.to_ascii_lowercase()
    } else {
        name.trim_start_matches('\\').to_string()
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.nullable, self.category) {
            (false, _) => write!(f, "{}", self.name),
            (true, TypeCategory::Union) => write!(f, "{}|null", self.name),
            (true, TypeCategory::Builtin) if self.name == "null" || self.name == "mixed" => {
                write!(f, "{}", self.name)
            }
            (true, _) => write!(f, "?{}", self.name),
        }
    }
}

impl FromStr for DeclaredType {
    type Err = DeclaredTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DeclaredType {
    type Error = DeclaredTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DeclaredType> for String {
    fn from(ty: DeclaredType) -> Self {
        ty.to_string()
    }
}
