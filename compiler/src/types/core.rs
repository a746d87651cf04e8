//! Core type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static type of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Signed 64-bit integer
    Int,
    /// Boolean
    Bool,
    /// No type can be assigned under the current environment.
    ///
    /// Not a first-class type: any composite expression with an ill-typed
    /// part is itself ill-typed.
    IllTyped,
}

impl Type {
    /// Check if this type is the failure sentinel
    pub fn is_ill_typed(&self) -> bool {
        matches!(self, Type::IllTyped)
    }

    /// Check if this type is a real (non-sentinel) type
    pub fn is_well_typed(&self) -> bool {
        !self.is_ill_typed()
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "Int",
            Type::Bool => "Bool",
            Type::IllTyped => "IllTyped",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
