//! Checker and evaluator policies
//!
//! The defaults reproduce the reference behaviour of the language, including
//! its known quirks. `Config::strict()` selects the conventional semantics.
//!
//! ```toml
//! [eval]
//! int_equals = "equality"
//!
//! [check]
//! lesser_result = "bool"
//! require_bool_guards = true
//! reassignment = "preserve_type"
//! branch_bindings = "common"
//! ```
//!
//! `require_bool_guards` needs `lesser_result = "bool"`; otherwise every
//! `while (i < n)` guard is rejected, so such a file fails to load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::ConfigError;
use crate::types::Type;

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub check: CheckConfig,
    pub eval: EvalConfig,
}

impl Config {
    /// Conventional semantics for every policy
    pub fn strict() -> Self {
        Self {
            check: CheckConfig::strict(),
            eval: EvalConfig::strict(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject policy combinations that cannot accept ordinary programs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check.require_bool_guards && self.check.lesser_result == LesserResult::Int {
            return Err(ConfigError::Conflict {
                message: "`require_bool_guards` rejects every `<` guard unless \
                          `lesser_result = \"bool\"`"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Type checker policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Result type of `Lesser`
    pub lesser_result: LesserResult,
    /// Reject `Conditional`/`Loop` guards that do not infer `Bool`
    pub require_bool_guards: bool,
    pub reassignment: ReassignPolicy,
    /// Bindings kept after a `Conditional` or `Loop`
    pub branch_bindings: BranchBindings,
}

impl CheckConfig {
    pub fn strict() -> Self {
        Self {
            lesser_result: LesserResult::Bool,
            require_bool_guards: true,
            reassignment: ReassignPolicy::PreserveType,
            branch_bindings: BranchBindings::Common,
        }
    }
}

/// Evaluator policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    pub int_equals: EqualsPolicy,
}

impl EvalConfig {
    pub fn strict() -> Self {
        Self {
            int_equals: EqualsPolicy::Equality,
        }
    }
}

/// What `Equals` computes when both operands are integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualsPolicy {
    /// `left < right`, as the reference evaluator does
    #[default]
    LessThan,
    /// `left == right`
    Equality,
}

/// Type inferred for `Lesser` when both operands are `Int`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LesserResult {
    #[default]
    Int,
    Bool,
}

impl LesserResult {
    pub fn as_type(&self) -> Type {
        match self {
            LesserResult::Int => Type::Int,
            LesserResult::Bool => Type::Bool,
        }
    }
}

/// How `Assignment` treats a variable that already has a type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassignPolicy {
    /// Overwrite the binding with the new type
    #[default]
    Overwrite,
    /// Reject assignments that change the variable's type
    PreserveType,
}

/// Which bindings survive a `Conditional` or `Loop` in the type environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchBindings {
    /// Then-branch result, overwritten by every name the else-branch binds;
    /// loop body bindings are kept
    #[default]
    Merge,
    /// Only bindings that hold on every path: names both branches bind with
    /// the same type, and names a loop body leaves unchanged
    Common,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_behaviour() {
        let config = Config::default();
        assert_eq!(config.eval.int_equals, EqualsPolicy::LessThan);
        assert_eq!(config.check.lesser_result, LesserResult::Int);
        assert!(!config.check.require_bool_guards);
        assert_eq!(config.check.reassignment, ReassignPolicy::Overwrite);
        assert_eq!(config.check.branch_bindings, BranchBindings::Merge);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = Config::from_toml_str(
            r#"
            [eval]
            int_equals = "equality"

            [check]
            lesser_result = "bool"
            require_bool_guards = true
            reassignment = "preserve_type"
            branch_bindings = "common"
            "#,
        )
        .unwrap();
        assert_eq!(config, Config::strict());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[check]\nlesser_result = \"bool\"\n").unwrap();
        assert_eq!(config.check.lesser_result, LesserResult::Bool);
        assert!(!config.check.require_bool_guards);
        assert_eq!(config.eval, EvalConfig::default());
    }

    #[test]
    fn test_bool_guards_need_bool_lesser() {
        let err = Config::from_toml_str("[check]\nrequire_bool_guards = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Conflict { .. }));

        let config = Config::from_toml_str(
            "[check]\nrequire_bool_guards = true\nlesser_result = \"bool\"\n",
        )
        .unwrap();
        assert!(config.check.require_bool_guards);
        assert!(Config::strict().validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("[eval]\nfuel = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
