//! Name-to-binding environments
//!
//! One flat mapping per program run, mutated in place by declarations and
//! assignments. The same structure backs both the runtime environment
//! (`ValueEnv`) and the checker's static environment (`TypeEnv`).

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// Ordered mapping from variable names to bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment<T> {
    bindings: IndexMap<String, T>,
}

/// Runtime environment: variable name to value
pub type ValueEnv = Environment<Value>;

impl<T> Environment<T> {
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Bind or overwrite `name`, returning the previous binding
    pub fn bind(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.bindings.insert(name.into(), value)
    }

    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Keep only the bindings for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &T) -> bool) {
        self.bindings.retain(|name, value| keep(name, value));
    }
}

impl<T: Copy> Environment<T> {
    /// Copy of the binding for `name`
    pub fn get(&self, name: &str) -> Option<T> {
        self.bindings.get(name).copied()
    }
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Environment<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for Environment<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.bindings.insert(k.into(), v);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Environment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_overwrites_in_place() {
        let mut env = ValueEnv::new();
        assert_eq!(env.bind("x", Value::Integer(1)), None);
        env.bind("y", Value::Boolean(true));
        assert_eq!(env.bind("x", Value::Integer(2)), Some(Value::Integer(1)));
        assert_eq!(env.get("x"), Some(Value::Integer(2)));
        assert_eq!(env.names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_display() {
        let env: ValueEnv = [("x", Value::Integer(6)), ("b", Value::Boolean(false))]
            .into_iter()
            .collect();
        assert_eq!(env.to_string(), "{x = 6, b = false}");
        assert_eq!(ValueEnv::new().to_string(), "{}");
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut env: Environment<i64> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        env.retain(|name, _| name != "b");
        assert_eq!(env.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_missing() {
        let env = ValueEnv::new();
        assert!(env.is_empty());
        assert!(!env.contains("nope"));
        assert_eq!(env.get("nope"), None);
    }
}
