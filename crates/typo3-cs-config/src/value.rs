//! Rule sets and rule values
//!
//! A rule set maps rule names to their parameters. Parameters are either a
//! plain switch (`true`/`false`) or a nested map of options, which is itself
//! a [`RuleSet`]. Entries keep their insertion order so that rendered
//! configuration is stable from one run to the next.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::ConfigError;

/// Parameter value of a rule or of one of its options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Bool(bool),
    Number(i64),
    String(String),
    List(Vec<RuleValue>),
    Map(RuleSet),
}

impl RuleValue {
    /// A rule is enabled unless it is explicitly switched off
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RuleValue::Bool(false))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RuleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&RuleSet> {
        match self {
            RuleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Render as a single-line PHP literal
    pub fn to_php(&self) -> String {
        match self {
            RuleValue::Bool(b) => b.to_string(),
            RuleValue::Number(n) => n.to_string(),
            RuleValue::String(s) => php_quote(s),
            RuleValue::List(items) => {
                let items: Vec<String> = items.iter().map(RuleValue::to_php).collect();
                format!("[{}]", items.join(", "))
            }
            RuleValue::Map(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, value)| format!("{} => {}", php_quote(key), value.to_php()))
                    .collect();
                format!("[{}]", entries.join(", "))
            }
        }
    }
}

impl From<bool> for RuleValue {
    fn from(value: bool) -> Self {
        RuleValue::Bool(value)
    }
}

impl From<i64> for RuleValue {
    fn from(value: i64) -> Self {
        RuleValue::Number(value)
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        RuleValue::String(value.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        RuleValue::String(value)
    }
}

impl From<RuleSet> for RuleValue {
    fn from(value: RuleSet) -> Self {
        RuleValue::Map(value)
    }
}

impl<T: Into<RuleValue>> From<Vec<T>> for RuleValue {
    fn from(values: Vec<T>) -> Self {
        RuleValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Quote a string as a PHP single-quoted literal
pub fn php_quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Insertion-ordered map from rule (or option) name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<(String, RuleValue)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&RuleValue> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RuleValue> {
        let index = self.position(name)?;
        Some(&mut self.entries[index].1)
    }

    /// Insert or replace an entry.
    ///
    /// A replaced entry keeps its original position; new entries are appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RuleValue>) -> Option<RuleValue> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<RuleValue> {
        self.position(name).map(|index| self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merge `overrides` into this set, recursing where both sides hold a map.
    ///
    /// Any other combination (including lists) replaces the existing value.
    /// Keys only present in `overrides` are appended in their order.
    pub fn merge_recursive(&mut self, overrides: RuleSet) {
        for (name, value) in overrides.entries {
            match self.position(&name) {
                Some(index) => match (&mut self.entries[index].1, value) {
                    (RuleValue::Map(existing), RuleValue::Map(nested)) => {
                        existing.merge_recursive(nested);
                    }
                    (slot, value) => {
                        trace!(rule = %name, "replacing value");
                        *slot = value;
                    }
                },
                None => {
                    trace!(rule = %name, "adding value");
                    self.entries.push((name, value));
                }
            }
        }
    }

    /// Parse rule overrides from TOML, one top-level key per rule
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(content, "<string>")
    }

    /// Read rule overrides from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::InvalidRules {
            origin: origin.to_string(),
            source,
        })
    }
}

impl<K: Into<String>, V: Into<RuleValue>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl IntoIterator for RuleSet {
    type Item = (String, RuleValue);
    type IntoIter = std::vec::IntoIter<(String, RuleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of rule names to rule values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleSet, A::Error> {
                let mut set = RuleSet::new();
                while let Some((key, value)) = access.next_entry::<String, RuleValue>()? {
                    set.insert(key, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}
