//! Per-instance configuration snapshots

use crate::defaults::DefaultsStore;
use crate::value::OptionValue;
use anyhow::Result;
use std::collections::HashMap;

/// A configuration snapshot owned by one owner instance
///
/// Created from a [`DefaultsStore`] at owner-construction time by copying
/// every resolved default. The snapshot is thereafter independent: later
/// store mutations do not show up here, and `set` calls here do not write
/// back to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: HashMap<String, OptionValue>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Create a configuration seeded from the store's current resolved defaults
    pub fn from_defaults(defaults: &DefaultsStore) -> Self {
        let values = defaults.resolve();
        log::debug!("Seeded config with {} option(s)", values.len());
        Self { values }
    }

    /// Get an option value, or `None` if it was never set on this instance
    ///
    /// Looking up an unset option is not an error.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Set an option on this instance only
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get bool value; unset is `Ok(None)`, a non-bool value is an error
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        self.values.get(name).map(|v| v.as_bool()).transpose()
    }

    /// Get int value; unset is `Ok(None)`, a non-int value is an error
    pub fn get_int(&self, name: &str) -> Result<Option<i64>> {
        self.values.get(name).map(|v| v.as_int()).transpose()
    }

    /// Get uint value; unset is `Ok(None)`, a non-uint value is an error
    pub fn get_uint(&self, name: &str) -> Result<Option<u64>> {
        self.values.get(name).map(|v| v.as_uint()).transpose()
    }

    /// Get float value; unset is `Ok(None)`, a non-float value is an error
    pub fn get_float(&self, name: &str) -> Result<Option<f64>> {
        self.values.get(name).map(|v| v.as_float()).transpose()
    }

    /// Get string value; unset is `Ok(None)`, a non-string value is an error
    pub fn get_string(&self, name: &str) -> Result<Option<String>> {
        self.values.get(name).map(|v| v.as_string()).transpose()
    }

    /// Check whether an option is set on this instance
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over all (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.values.iter()
    }

    /// Number of options set on this instance
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set on this instance
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
