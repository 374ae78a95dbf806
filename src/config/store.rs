use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::value::OptionValue;

/// The resolved set of build-time feature flags and their values.
///
/// Owned by the build system's configuration subsystem; the selector only
/// reads it. A sorted map keeps iteration deterministic, which matters for
/// reproducible diagnostics when a configuration is dumped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildConfig {
    options: BTreeMap<String, OptionValue>,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare or overwrite an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.insert(name.into(), value.into());
    }

    /// Look up a declared option's value.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Truthiness of a declared option, or `None` when the name was never
    /// declared. Callers decide whether an undeclared option is an error;
    /// the selector treats it as one.
    pub fn truthy(&self, name: &str) -> Option<bool> {
        self.options.get(name).map(OptionValue::is_truthy)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for BuildConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = BuildConfig::new();
        for (name, value) in iter {
            config.set(name, value);
        }
        config
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for BuildConfig {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
