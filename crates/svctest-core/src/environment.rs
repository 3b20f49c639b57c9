//! Scheduler launch environment snapshot.

use std::collections::{BTreeMap, HashMap};

/// Environment variables the scheduler process would be launched with.
///
/// Read-only once built. Iteration is ordered by variable name so debug output
/// and listings are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerEnvironment {
    vars: BTreeMap<String, String>,
}

impl SchedulerEnvironment {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate `(name, value)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the variables. Changes to it never reach this snapshot.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl From<HashMap<String, String>> for SchedulerEnvironment {
    fn from(vars: HashMap<String, String>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for SchedulerEnvironment {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for SchedulerEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
