//! Stats - Named integer attributes carried by entities and granted by items

use crate::types::StatKind;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Mapping from stat name to a signed integer
///
/// Entities hold one with every canonical stat present; items hold one with
/// only the bonuses they grant. Names outside the canonical set are allowed
/// here because equipping an item may introduce them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    values: BTreeMap<String, i64>,
}

impl Stats {
    /// Canonical stats, all zero
    pub fn new() -> Self {
        let mut stats = Self::empty();
        for kind in StatKind::iter() {
            stats.set(kind, 0);
        }
        stats
    }

    /// No stats at all (used for item bonuses)
    pub fn empty() -> Self {
        Stats {
            values: BTreeMap::new(),
        }
    }

    /// Current value, 0 if the stat is absent
    pub fn get(&self, name: impl AsRef<str>) -> i64 {
        self.values.get(name.as_ref()).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.values.contains_key(name.as_ref())
    }

    /// Overwrite a stat, creating it if absent
    pub fn set(&mut self, name: impl AsRef<str>, value: i64) {
        self.values.insert(name.as_ref().to_string(), value);
    }

    /// Add a delta to a stat, creating it at 0 first if absent
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn add(&mut self, name: impl AsRef<str>, delta: i64) {
        let value = self.values.entry(name.as_ref().to_string()).or_insert(0);
        *value = value.saturating_add(delta);
    }

    /// Add every bonus in `bonuses` to these stats
    pub fn apply_bonuses(&mut self, bonuses: &Stats) {
        for (name, value) in &bonuses.values {
            self.add(name, *value);
        }
    }

    /// Exact inverse of [`Stats::apply_bonuses`]
    pub fn remove_bonuses(&mut self, bonuses: &Stats) {
        for (name, value) in &bonuses.values {
            self.add(name, value.saturating_neg());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in display order: canonical stats first, then any others by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        let canonical = StatKind::iter().filter_map(move |kind| {
            self.values
                .get_key_value(kind.as_ref())
                .map(|(name, value)| (name.as_str(), *value))
        });
        let extra = self
            .values
            .iter()
            .filter(|(name, _)| !StatKind::is_valid(name))
            .map(|(name, value)| (name.as_str(), *value));
        canonical.chain(extra)
    }

    /// Whether any stat is strictly positive
    pub fn any_positive(&self) -> bool {
        self.values.values().any(|value| *value > 0)
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for Stats {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut stats = Stats::empty();
        for (name, value) in iter {
            stats.set(name, value);
        }
        stats
    }
}
