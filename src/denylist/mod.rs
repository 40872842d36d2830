//! The authoritative mapping from package name to known-malicious versions.
//!
//! Built once at startup from the table embedded in [`data`] and read-only
//! for the rest of the process. Lookups are exact and case-sensitive: a
//! scoped name like `@ctrl/tinycolor` is matched as the full string,
//! prefix included.

use std::collections::HashMap;

mod data;

/// Immutable package-name → malicious-versions table.
pub struct Denylist {
    packages: HashMap<&'static str, Vec<&'static str>>,
}

impl Denylist {
    /// Builds the denylist from the embedded compromised-package table.
    ///
    /// The comma-separated version encoding is split and trimmed here, once;
    /// lookups only ever see structured version lists.
    pub fn builtin() -> Self {
        Self::from_entries(data::ENTRIES)
    }

    pub(crate) fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut packages = HashMap::with_capacity(entries.len());
        for (name, versions) in entries {
            let versions: Vec<&'static str> = versions
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();
            packages.insert(*name, versions);
        }
        Self { packages }
    }

    /// Malicious versions recorded for `name`; empty for unknown names,
    /// never an error.
    pub fn lookup(&self, name: &str) -> &[&'static str] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of package names in the table.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// All entries in name order. The backing store is a hash map, so this
    /// sorted view is what gives exports and reports a deterministic order.
    pub fn entries(&self) -> Vec<(&'static str, &[&'static str])> {
        let mut entries: Vec<_> = self
            .packages
            .iter()
            .map(|(name, versions)| (*name, versions.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}
