//! Classification of resolved packages against the denylist.

use crate::denylist::Denylist;

/// Decides whether a single `(name, version)` pair is known-malicious.
///
/// Matching is exact string equality against the denylist's version set —
/// no ranges, no prefixes, no semver compatibility. The checker never
/// errors: empty inputs and unknown names are simply not malicious.
pub struct DenylistChecker {
    denylist: Denylist,
}

impl DenylistChecker {
    pub fn new() -> Self {
        Self::with_denylist(Denylist::builtin())
    }

    pub fn with_denylist(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn is_malicious(&self, name: &str, version: &str) -> bool {
        if name.is_empty() || version.is_empty() {
            return false;
        }
        self.denylist.lookup(name).iter().any(|v| *v == version)
    }
}

impl Default for DenylistChecker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_checker() -> DenylistChecker {
    DenylistChecker::new()
}
