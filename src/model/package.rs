use serde::{Deserialize, Serialize};

/// A concrete `(name, version)` pair as resolved by the lockfile.
///
/// Scoped names keep their `@scope/` prefix verbatim; no normalization is
/// applied anywhere. Equality and hashing cover both fields, so a
/// `HashSet<ResolvedPackage>` collapses exact duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
}

impl ResolvedPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The `name@version` form used for sorting, reporting, and exports.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl std::fmt::Display for ResolvedPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_format() {
        let pkg = ResolvedPackage::new("ngx-toastr", "19.0.2");
        assert_eq!(pkg.id(), "ngx-toastr@19.0.2");
        assert_eq!(pkg.to_string(), "ngx-toastr@19.0.2");
    }

    #[test]
    fn test_scoped_name_kept_verbatim() {
        let pkg = ResolvedPackage::new("@ctrl/tinycolor", "4.1.1");
        assert_eq!(pkg.id(), "@ctrl/tinycolor@4.1.1");
    }

    #[test]
    fn test_duplicates_collapse_in_set() {
        let mut set = HashSet::new();
        set.insert(ResolvedPackage::new("lodash", "4.17.21"));
        set.insert(ResolvedPackage::new("lodash", "4.17.21"));
        set.insert(ResolvedPackage::new("lodash", "4.17.20"));
        assert_eq!(set.len(), 2);
    }
}
