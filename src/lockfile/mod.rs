//! Lockfile dependency extraction.
//!
//! npm has shipped two lockfile generations that matter here. Version 2/3
//! files carry a flat `packages` table keyed by install path
//! (`"node_modules/<name>"` plus an empty key for the root project), while
//! version 1 files nest a `dependencies` tree of arbitrary depth. Both
//! passes always run and their results are unioned: real-world lockfiles
//! occasionally carry both tables after partial tooling upgrades, and a
//! document matching neither simply yields nothing.
//!
//! A malformed entry anywhere in the document is never fatal. It is logged
//! at debug level and skipped; everything already collected and every
//! sibling branch still comes out.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

use crate::model::ResolvedPackage;

/// Install-path prefix of the flat `packages` table.
const PATH_PREFIX: &str = "node_modules/";

/// One value of the v2/v3 `packages` table. Only `version` matters; the
/// root project entry and link entries carry none and are skipped.
#[derive(Deserialize)]
struct LockedEntry {
    version: Option<String>,
}

/// One node of the v1 `dependencies` tree.
///
/// The two variants pin the traversal rule into the type: a node either
/// resolved to a concrete version (emit a pair, then recurse) or it did not
/// (just recurse). Children stay raw JSON so one malformed grandchild
/// cannot take down the decode of its parent.
#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyNode {
    Resolved {
        version: String,
        #[serde(default)]
        dependencies: Value,
    },
    Bare {
        #[serde(default)]
        dependencies: Value,
    },
}

/// Extracts every resolved `(name, version)` pair from a parsed lockfile.
///
/// Runs both schema passes, collapses exact duplicates, and returns the
/// result sorted lexicographically by the `name@version` string so
/// downstream classification and reporting are deterministic regardless of
/// JSON key order.
pub fn extract_packages(doc: &Value) -> Vec<ResolvedPackage> {
    let mut found = HashSet::new();
    collect_locked_table(doc, &mut found);
    collect_dependency_tree(doc, &mut found);

    let mut packages: Vec<ResolvedPackage> = found.into_iter().collect();
    packages.sort_by(|a, b| a.id().cmp(&b.id()));
    packages
}

/// Schema pass for the v2/v3 flat `packages` table.
fn collect_locked_table(doc: &Value, found: &mut HashSet<ResolvedPackage>) {
    let Some(table) = doc.get("packages").and_then(Value::as_object) else {
        return;
    };

    for (path, value) in table {
        let entry = match LockedEntry::deserialize(value) {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping malformed packages entry {path:?}: {err}");
                continue;
            }
        };
        let Some(version) = entry.version else {
            continue;
        };
        let name = match path.strip_prefix(PATH_PREFIX) {
            Some(stripped) => stripped,
            // The empty key is the root project; it has no package name.
            None if path.is_empty() => continue,
            None => path.as_str(),
        };
        if name.is_empty() || version.is_empty() {
            continue;
        }
        found.insert(ResolvedPackage::new(name, version));
    }
}

/// Schema pass for the v1 nested `dependencies` tree.
fn collect_dependency_tree(doc: &Value, found: &mut HashSet<ResolvedPackage>) {
    if let Some(tree) = doc.get("dependencies").and_then(Value::as_object) {
        walk_dependencies(tree, found);
    }
}

fn walk_dependencies(tree: &Map<String, Value>, found: &mut HashSet<ResolvedPackage>) {
    for (name, value) in tree {
        let node = match DependencyNode::deserialize(value) {
            Ok(node) => node,
            Err(err) => {
                debug!("skipping malformed dependency entry {name:?}: {err}");
                continue;
            }
        };
        let children = match node {
            DependencyNode::Resolved {
                version,
                dependencies,
            } => {
                if !name.is_empty() && !version.is_empty() {
                    found.insert(ResolvedPackage::new(name.as_str(), version));
                }
                dependencies
            }
            DependencyNode::Bare { dependencies } => dependencies,
        };
        // Nested children are visited whenever present, independent of
        // whether this node carried a version.
        if let Some(children) = children.as_object() {
            walk_dependencies(children, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(doc: &Value) -> Vec<String> {
        extract_packages(doc).iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_flat_table_strips_path_prefix() {
        let doc = json!({
            "packages": {
                "": { "name": "my-app", "version": "1.0.0" },
                "node_modules/lodash": { "version": "4.17.21" },
                "node_modules/@ctrl/tinycolor": { "version": "4.1.1" }
            }
        });
        assert_eq!(ids(&doc), vec!["@ctrl/tinycolor@4.1.1", "lodash@4.17.21"]);
    }

    #[test]
    fn test_flat_table_skips_entries_without_version() {
        let doc = json!({
            "packages": {
                "node_modules/linked-pkg": { "resolved": "file:../linked-pkg" },
                "node_modules/lodash": { "version": "4.17.21" }
            }
        });
        assert_eq!(ids(&doc), vec!["lodash@4.17.21"]);
    }

    #[test]
    fn test_flat_table_root_entry_never_contributes() {
        // Even a root entry carrying a version has no package name of its own.
        let doc = json!({
            "packages": {
                "": { "version": "1.0.0" }
            }
        });
        assert!(ids(&doc).is_empty());
    }

    #[test]
    fn test_flat_table_key_without_prefix_is_kept_verbatim() {
        let doc = json!({
            "packages": {
                "vendored/thing": { "version": "2.0.0" }
            }
        });
        assert_eq!(ids(&doc), vec!["vendored/thing@2.0.0"]);
    }

    #[test]
    fn test_nested_tree_walks_arbitrary_depth() {
        let doc = json!({
            "dependencies": {
                "a": {
                    "version": "1.0.0",
                    "dependencies": {
                        "b": {
                            "version": "2.0.0",
                            "dependencies": {
                                "c": { "version": "3.0.0" }
                            }
                        }
                    }
                }
            }
        });
        assert_eq!(ids(&doc), vec!["a@1.0.0", "b@2.0.0", "c@3.0.0"]);
    }

    #[test]
    fn test_nested_tree_recurses_through_versionless_nodes() {
        let doc = json!({
            "dependencies": {
                "meta": {
                    "dependencies": {
                        "leaf": { "version": "1.2.3" }
                    }
                }
            }
        });
        assert_eq!(ids(&doc), vec!["leaf@1.2.3"]);
    }

    #[test]
    fn test_both_schemas_union_without_duplicates() {
        let doc = json!({
            "packages": {
                "node_modules/shared": { "version": "1.0.0" },
                "node_modules/flat-only": { "version": "2.0.0" }
            },
            "dependencies": {
                "shared": { "version": "1.0.0" },
                "tree-only": { "version": "3.0.0" }
            }
        });
        assert_eq!(
            ids(&doc),
            vec!["flat-only@2.0.0", "shared@1.0.0", "tree-only@3.0.0"]
        );
    }

    #[test]
    fn test_malformed_sibling_does_not_abort_extraction() {
        let doc = json!({
            "dependencies": {
                "good": { "version": "1.0.0" },
                "bad": "not-an-object",
                "also-good": { "version": "2.0.0" }
            }
        });
        assert_eq!(ids(&doc), vec!["also-good@2.0.0", "good@1.0.0"]);
    }

    #[test]
    fn test_malformed_subtree_keeps_shallower_pairs() {
        let doc = json!({
            "dependencies": {
                "parent": {
                    "version": "1.0.0",
                    "dependencies": {
                        "broken": 42,
                        "fine": { "version": "2.0.0" }
                    }
                }
            }
        });
        assert_eq!(ids(&doc), vec!["fine@2.0.0", "parent@1.0.0"]);
    }

    #[test]
    fn test_non_object_dependencies_field_stops_recursion_only() {
        // The node itself still counts; there is just nothing to walk into.
        let doc = json!({
            "dependencies": {
                "odd": { "version": "1.0.0", "dependencies": "bogus" }
            }
        });
        assert_eq!(ids(&doc), vec!["odd@1.0.0"]);
    }

    #[test]
    fn test_malformed_packages_entry_is_skipped() {
        let doc = json!({
            "packages": {
                "node_modules/ok": { "version": "1.0.0" },
                "node_modules/broken": []
            }
        });
        assert_eq!(ids(&doc), vec!["ok@1.0.0"]);
    }

    #[test]
    fn test_empty_tables_yield_nothing() {
        let doc = json!({ "packages": {}, "dependencies": {} });
        assert!(ids(&doc).is_empty());
    }

    #[test]
    fn test_document_matching_neither_schema_yields_nothing() {
        let doc = json!({ "name": "my-app", "lockfileVersion": 3 });
        assert!(ids(&doc).is_empty());

        let doc = json!({ "packages": "not-a-table", "dependencies": 7 });
        assert!(ids(&doc).is_empty());
    }

    #[test]
    fn test_same_name_with_two_versions_yields_both() {
        let doc = json!({
            "packages": {
                "node_modules/dup": { "version": "1.0.0" },
                "node_modules/nested/node_modules/dup": { "version": "1.0.0" }
            },
            "dependencies": {
                "dup": { "version": "2.0.0" }
            }
        });
        // The nested flat key keeps its remainder after the leading prefix,
        // so only the exact duplicate collapses.
        assert_eq!(
            ids(&doc),
            vec!["dup@1.0.0", "dup@2.0.0", "nested/node_modules/dup@1.0.0"]
        );
    }

    #[test]
    fn test_order_is_by_full_id_string() {
        let doc = json!({
            "dependencies": {
                "a-b": { "version": "2.0.0" },
                "a": { "version": "1.0.0" }
            }
        });
        // '-' sorts before '@', so a-b@2.0.0 precedes a@1.0.0.
        assert_eq!(ids(&doc), vec!["a-b@2.0.0", "a@1.0.0"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = json!({
            "packages": { "node_modules/x": { "version": "1.0.0" } },
            "dependencies": { "y": { "version": "2.0.0" } }
        });
        assert_eq!(extract_packages(&doc), extract_packages(&doc));
    }

    #[test]
    fn test_empty_version_string_is_skipped() {
        let doc = json!({
            "packages": { "node_modules/blank": { "version": "" } },
            "dependencies": { "blank-too": { "version": "" } }
        });
        assert!(ids(&doc).is_empty());
    }

    #[test]
    fn test_null_version_falls_through_to_recursion() {
        let doc = json!({
            "dependencies": {
                "halfway": {
                    "version": null,
                    "dependencies": { "inner": { "version": "1.0.0" } }
                }
            }
        });
        assert_eq!(ids(&doc), vec!["inner@1.0.0"]);
    }
}
