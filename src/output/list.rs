use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::denylist::Denylist;

const HEADER: &str = "\
# Shai-Hulud NPM Supply Chain Attack - Malicious Package List
# Generated by lockscan
# Source: JFrog Security Research
";

/// Renders the denylist as a flat listing: a header comment block, then one
/// `name@version` line per flagged version, in denylist iteration order.
pub fn render_package_list(denylist: &Denylist) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (name, versions) in denylist.entries() {
        for version in versions {
            out.push_str(name);
            out.push('@');
            out.push_str(version);
            out.push('\n');
        }
    }
    out
}

/// Writes the listing to `path`, replacing any existing file.
pub fn write_package_list(denylist: &Denylist, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_package_list(denylist))
        .with_context(|| format!("Failed to create list at {}", path.display()))
}
