//! End-to-end lockfile scan.
//!
//! A [`Scanner`] drives one scan: locate the lockfile, load and parse it,
//! extract every resolved package, classify each against the denylist, and
//! fold the outcome into a [`ScanVerdict`]. Everything user-visible along
//! the way is emitted as structured events through a [`Reporter`]; the
//! scanner itself never prints.
//!
//! Each scanner owns its own state and shares nothing with another run.
//! Callers driving scans from several threads must give every run its own
//! `Scanner`; a log-backed reporter shared between them serializes its own
//! writes.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::checker::DenylistChecker;
use crate::lockfile;
use crate::model::{ScanStatus, ScanVerdict};
use crate::output::{Level, Reporter};

/// Why a scan aborted before classification.
///
/// Each variant renders a distinct, human-readable reason; the variant's
/// message is exactly what reaches the reporter.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON file: {}", .0.display())]
    InvalidFormat(PathBuf),
}

/// Runs one scan of a lockfile against the denylist.
pub struct Scanner {
    lockfile: PathBuf,
    checker: DenylistChecker,
}

impl Scanner {
    pub fn new(lockfile: impl Into<PathBuf>) -> Self {
        Self::with_checker(lockfile, DenylistChecker::new())
    }

    pub fn with_checker(lockfile: impl Into<PathBuf>, checker: DenylistChecker) -> Self {
        Self {
            lockfile: lockfile.into(),
            checker,
        }
    }

    /// Scans the lockfile and returns the verdict.
    ///
    /// Never fails: a lockfile that is missing, unreadable, or not valid
    /// JSON surfaces as a verdict with [`ScanStatus::Error`] after the
    /// reason has been emitted through `reporter`.
    pub fn scan(&self, reporter: &dyn Reporter) -> ScanVerdict {
        reporter.emit(
            Level::Info,
            &format!(
                "Scanning {} for malicious packages...",
                self.lockfile.display()
            ),
        );
        reporter.emit(
            Level::Info,
            "This scan checks for packages compromised in the Shai-Hulud npm supply chain attack",
        );

        let doc = match self.load_document() {
            Ok(doc) => doc,
            Err(err) => {
                reporter.emit(Level::Error, &err.to_string());
                return ScanVerdict::error();
            }
        };

        reporter.emit(
            Level::Verbose,
            &format!(
                "Extracting package information from {}",
                self.lockfile.display()
            ),
        );
        let packages = lockfile::extract_packages(&doc);

        let mut malicious = Vec::new();
        for package in &packages {
            reporter.emit(Level::Verbose, &format!("Checking {package}"));
            if self.checker.is_malicious(&package.name, &package.version) {
                reporter.emit(
                    Level::Warning,
                    &format!("🚨 MALICIOUS PACKAGE DETECTED: {package}"),
                );
                malicious.push(package.clone());
            }
        }

        reporter.emit(
            Level::Info,
            &format!("Scan completed. Total packages checked: {}", packages.len()),
        );

        let verdict = ScanVerdict::completed(packages.len(), malicious);
        match verdict.status {
            ScanStatus::ThreatsFound => {
                reporter.emit(
                    Level::Error,
                    &format!(
                        "⚠️  SECURITY ALERT: Found {} malicious package(s)!",
                        verdict.malicious.len()
                    ),
                );
                reporter.emit(
                    Level::Error,
                    "These packages are part of the Shai-Hulud npm supply chain attack.",
                );
                reporter.emit(Level::Error, "IMMEDIATE ACTIONS REQUIRED:");
                reporter.emit(Level::Error, "1. Remove the malicious packages immediately");
                reporter.emit(
                    Level::Error,
                    "2. Rotate all access tokens for GitHub, NPM, AWS, GCP, and Azure",
                );
                reporter.emit(
                    Level::Error,
                    "3. Check for unauthorized GitHub repositories named 'Shai-Hulud'",
                );
                reporter.emit(
                    Level::Error,
                    "4. Scan your system with TruffleHog to detect any leaked secrets",
                );
                reporter.emit(
                    Level::Error,
                    "5. Review recent npm publish activities on your account",
                );
            }
            _ => {
                reporter.emit(
                    Level::Success,
                    "✅ No malicious packages detected. Your project appears to be safe.",
                );
            }
        }

        verdict
    }

    /// Locate → load → parse. Stops at the first failing phase.
    fn load_document(&self) -> Result<Value, ScanError> {
        if !self.lockfile.exists() {
            return Err(ScanError::FileNotFound(self.lockfile.clone()));
        }
        let raw = fs::read(&self.lockfile).map_err(|source| ScanError::Io {
            path: self.lockfile.clone(),
            source,
        })?;
        serde_json::from_slice(&raw)
            .map_err(|_| ScanError::InvalidFormat(self.lockfile.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denylist::Denylist;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct MemoryReporter {
        events: Mutex<Vec<(Level, String)>>,
    }

    impl MemoryReporter {
        fn events(&self) -> Vec<(Level, String)> {
            self.events.lock().unwrap().clone()
        }

        fn messages_at(&self, level: Level) -> Vec<String> {
            self.events()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m)
                .collect()
        }
    }

    impl Reporter for MemoryReporter {
        fn emit(&self, level: Level, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    fn lockfile_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_an_error_with_no_classification() {
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new("/nonexistent/package-lock.json");

        let verdict = scanner.scan(&reporter);

        assert_eq!(verdict.status, ScanStatus::Error);
        assert_eq!(verdict.exit_code(), 1);
        let errors = reporter.messages_at(Level::Error);
        assert!(errors.iter().any(|m| m.contains("File not found")));
        // No package was ever checked or flagged.
        assert!(reporter.messages_at(Level::Warning).is_empty());
        assert!(reporter
            .messages_at(Level::Verbose)
            .iter()
            .all(|m| !m.starts_with("Checking ")));
    }

    #[test]
    fn test_malformed_json_is_a_distinct_error() {
        let file = lockfile_with("{ not json at all");
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new(file.path());

        let verdict = scanner.scan(&reporter);

        assert_eq!(verdict.status, ScanStatus::Error);
        let errors = reporter.messages_at(Level::Error);
        assert!(errors.iter().any(|m| m.contains("Invalid JSON")));
        assert!(errors.iter().all(|m| !m.contains("File not found")));
    }

    #[test]
    fn test_clean_lockfile() {
        let file = lockfile_with(
            r#"{
                "packages": {
                    "": { "name": "my-app", "version": "1.0.0" },
                    "node_modules/lodash": { "version": "4.17.21" },
                    "node_modules/express": { "version": "4.18.2" }
                }
            }"#,
        );
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new(file.path());

        let verdict = scanner.scan(&reporter);

        assert_eq!(verdict.status, ScanStatus::Clean);
        assert_eq!(verdict.total_checked, 2);
        assert!(verdict.malicious.is_empty());
        assert_eq!(verdict.exit_code(), 0);
        assert!(!reporter.messages_at(Level::Success).is_empty());
    }

    #[test]
    fn test_flagged_version_among_clean_ones() {
        let file = lockfile_with(
            r#"{
                "packages": {
                    "node_modules/ngx-toastr": { "version": "19.0.2" }
                },
                "dependencies": {
                    "ngx-toastr": { "version": "19.0.3" }
                }
            }"#,
        );
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new(file.path());

        let verdict = scanner.scan(&reporter);

        assert_eq!(verdict.status, ScanStatus::ThreatsFound);
        assert_eq!(verdict.total_checked, 2);
        assert_eq!(verdict.malicious.len(), 1);
        assert_eq!(verdict.malicious[0].id(), "ngx-toastr@19.0.2");
        assert_eq!(verdict.exit_code(), 1);

        let warnings = reporter.messages_at(Level::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ngx-toastr@19.0.2"));
    }

    #[test]
    fn test_empty_tables_scan_clean_with_zero_checked() {
        let file = lockfile_with(r#"{ "packages": {}, "dependencies": {} }"#);
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new(file.path());

        let verdict = scanner.scan(&reporter);

        assert_eq!(verdict.status, ScanStatus::Clean);
        assert_eq!(verdict.total_checked, 0);
    }

    #[test]
    fn test_matches_come_out_in_id_order() {
        let denylist = Denylist::from_entries(&[("zz-pkg", "1.0.0"), ("aa-pkg", "2.0.0")]);
        let file = lockfile_with(
            r#"{
                "dependencies": {
                    "zz-pkg": { "version": "1.0.0" },
                    "aa-pkg": { "version": "2.0.0" }
                }
            }"#,
        );
        let reporter = MemoryReporter::default();
        let scanner =
            Scanner::with_checker(file.path(), DenylistChecker::with_denylist(denylist));

        let verdict = scanner.scan(&reporter);

        let ids: Vec<String> = verdict.malicious.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["aa-pkg@2.0.0", "zz-pkg@1.0.0"]);
    }

    #[test]
    fn test_verbose_events_cover_every_checked_package() {
        let file = lockfile_with(
            r#"{
                "dependencies": {
                    "one": { "version": "1.0.0" },
                    "two": { "version": "2.0.0" }
                }
            }"#,
        );
        let reporter = MemoryReporter::default();
        let scanner = Scanner::new(file.path());

        let verdict = scanner.scan(&reporter);

        let checked: Vec<String> = reporter
            .messages_at(Level::Verbose)
            .into_iter()
            .filter(|m| m.starts_with("Checking "))
            .collect();
        assert_eq!(checked.len(), verdict.total_checked);
        assert_eq!(checked, vec!["Checking one@1.0.0", "Checking two@2.0.0"]);
    }
}
