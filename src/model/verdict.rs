use chrono::{DateTime, Utc};
use serde::Serialize;

use super::package::ResolvedPackage;

/// Overall outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Every checked package was clean.
    Clean,
    /// At least one package matched the denylist.
    ThreatsFound,
    /// The scan aborted before classification (missing, unreadable, or
    /// unparseable lockfile).
    Error,
}

/// Result of one scan invocation, immutable once returned.
///
/// `malicious` is ordered the same way classification ran: lexicographically
/// by the `name@version` string.
#[derive(Debug, Clone, Serialize)]
pub struct ScanVerdict {
    pub scan_time: DateTime<Utc>,
    pub total_checked: usize,
    pub malicious: Vec<ResolvedPackage>,
    pub status: ScanStatus,
}

impl ScanVerdict {
    /// Verdict for a scan that ran to completion; the status follows from
    /// whether anything matched.
    pub fn completed(total_checked: usize, malicious: Vec<ResolvedPackage>) -> Self {
        let status = if malicious.is_empty() {
            ScanStatus::Clean
        } else {
            ScanStatus::ThreatsFound
        };
        Self {
            scan_time: Utc::now(),
            total_checked,
            malicious,
            status,
        }
    }

    /// Verdict for a scan that aborted before any package was classified.
    pub fn error() -> Self {
        Self {
            scan_time: Utc::now(),
            total_checked: 0,
            malicious: Vec::new(),
            status: ScanStatus::Error,
        }
    }

    /// Process exit status: 0 only for a clean scan. Threats and scan
    /// failures both map to 1; callers that need to tell them apart must
    /// inspect `status`.
    pub fn exit_code(&self) -> u8 {
        match self.status {
            ScanStatus::Clean => 0,
            ScanStatus::ThreatsFound | ScanStatus::Error => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_without_matches_is_clean() {
        let verdict = ScanVerdict::completed(12, Vec::new());
        assert_eq!(verdict.status, ScanStatus::Clean);
        assert_eq!(verdict.total_checked, 12);
        assert_eq!(verdict.exit_code(), 0);
    }

    #[test]
    fn test_completed_with_matches_reports_threats() {
        let matches = vec![ResolvedPackage::new("ngx-toastr", "19.0.2")];
        let verdict = ScanVerdict::completed(2, matches);
        assert_eq!(verdict.status, ScanStatus::ThreatsFound);
        assert_eq!(verdict.malicious.len(), 1);
        assert_eq!(verdict.exit_code(), 1);
    }

    #[test]
    fn test_error_verdict() {
        let verdict = ScanVerdict::error();
        assert_eq!(verdict.status, ScanStatus::Error);
        assert_eq!(verdict.total_checked, 0);
        assert!(verdict.malicious.is_empty());
        assert_eq!(verdict.exit_code(), 1);
    }
}
