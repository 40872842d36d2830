use tabled::{settings::Style, Table, Tabled};

use crate::model::{ScanStatus, ScanVerdict};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Package")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
}

/// Prints the post-scan summary block: counts, a table of matches when
/// there are any, and the verdict.
pub fn print_summary(verdict: &ScanVerdict) {
    println!();
    println!("================================================================");
    println!("  Scan Summary");
    println!("================================================================");
    println!();
    println!(
        "Scan completed at: {}",
        verdict.scan_time.format("%Y-%m-%d %H:%M:%S UTC")
    );

    match verdict.status {
        ScanStatus::Error => {
            println!("Scan did not complete; see the errors above.");
            return;
        }
        ScanStatus::Clean | ScanStatus::ThreatsFound => {
            println!("Packages checked:  {}", verdict.total_checked);
        }
    }

    if !verdict.malicious.is_empty() {
        println!();
        println!("Found {} malicious package(s):", verdict.malicious.len());
        println!();

        let rows: Vec<MatchRow> = verdict
            .malicious
            .iter()
            .map(|p| MatchRow {
                name: p.name.clone(),
                version: p.version.clone(),
            })
            .collect();

        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}
