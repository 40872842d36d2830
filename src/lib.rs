pub mod checker;
pub mod config;
pub mod denylist;
pub mod lockfile;
pub mod model;
pub mod output;
pub mod scanner;

pub use checker::DenylistChecker;
pub use config::Config;
pub use denylist::Denylist;
pub use model::{ResolvedPackage, ScanStatus, ScanVerdict};
pub use output::{Level, Reporter};
pub use scanner::Scanner;
