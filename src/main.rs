use anyhow::Result;
use clap::{Parser, Subcommand};
use lockscan::{
    config::Config,
    denylist::Denylist,
    model::ScanStatus,
    output::{print_summary, write_package_list, ConsoleReporter, Level, LogFile, Reporter},
    scanner::Scanner,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit codes for CI integration. Threats and scan failures both map to 1;
/// callers needing to tell them apart inspect the verdict output instead.
mod exit_codes {
    pub const CLEAN: u8 = 0;
    pub const FAILURE: u8 = 1;
}

#[derive(Parser)]
#[command(name = "lockscan")]
#[command(
    author,
    version,
    about = "Scan npm lockfiles for packages compromised in the Shai-Hulud supply chain attack"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a lockfile for known-malicious package versions
    Scan {
        /// Path to the package-lock.json file to scan
        #[arg(short, long)]
        file: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Append timestamped scan events to a file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write the denylist as a flat name@version listing
    List {
        /// Destination file
        #[arg(short, long, default_value = "malicious_packages.txt")]
        output: String,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Scan {
            file,
            verbose,
            output,
        } => {
            let verbose = verbose || config.verbose;
            init_logging(verbose);

            let lockfile = file.unwrap_or(config.default_lockfile);
            let log_target = output.or(config.log_file);
            run_scan(&lockfile, verbose, log_target)
        }
        Commands::List { output } => {
            let denylist = Denylist::builtin();
            write_package_list(&denylist, &output)?;
            println!("Malicious package list created: {}", output);
            Ok(exit_codes::CLEAN)
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::CLEAN)
        }
    }
}

fn run_scan(lockfile: &str, verbose: bool, log_target: Option<String>) -> Result<u8> {
    print_banner();

    let mut reporter = ConsoleReporter::new(verbose);
    if let Some(path) = &log_target {
        reporter = reporter.with_log(LogFile::create(path)?);
        reporter.emit(Level::Info, &format!("Results will be saved to: {}", path));
    }

    let scanner = Scanner::new(lockfile);
    let verdict = scanner.scan(&reporter);

    print_summary(&verdict);

    match verdict.status {
        ScanStatus::Clean => {
            reporter.emit(Level::Success, "No security threats detected.");
        }
        ScanStatus::ThreatsFound => {
            reporter.emit(
                Level::Error,
                "Security threats found! Please take immediate action.",
            );
            reporter.emit(Level::Info, "For more information about this attack, visit:");
            reporter.emit(
                Level::Info,
                "- https://jfrog.com/blog/shai-hulud-npm-supply-chain-attack-new-compromised-packages-detected/",
            );
            reporter.emit(
                Level::Info,
                "- https://github.com/trufflesecurity/trufflehog (for secret scanning)",
            );
        }
        ScanStatus::Error => {
            reporter.emit(
                Level::Error,
                "Scan did not complete. Fix the reported problem and run it again.",
            );
        }
    }

    if let Some(path) = &log_target {
        reporter.emit(Level::Info, &format!("Detailed results saved to: {}", path));
    }

    Ok(verdict.exit_code())
}

fn print_banner() {
    println!("================================================================");
    println!("  Shai-Hulud NPM Supply Chain Attack Scanner");
    println!("  Detecting malicious packages in npm dependencies");
    println!("================================================================");
    println!();
}

/// Diagnostic logging (parser recovery notes and the like); separate from
/// the reporter, which carries the user-facing scan events.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lockscan=debug")
    } else {
        EnvFilter::new("lockscan=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'lockscan config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
