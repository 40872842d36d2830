use super::{Level, LogFile, Reporter};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Renders scan events to the terminal with colored `[LEVEL]` tags,
/// optionally teeing every event into a [`LogFile`].
///
/// Errors and warnings go to stderr, everything else to stdout. Verbose
/// events are shown only when verbose mode is on — but they always reach
/// the log file, so a saved log is complete regardless of console settings.
pub struct ConsoleReporter {
    verbose: bool,
    log: Option<LogFile>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, log: None }
    }

    pub fn with_log(mut self, log: LogFile) -> Self {
        self.log = Some(log);
        self
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Error => eprintln!("{RED}[ERROR]{RESET} {message}"),
            Level::Warning => eprintln!("{YELLOW}[WARNING]{RESET} {message}"),
            Level::Success => println!("{GREEN}[SUCCESS]{RESET} {message}"),
            Level::Info => println!("{BLUE}[INFO]{RESET} {message}"),
            Level::Verbose => {
                if self.verbose {
                    println!("{BLUE}[VERBOSE]{RESET} {message}");
                }
            }
        }

        if let Some(log) = &self.log {
            log.append(level, message);
        }
    }
}
