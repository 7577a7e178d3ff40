//! Verbosity-gated logging for the library and the CLI

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-vv)
    Debug = 2,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Normal => "",
            LogLevel::Info => "info: ",
            LogLevel::Debug => "dbg: ",
        }
    }
}

/// Logger for application messages
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        log(msg, self.verbosity, level);
    }

    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }
}

/// Format a message for `level`, or `None` when `verbosity` is too low to show it
pub fn format_line(msg: &str, verbosity: u8, level: LogLevel) -> Option<String> {
    (verbosity >= level as u8).then(|| format!("{}{}", level.prefix(), msg))
}

/// Log a message if the verbosity level is at least the specified level.
///
/// Normal messages go to stdout; info and debug go to stderr so they never mix
/// with command output such as a key listing.
///
/// # Arguments
///
/// * `msg` - The message to log
/// * `verbosity` - The current verbosity level (0 = normal, 1 = info, 2+ = debug)
/// * `level` - The minimum level required for this message to be logged
pub fn log(msg: &str, verbosity: u8, level: LogLevel) {
    if let Some(line) = format_line(msg, verbosity, level) {
        match level {
            LogLevel::Normal => println!("{line}"),
            LogLevel::Info | LogLevel::Debug => eprintln!("{line}"),
        }
    }
}

/// Log at info level (verbose >= 1)
pub fn info(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Info)
}

/// Log at debug level (verbose >= 2)
pub fn debug(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Debug)
}
