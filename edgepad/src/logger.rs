//! Session logger.
//!
//! Prints `[elapsed LEVEL] message` to stderr and, when a log file could be
//! opened, appends the same line to it. The logger is created once in
//! `main` and handed to the code that reports progress as a `&dyn Log`,
//! so tests can substitute their own sink. Records go through the `log`
//! macros with an explicit `logger:` argument.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

pub struct SessionLogger {
    level: LevelFilter,
    started: Instant,
    file: Option<Mutex<File>>,
}

impl SessionLogger {
    /// Logger writing to stderr only.
    ///
    /// Lifts the `log` crate's global level cap to `Trace` so the macros
    /// reach this logger; filtering by `level` happens in [`Log::enabled`].
    pub fn new(level: LevelFilter) -> Self {
        log::set_max_level(LevelFilter::Trace);

        let logger = SessionLogger {
            level,
            started: Instant::now(),
            file: None,
        };
        log::debug!(logger: &logger, "Log constructed");
        logger
    }

    /// Logger writing to stderr and to the file at `path`.
    ///
    /// The file is truncated. Its directory must already exist. If the
    /// file cannot be created the failure is logged and the logger falls
    /// back to stderr only.
    pub fn with_file(level: LevelFilter, path: &Path) -> Self {
        let mut logger = Self::new(level);

        match File::create(path) {
            Ok(file) => {
                logger.file = Some(Mutex::new(file));
                log::info!(logger: &logger, "Opened log file {}", path.display());
            }
            Err(e) => {
                log::error!(logger: &logger, "Failed to open log file {}: {e}", path.display());
            }
        }

        logger
    }

    /// Whether records are also going to a file.
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{:7.3}s {:>5}] {}",
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.args()
        );

        let _ = writeln!(std::io::stderr(), "{line}");

        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

impl Drop for SessionLogger {
    fn drop(&mut self) {
        if self.file.is_some() {
            log::info!(logger: &*self, "Closed log file");
        }
    }
}
