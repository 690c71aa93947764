//! Command-line surface.
//!
//! Every argument is optional. Run without arguments, the program reads
//! `src_image.png` next to the executable, writes `exp_image.png` next to
//! it with a 2 pixel border, and logs to `log.txt` in the same place.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::app::{Config, DEFAULT_INPUT, DEFAULT_LOG_FILE, DEFAULT_MARGIN, DEFAULT_OUTPUT};
use crate::paths;

#[derive(Parser, Debug)]
#[command(name = "edgepad", version)]
#[command(about = "Expand an image canvas by replicating its edge pixels")]
pub struct Cli {
    /// Base directory for relative paths [default: the executable's directory]
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Input image
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Output PNG
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Border thickness in pixels, added on every side
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,
    /// Log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,
    /// Least severe level that is logged
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    None,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::None => LevelFilter::Off,
        }
    }
}

/// Parsed command line with every path resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Cli {
    /// Base directory: `--dir`, else the executable's directory.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(paths::base_path)
    }

    /// Resolve all file arguments against `base`.
    pub fn into_settings(self, base: &Path) -> Settings {
        Settings {
            config: Config {
                input: paths::resolve(base, &self.input),
                output: paths::resolve(base, &self.output),
                margin: self.margin,
            },
            log_file: (!self.no_log_file).then(|| paths::resolve(base, &self.log_file)),
            log_level: self.log_level.into(),
        }
    }
}
