//! Load, expand, save.
//!
//! [`run`] is the whole program minus argument parsing and logger setup:
//! it decodes the input image, grows its canvas by the configured margin
//! with edge replication, and encodes the result as PNG.

use std::path::PathBuf;

use edgepad_io::{ImageFormat, IoError};
use log::Log;
use thiserror::Error;

use crate::paths;

/// Default input file name, resolved against the base directory.
pub const DEFAULT_INPUT: &str = "src_image.png";
/// Default output file name, resolved against the base directory.
pub const DEFAULT_OUTPUT: &str = "exp_image.png";
/// Default log file name, resolved against the base directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";
/// Default border thickness in pixels.
pub const DEFAULT_MARGIN: u32 = 2;

/// What to expand and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub margin: u32,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot determine the executable's directory")]
    BasePath,

    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("failed to expand image: {0}")]
    Expand(#[from] edgepad_core::Error),

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}

impl AppError {
    /// Process exit status for this failure.
    ///
    /// Status 2 is left to argument parsing errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::BasePath | AppError::Load { .. } => 1,
            AppError::Save { .. } => 3,
            AppError::Expand(_) => 4,
        }
    }
}

/// Expand `config.input` by `config.margin` and write it to `config.output`.
///
/// Each failure is reported to `logger` once, at error level, before it is
/// returned. Nothing is written when loading fails, not even the output
/// directory.
pub fn run(config: &Config, logger: &dyn Log) -> Result<(), AppError> {
    log::info!(logger: logger, "Loading {}", config.input.display());

    let src = edgepad_io::read_image(&config.input).map_err(|source| {
        let err = AppError::Load {
            path: config.input.clone(),
            source,
        };
        log::error!(logger: logger, "{err}");
        err
    })?;

    log::debug!(
        logger: logger,
        "Source is {}x{} with {} channel(s)",
        src.width(),
        src.height(),
        src.channels()
    );

    let result = src.expand_by_replication(config.margin).map_err(|e| {
        let err = AppError::from(e);
        log::error!(logger: logger, "{err}");
        err
    })?;
    drop(src);

    let named = ImageFormat::from_path(&config.output);
    if named != ImageFormat::Png {
        log::warn!(
            logger: logger,
            "{} does not have a .png extension; writing PNG anyway",
            config.output.display()
        );
    }

    let saved = paths::ensure_parent_dir(&config.output)
        .map_err(IoError::from)
        .and_then(|()| edgepad_io::write_image(&result, &config.output, ImageFormat::Png));
    if let Err(source) = saved {
        let err = AppError::Save {
            path: config.output.clone(),
            source,
        };
        log::error!(logger: logger, "{err}");
        return Err(err);
    }

    log::info!(
        logger: logger,
        "Wrote {}x{} image to {}",
        result.width(),
        result.height(),
        config.output.display()
    );

    Ok(())
}
