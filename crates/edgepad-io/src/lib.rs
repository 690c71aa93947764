//! edgepad I/O - Decoding and encoding pixel buffers
//!
//! Reads images from files or memory into a [`PixelBuffer`] and writes
//! them back out. PNG is the supported format; the channel count of a
//! decoded image is whatever the file naturally contains.
//!
//! # Example
//!
//! ```no_run
//! use edgepad_io::{ImageFormat, read_image, write_image};
//!
//! let pix = read_image("src_image.png").unwrap();
//! let expanded = pix.expand_by_replication(2).unwrap();
//! write_image(&expanded, "exp_image.png", ImageFormat::Png).unwrap();
//! ```

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use edgepad_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    match detect_format(path)? {
        ImageFormat::Png => {
            let file = File::open(path)?;
            png::read_png(BufReader::new(file))
        }
        other => Err(unsupported(other)),
    }
}

/// Read an image from an in-memory encoded byte slice.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        other => Err(unsupported(other)),
    }
}

/// Write an image to a file path in the given format.
///
/// The file is only created once both the format and the buffer have been
/// accepted, so a rejected write leaves nothing behind.
pub fn write_image<P: AsRef<Path>>(
    pix: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    if format != ImageFormat::Png {
        return Err(unsupported(format));
    }
    png::color_type_for(pix)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    png::write_png(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    if format != ImageFormat::Png {
        return Err(unsupported(format));
    }

    let mut buffer = Vec::new();
    png::write_png(pix, &mut buffer)?;
    Ok(buffer)
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format)
}
