//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.
//! Only PNG can be decoded and encoded; the other formats are recognised
//! so that callers get a precise "unsupported" error instead of a
//! decoder failure.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// BMP format
    Bmp,
    /// GIF format
    Gif,
    /// TIFF format
    Tiff,
    /// WebP format
    WebP,
    /// PNM format
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tif",
            Self::WebP => "webp",
            Self::Pnm => "pnm",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            "tif" | "tiff" => Self::Tiff,
            "webp" => Self::WebP,
            "pnm" | "pbm" | "pgm" | "ppm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }

    /// Guess the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// GIF87a / GIF89a
    pub const GIF87A: &[u8] = b"GIF87a";
    pub const GIF89A: &[u8] = b"GIF89a";

    /// TIFF little-endian: II 2A 00, big-endian: MM 00 2A
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::TooShort { len: data.len() });
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }
    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }
    if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        return Ok(ImageFormat::WebP);
    }
    if data[0] == b'P' && (b'1'..=b'6').contains(&data[1]) {
        return Ok(ImageFormat::Pnm);
    }

    Ok(ImageFormat::Unknown)
}
