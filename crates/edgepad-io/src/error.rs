//! I/O error types

use crate::format::ImageFormat;
use thiserror::Error;

/// Why an image could not be read or written.
///
/// A failed decode never hands back a partially filled buffer.
#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing the file failed
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// Too few bytes to tell what the data is
    #[error("{len} byte(s) of data is too short to identify an image format")]
    TooShort { len: usize },

    /// Recognised format without a codec here
    #[error("{0:?} images are not supported, only PNG")]
    UnsupportedFormat(ImageFormat),

    /// The PNG decoder rejected the stream
    #[error("PNG decoding failed: {0}")]
    Decode(#[from] png::DecodingError),

    /// The PNG encoder failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// Decoded rows that do not fit an 8-bit interleaved buffer
    #[error("unexpected PNG pixel layout: {0}")]
    Layout(String),

    /// Nothing to encode
    #[error("cannot encode an empty buffer")]
    EmptyBuffer,

    /// PNG stores 1 to 4 channels
    #[error("PNG cannot store {0} channels per pixel")]
    ChannelCount(u32),

    /// Building the pixel buffer failed
    #[error(transparent)]
    Core(#[from] edgepad_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
