//! PNG image format support
//!
//! Decoding normalises every PNG to 8 bits per channel at its natural
//! channel count: palettes are expanded to RGB(A), `tRNS` chunks become an
//! alpha channel, low bit depths are widened and 16-bit samples are
//! stripped to their high byte.

use crate::{IoError, IoResult};
use edgepad_core::PixelBuffer;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::Layout(format!("bit depth {:?}", bit_depth)));
    }
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::Layout("palette was not expanded".to_string()));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or(IoError::Core(edgepad_core::Error::AllocationFailed))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader.next_frame(&mut buf)?;

    let width = output_info.width;
    let height = output_info.height;
    let stride = width as usize * channels as usize;
    let line_size = output_info.line_size;
    if line_size < stride || buf.len() < line_size * height as usize {
        return Err(IoError::Layout(format!(
            "line size {} too small for {}x{}x{}",
            line_size, width, height, channels
        )));
    }

    buf.truncate(output_info.buffer_size());
    let data = if line_size == stride {
        buf
    } else {
        let mut packed = Vec::with_capacity(stride * height as usize);
        for row in buf.chunks(line_size).take(height as usize) {
            packed.extend_from_slice(&row[..stride]);
        }
        packed
    };

    Ok(PixelBuffer::from_raw(width, height, channels, data)?)
}

/// PNG color type for `pix`, or why it cannot be encoded.
///
/// Buffers with 1, 2, 3 or 4 channels map to 8-bit Grayscale,
/// GrayscaleAlpha, RGB or RGBA respectively.
pub fn color_type_for(pix: &PixelBuffer) -> IoResult<ColorType> {
    if pix.is_empty() {
        return Err(IoError::EmptyBuffer);
    }

    match pix.channels() {
        1 => Ok(ColorType::Grayscale),
        2 => Ok(ColorType::GrayscaleAlpha),
        3 => Ok(ColorType::Rgb),
        4 => Ok(ColorType::Rgba),
        n => Err(IoError::ChannelCount(n)),
    }
}

/// Write a PNG image
///
/// See [`color_type_for`] for the buffers that can be written.
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let color_type = color_type_for(pix)?;

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pix.data())?;
    writer.finish()?;

    Ok(())
}
