//! edgepad Core - Pixel buffer and border expansion
//!
//! This crate provides the owned raster type and the border algorithm
//! used throughout edgepad:
//!
//! - [`PixelBuffer`] - Move-only owned pixel buffer (width, height,
//!   channel count, row-major bytes)
//! - [`PixelBuffer::expand_by_replication`] - Grow the canvas by a margin,
//!   filling the border with the nearest edge pixel
//! - [`clamp_index`] - The edge-clamp index map the border follows
//!
//! Decoding and encoding live in `edgepad-io`.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{PixelBuffer, clamp_index};
