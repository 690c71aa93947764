//! edgepad - Grow an image canvas by replicating its edge pixels
//!
//! The library side re-exports the building blocks; the `edgepad` binary
//! wires them together.
//!
//! # Example
//!
//! ```
//! use edgepad::PixelBuffer;
//!
//! let src = PixelBuffer::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
//! let dst = src.expand_by_replication(1).unwrap();
//! assert_eq!(dst.width(), 4);
//! assert_eq!(dst.row(0), &[1, 1, 2, 2]);
//! assert_eq!(dst.row(3), &[3, 3, 4, 4]);
//! ```

// Re-export core types
pub use edgepad_core::*;

// Re-export the codec crate as a module
pub use edgepad_io as io;

pub mod app;
pub mod cli;
pub mod logger;
pub mod paths;
