//! edgepad-test - Regression test framework for edgepad
//!
//! Supports three modes, selected by the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use edgepad_test::RegParams;
//!
//! let mut rp = RegParams::new("border");
//! rp.compare_pix(&expected, &actual);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use edgepad_core::PixelBuffer;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // edgepad-test is at crates/edgepad-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a buffer in which every pixel is distinct from its neighbours.
///
/// Byte `i` of the buffer holds `i % 251`, so pixels only repeat after
/// 251 bytes; small fixtures are fully distinct.
pub fn make_numbered(width: u32, height: u32, channels: u32) -> PixelBuffer {
    let len = width as usize * height as usize * channels as usize;
    let data = (0..len).map(|i| (i % 251) as u8).collect();
    PixelBuffer::from_raw(width, height, channels, data)
        .unwrap_or_else(|e| panic!("invalid fixture {width}x{height}x{channels}: {e}"))
}

/// Build a buffer where every pixel equals `value`.
pub fn make_uniform(width: u32, height: u32, value: &[u8]) -> PixelBuffer {
    let mut pix = PixelBuffer::new(width, height, value.len() as u32)
        .unwrap_or_else(|e| panic!("invalid fixture {width}x{height}: {e}"));
    pix.fill(value)
        .unwrap_or_else(|e| panic!("invalid fill value: {e}"));
    pix
}
