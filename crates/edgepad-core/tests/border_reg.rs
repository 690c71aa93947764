//! Border expansion regression test
//!
//! Checks edge-clamp replication on fixtures with a distinct value per
//! pixel: dimensions, interior copy, edge strips, corner blocks, and the
//! degenerate single-row / single-column / single-pixel sources.

use edgepad_core::{PixelBuffer, clamp_index};
use edgepad_io::ImageFormat;
use edgepad_test::{RegParams, make_numbered, make_uniform};

/// Check every destination pixel of `dst` against the clamp formula.
fn check_clamp_formula(rp: &mut RegParams, src: &PixelBuffer, dst: &PixelBuffer, margin: u32) {
    let mut mismatches = 0u32;
    for dy in 0..dst.height() {
        for dx in 0..dst.width() {
            let sx = clamp_index(i64::from(dx) - i64::from(margin), src.width());
            let sy = clamp_index(i64::from(dy) - i64::from(margin), src.height());
            if dst.pixel(dx, dy) != src.pixel(sx, sy) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, f64::from(mismatches), 0.0);
}

// ============================================================================
// 4x4 RGB source, margin 2
// ============================================================================

#[test]
fn border_reg_4x4_rgb_margin2() {
    let mut rp = RegParams::new("border_4x4");

    let src = make_numbered(4, 4, 3);
    let dst = src.expand_by_replication(2).unwrap();

    rp.compare_values(8.0, f64::from(dst.width()), 0.0);
    rp.compare_values(8.0, f64::from(dst.height()), 0.0);
    rp.compare_values(3.0, f64::from(dst.channels()), 0.0);

    // Central block is the source unchanged
    let center = dst.remove_border(2).unwrap();
    rp.compare_pix(&src, &center);

    // Corner blocks
    for dy in 0..2 {
        for dx in 0..2 {
            rp.compare_strings(dst.pixel(dx, dy).unwrap(), src.pixel(0, 0).unwrap());
            rp.compare_strings(dst.pixel(6 + dx, dy).unwrap(), src.pixel(3, 0).unwrap());
            rp.compare_strings(dst.pixel(dx, 6 + dy).unwrap(), src.pixel(0, 3).unwrap());
            rp.compare_strings(dst.pixel(6 + dx, 6 + dy).unwrap(), src.pixel(3, 3).unwrap());
        }
    }

    // Edge strips
    for i in 0..4 {
        for d in 0..2 {
            rp.compare_strings(dst.pixel(d, i + 2).unwrap(), src.pixel(0, i).unwrap());
            rp.compare_strings(dst.pixel(6 + d, i + 2).unwrap(), src.pixel(3, i).unwrap());
            rp.compare_strings(dst.pixel(i + 2, d).unwrap(), src.pixel(i, 0).unwrap());
            rp.compare_strings(dst.pixel(i + 2, 6 + d).unwrap(), src.pixel(i, 3).unwrap());
        }
    }

    check_clamp_formula(&mut rp, &src, &dst, 2);
    rp.write_pix_and_check(&dst, ImageFormat::Png).unwrap();

    assert!(rp.cleanup());
}

// ============================================================================
// Property sweep over sizes, channel counts and margins
// ============================================================================

#[test]
fn border_reg_property_sweep() {
    let mut rp = RegParams::new("border_sweep");

    for &(w, h) in &[(1, 1), (1, 4), (4, 1), (2, 3), (5, 5), (9, 2)] {
        for channels in [1, 2, 3, 4] {
            let src = make_numbered(w, h, channels);
            for margin in [0, 1, 2, 5] {
                let dst = src.expand_by_replication(margin).unwrap();
                rp.compare_values(f64::from(w + 2 * margin), f64::from(dst.width()), 0.0);
                rp.compare_values(f64::from(h + 2 * margin), f64::from(dst.height()), 0.0);
                rp.compare_values(f64::from(channels), f64::from(dst.channels()), 0.0);
                check_clamp_formula(&mut rp, &src, &dst, margin);
            }
        }
    }

    assert!(rp.cleanup());
}

// ============================================================================
// Degenerate sources
// ============================================================================

#[test]
fn border_reg_zero_margin_identity() {
    let mut rp = RegParams::new("border_identity");

    let src = make_numbered(7, 5, 4);
    let dst = src.expand_by_replication(0).unwrap();
    rp.compare_pix(&src, &dst);
    rp.compare_strings(src.data(), dst.data());

    assert!(rp.cleanup());
}

#[test]
fn border_reg_single_pixel_uniform() {
    let mut rp = RegParams::new("border_single");

    let src = make_uniform(1, 1, &[200, 100, 50, 255]);
    let dst = src.expand_by_replication(4).unwrap();
    let expected = make_uniform(9, 9, &[200, 100, 50, 255]);
    rp.compare_pix(&expected, &dst);

    assert!(rp.cleanup());
}

#[test]
fn border_reg_single_row_and_column() {
    let mut rp = RegParams::new("border_line");

    // Single row: every destination row equals the expanded source row
    let row = make_numbered(5, 1, 1);
    let dst = row.expand_by_replication(3).unwrap();
    for y in 1..dst.height() {
        rp.compare_strings(dst.row(0), dst.row(y));
    }

    // Single column: every destination column repeats the source column
    let col = make_numbered(1, 5, 1);
    let dst = col.expand_by_replication(3).unwrap();
    for y in 0..dst.height() {
        let first = dst.pixel(0, y).unwrap().to_vec();
        for x in 1..dst.width() {
            rp.compare_strings(&first, dst.pixel(x, y).unwrap());
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn border_reg_general_sides() {
    let mut rp = RegParams::new("border_general");

    let src = make_numbered(3, 2, 3);
    let dst = src.expand_by_replication_general(1, 3, 0, 2).unwrap();
    rp.compare_values(7.0, f64::from(dst.width()), 0.0);
    rp.compare_values(4.0, f64::from(dst.height()), 0.0);

    // No top border: first row is the source's first row, widened
    rp.compare_strings(dst.pixel(0, 0).unwrap(), src.pixel(0, 0).unwrap());
    rp.compare_strings(dst.pixel(1, 0).unwrap(), src.pixel(0, 0).unwrap());
    rp.compare_strings(dst.pixel(6, 0).unwrap(), src.pixel(2, 0).unwrap());
    // Bottom strip replicates the last row
    rp.compare_strings(dst.pixel(2, 3).unwrap(), src.pixel(1, 1).unwrap());
    rp.compare_strings(dst.pixel(6, 3).unwrap(), src.pixel(2, 1).unwrap());

    let restored = dst.remove_border_general(1, 3, 0, 2).unwrap();
    rp.compare_pix(&src, &restored);

    assert!(rp.cleanup());
}

#[test]
fn border_reg_moved_out_buffer_is_empty() {
    let mut slot = make_numbered(3, 3, 3);
    let owned = slot.take();

    assert!(slot.is_empty());
    assert!(slot.expand_by_replication(1).is_err());
    assert!(owned.expand_by_replication(1).is_ok());
}
