//! PNG I/O regression test
//!
//! Round-trips buffers of every supported channel count through files and
//! memory, and checks that failed decodes hand back no buffer.

use edgepad_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image,
    write_image_mem,
};
use edgepad_core::PixelBuffer;
use edgepad_test::{RegParams, make_numbered};

#[test]
fn pngio_reg_file_roundtrip() {
    let mut rp = RegParams::new("pngio_file");
    let dir = tempfile::tempdir().unwrap();

    for channels in 1..=4 {
        let pix = make_numbered(13, 7, channels);
        let path = dir.path().join(format!("img{channels}.png"));

        write_image(&pix, &path, ImageFormat::Png).unwrap();
        assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);

        let pix2 = read_image(&path).unwrap();
        rp.compare_values(f64::from(channels), f64::from(pix2.channels()), 0.0);
        rp.compare_pix(&pix, &pix2);
    }

    assert!(rp.cleanup());
}

#[test]
fn pngio_reg_memory_roundtrip() {
    let mut rp = RegParams::new("pngio_mem");

    let pix = make_numbered(6, 9, 3);
    let encoded = write_image_mem(&pix, ImageFormat::Png).unwrap();
    let pix2 = read_image_mem(&encoded).unwrap();
    rp.compare_pix(&pix, &pix2);

    // Encoding is deterministic
    let encoded2 = write_image_mem(&pix2, ImageFormat::Png).unwrap();
    rp.compare_strings(&encoded, &encoded2);

    rp.write_pix_and_check(&pix, ImageFormat::Png).unwrap();

    assert!(rp.cleanup());
}

#[test]
fn pngio_reg_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_image(dir.path().join("does_not_exist.png"));
    assert!(matches!(result, Err(IoError::Io(_))));
}

#[test]
fn pngio_reg_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.png");

    let pix = make_numbered(8, 8, 4);
    let encoded = write_image_mem(&pix, ImageFormat::Png).unwrap();
    std::fs::write(&path, &encoded[..encoded.len() / 2]).unwrap();

    assert!(read_image(&path).is_err());
}

#[test]
fn pngio_reg_unsupported_formats() {
    let pix = make_numbered(2, 2, 3);
    assert!(matches!(
        write_image_mem(&pix, ImageFormat::Jpeg),
        Err(IoError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        read_image_mem(b"GIF89a\x01\x00\x01\x00"),
        Err(IoError::UnsupportedFormat(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bmp");
    assert!(matches!(
        write_image(&pix, &path, ImageFormat::Bmp),
        Err(IoError::UnsupportedFormat(ImageFormat::Bmp))
    ));
    assert!(!path.exists());
}

#[test]
fn pngio_reg_rejected_buffer_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();

    let empty = dir.path().join("empty.png");
    assert!(matches!(
        write_image(&PixelBuffer::empty(), &empty, ImageFormat::Png),
        Err(IoError::EmptyBuffer)
    ));
    assert!(!empty.exists());

    let wide = dir.path().join("wide.png");
    let pix = PixelBuffer::new(3, 3, 5).unwrap();
    assert!(matches!(
        write_image(&pix, &wide, ImageFormat::Png),
        Err(IoError::ChannelCount(5))
    ));
    assert!(!wide.exists());
}
