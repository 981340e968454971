use super::*;
use crate::lengths::ReadLengths;
use crate::render::chart::BarChart;
use tempfile::tempdir;

fn sample_svg() -> String {
    BarChart::from_lengths(&ReadLengths::from(vec![4, 9, 2]).sorted()).to_svg()
}

#[test]
fn writes_svg_verbatim() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("lengths.svg");
    let svg = sample_svg();
    save(&svg, &path).expect("save");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), svg);
}

#[cfg(feature = "raster")]
#[test]
fn writes_png_with_signature() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("lengths.png");
    save(&sample_svg(), &path).expect("save");
    let bytes = std::fs::read(&path).expect("read");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[cfg(feature = "raster")]
#[test]
fn writes_jpeg_for_both_spellings() {
    let dir = tempdir().expect("tempdir");
    for name in ["lengths.jpg", "lengths.jpeg"] {
        let path = dir.path().join(name);
        save(&sample_svg(), &path).expect("save");
        let bytes = std::fs::read(&path).expect("read");
        assert_eq!(&bytes[..3], b"\xff\xd8\xff", "{name}");
    }
}

#[cfg(feature = "raster")]
#[test]
fn writes_tiff_for_both_spellings() {
    let dir = tempdir().expect("tempdir");
    for name in ["lengths.tif", "lengths.tiff"] {
        let path = dir.path().join(name);
        save(&sample_svg(), &path).expect("save");
        let bytes = std::fs::read(&path).expect("read");
        assert!(bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"), "{name}");
    }
}

#[cfg(feature = "pdf")]
#[test]
fn writes_pdf_with_header() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("lengths.pdf");
    save(&sample_svg(), &path).expect("save");
    let bytes = std::fs::read(&path).expect("read");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn unknown_extension_is_rejected_without_writing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("lengths.bmp");
    let err = save(&sample_svg(), &path).expect_err("should fail");
    assert!(matches!(err, RenderError::UnsupportedExtension(_)));
    assert!(!path.exists());
}

#[test]
fn malformed_svg_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.svg");
    let err = save("<svg", &path).expect_err("should fail");
    assert!(matches!(err, RenderError::Svg(_)));
}
