//! End-to-end scans of rendered QR images
//!
//! Each test renders real symbols, writes them to a temporary PNG, and runs
//! the loader, the default pipeline and the reporter exactly as the CLI does.

mod common;

use common::{render_row, render_row_rgb, save_gray};
use image::{GrayImage, Luma};
use qr_payload::report::{MULTIPLE_DETECTED_MESSAGE, NONE_DETECTED_MESSAGE, render};
use qr_payload::loader::load_raster;
use qr_payload::preprocess::preprocess;
use qr_payload::{
    InvalidPayload, Outcome, PreprocessConfig, RqrrDetector, SymbolDetector, Validation, scan_file,
};
use tempfile::TempDir;

fn scan_output(path: &std::path::Path) -> Vec<u8> {
    let scan = scan_file(path).expect("scan succeeds");
    render(&scan.outcomes)
}

#[test]
fn test_single_code_hello() {
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "hello.png", &render_row(&[b"aGVsbG8="]));

    let scan = scan_file(&path).unwrap();
    assert_eq!(scan.symbol_count(), 1);
    assert!(matches!(scan.outcomes.as_slice(), [Outcome::Decoded(_)]));
    assert_eq!(render(&scan.outcomes), b"hello");
}

#[test]
fn test_single_code_not_base64_is_silent() {
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "hashes.png", &render_row(&[b"####"]));

    let scan = scan_file(&path).unwrap();
    assert_eq!(scan.outcomes, vec![Outcome::NoValidPayload]);
    match &scan.validations[0] {
        Validation::Invalid { raw, .. } => assert_eq!(raw.data, b"####"),
        other => panic!("expected invalid payload, got {:?}", other),
    }
    assert!(render(&scan.outcomes).is_empty());
}

#[test]
fn test_binary_payload_is_silent() {
    // "/w==" is valid base64 for the byte 0xff, which is not text
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "binary.png", &render_row(&[b"/w=="]));

    let scan = scan_file(&path).unwrap();
    assert_eq!(scan.symbol_count(), 1);
    match &scan.validations[0] {
        Validation::Invalid { raw, cause } => {
            assert_eq!(raw.data, b"/w==");
            assert_eq!(*cause, InvalidPayload::DecodedNotText);
        }
        other => panic!("expected invalid payload, got {:?}", other),
    }
    assert!(render(&scan.outcomes).is_empty());
}

#[test]
fn test_two_codes_one_malformed() {
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "two.png", &render_row(&[b"YQ==", b"####"]));

    let scan = scan_file(&path).unwrap();
    assert_eq!(scan.symbol_count(), 2);
    let expected = format!("{}\na", MULTIPLE_DETECTED_MESSAGE);
    assert_eq!(render(&scan.outcomes), expected.as_bytes());
}

#[test]
fn test_two_valid_codes_follow_detector_order() {
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "pair.png", &render_row(&[b"YQ==", b"Yg=="]));

    let scan = scan_file(&path).unwrap();
    let payloads: Vec<&[u8]> = scan.payloads().map(|p| p.decoded()).collect();
    assert_eq!(payloads.len(), 2);

    let mut expected = format!("{}\n", MULTIPLE_DETECTED_MESSAGE).into_bytes();
    for payload in &payloads {
        expected.extend_from_slice(payload);
    }
    assert_eq!(render(&scan.outcomes), expected);

    let mut sorted = payloads.clone();
    sorted.sort();
    assert_eq!(sorted, vec![b"a".as_slice(), b"b".as_slice()]);
}

#[test]
fn test_blank_image() {
    let dir = TempDir::new().unwrap();
    let blank = GrayImage::from_pixel(64, 48, Luma([255]));
    let path = save_gray(dir.path(), "blank.png", &blank);

    let expected = format!("{}\n", NONE_DETECTED_MESSAGE);
    assert_eq!(scan_output(&path), expected.as_bytes());
}

#[test]
fn test_color_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("color.png");
    render_row_rgb(&[b"aGVsbG8gd29ybGQ="]).save(&path).unwrap();

    assert_eq!(scan_output(&path), b"hello world");
}

#[test]
fn test_regions_lie_inside_source_image() {
    let dir = TempDir::new().unwrap();
    let img = render_row(&[b"aGVsbG8="]);
    let (w, h) = (img.width() as f32, img.height() as f32);
    let path = save_gray(dir.path(), "region.png", &img);

    let config = PreprocessConfig::default();
    let raster = load_raster(&path).unwrap();
    let prepared = preprocess(&raster, &config).unwrap();
    let raws = RqrrDetector::new().detect(&prepared).unwrap();
    assert_eq!(raws.len(), 1);

    let bb = raws[0].region.scaled_down(config.upscale_factor()).bounding_box();
    assert!(bb.min_x >= 0.0 && bb.max_x <= w);
    assert!(bb.min_y >= 0.0 && bb.max_y <= h);
    assert!(bb.width() > 0.0 && bb.height() > 0.0);
    assert_eq!(raws[0].info.map(|i| i.version), Some(1));
}

#[test]
fn test_repeat_scans_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = save_gray(dir.path(), "again.png", &render_row(&[b"YQ==", b"!!!!"]));

    let first = scan_output(&path);
    let second = scan_output(&path);
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = scan_file(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, qr_payload::ScanError::Load { .. }));
}

#[test]
fn test_unsupported_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, b"this is not an image").unwrap();
    assert!(scan_file(&path).is_err());
}
