use std::io::Cursor;
use std::time::Duration;

use super::*;
use crate::foundation::error::DitherError;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn starts_empty() {
    let src = ImageSource::new();
    assert_eq!(src.status(), ImageStatus::Empty);
    assert!(src.current().is_none());
}

#[test]
fn async_submit_becomes_ready() {
    let src = ImageSource::new();
    src.submit(png_bytes(3, 2));
    let status = src.wait_settled(Duration::from_secs(10));
    assert_eq!(
        status,
        ImageStatus::Ready {
            width: 3,
            height: 2
        }
    );
    let img = src.current().unwrap();
    assert_eq!((img.width, img.height), (3, 2));
}

#[test]
fn failed_decode_is_observable_and_keeps_previous_image() {
    let src = ImageSource::new();
    src.load_blocking(&png_bytes(4, 4)).unwrap();

    src.submit(b"garbage".to_vec());
    let status = src.wait_settled(Duration::from_secs(10));
    assert!(matches!(status, ImageStatus::Failed(_)), "{status:?}");
    assert_eq!(src.current().unwrap().width, 4);
}

#[test]
fn load_blocking_reports_decode_error() {
    let src = ImageSource::new();
    let err = src.load_blocking(b"nope").unwrap_err();
    assert!(matches!(err, DitherError::Decode(_)));
    assert!(matches!(src.status(), ImageStatus::Failed(_)));
}

#[test]
fn newer_submission_replaces_image() {
    let src = ImageSource::new();
    src.load_blocking(&png_bytes(2, 2)).unwrap();
    src.load_blocking(&png_bytes(5, 1)).unwrap();
    assert_eq!(src.current().unwrap().width, 5);
}

#[test]
fn clear_drops_image_and_ignores_in_flight_result() {
    let src = ImageSource::new();
    let generation = src.begin_decode();
    src.clear();
    let img = SourceImage::from_rgba8(1, 1, vec![0, 0, 0, 255]).unwrap();
    src.finish_decode(generation, Ok(img));
    assert_eq!(src.status(), ImageStatus::Empty);
    assert!(src.current().is_none());
}
