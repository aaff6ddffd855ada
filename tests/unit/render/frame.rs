use super::*;

#[test]
fn blank_frame_is_opaque_black() {
    let f = OutputFrame::blank(Canvas::new(3, 2).unwrap());
    assert_eq!(f.data.len(), 24);
    assert_eq!(f.pixel(2, 1), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(3, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn write_pixel_lands_in_row() {
    let mut f = OutputFrame::blank(Canvas::new(2, 2).unwrap());
    let stride = f.stride();
    let row = &mut f.data[stride..2 * stride];
    OutputFrame::write_pixel(row, 1, Rgb::WHITE);
    assert_eq!(f.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(0, 1), Some([0, 0, 0, 255]));
}

#[test]
fn png_encoding_decodes_back_to_same_pixels() {
    let mut f = OutputFrame::blank(Canvas::new(4, 3).unwrap());
    for (i, b) in f.data.iter_mut().enumerate() {
        if i % 4 != 3 {
            *b = (i * 7 % 251) as u8;
        }
    }
    let png = f.encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 3));
    assert_eq!(back.into_raw(), f.data);
}

#[test]
fn mismatched_buffer_is_encode_error() {
    let f = OutputFrame {
        width: 4,
        height: 4,
        data: vec![0; 10],
    };
    let err = f.encode_png().unwrap_err();
    assert!(matches!(err, DitherError::Encode(_)));
}
