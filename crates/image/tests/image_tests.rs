use {
    base::Vec2,
    image::{Frame, GrayImage, ImageError, PixelFormat, RawImage},
};

#[test]
fn test_frame_new_checks_length() {
    let data = vec![0u8; 6];
    assert!(Frame::new(Vec2::new(3, 2), &data).is_ok());
    assert!(matches!(
        Frame::new(Vec2::new(4, 2), &data),
        Err(ImageError::Size(_))
    ));
}

#[test]
fn test_frame_pixel_is_row_major() {
    let image = GrayImage::from_fn(Vec2::new(3, 2), |x, y| (y * 3 + x) as u8);
    let frame = image.as_frame();
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.pixel(2, 0), 2);
    assert_eq!(frame.pixel(0, 1), 3);
}

#[test]
fn test_gray_image_filled() {
    let image = GrayImage::filled(Vec2::new(4, 4), 200);
    assert_eq!(image.data().len(), 16);
    assert!(image.data().iter().all(|&p| p == 200));
}

#[test]
fn test_gray_image_new_rejects_short_buffer() {
    assert!(matches!(
        GrayImage::new(Vec2::new(64, 48), vec![100; 10]),
        Err(ImageError::Size(_))
    ));
}

#[test]
fn test_gray_image_frame_covers_every_pixel() {
    let image = GrayImage::new(Vec2::new(64, 48), vec![100; 64 * 48]).unwrap();
    let frame = image.as_frame();
    assert_eq!(frame.size(), image.size());
    assert_eq!(frame.pixels().len(), 64 * 48);
    assert_eq!(frame.pixel(63, 47), 100);
}

#[test]
fn test_raw_gray_to_gray() {
    let raw = RawImage::new(Vec2::new(2, 2), vec![1, 2, 3, 4], PixelFormat::Gray8);
    let gray = raw.to_gray().unwrap();
    assert_eq!(gray.data(), vec![1, 2, 3, 4]);
}

#[test]
fn test_raw_rgb_to_gray() {
    let raw = RawImage::new(
        Vec2::new(2, 1),
        vec![0, 0, 0, 255, 255, 255],
        PixelFormat::Rgb8,
    );
    let gray = raw.to_gray().unwrap();
    assert_eq!(gray.size(), Vec2::new(2, 1));
    assert_eq!(gray.data(), vec![0, 255]);
}

#[test]
fn test_raw_yuyv_to_gray() {
    let raw = RawImage::new(Vec2::new(2, 1), vec![16, 128, 235, 128], PixelFormat::Yuyv);
    assert_eq!(raw.to_gray().unwrap().data(), vec![16, 235]);
}

#[test]
fn test_raw_short_buffer_is_error() {
    let raw = RawImage::new(Vec2::new(2, 2), vec![0; 5], PixelFormat::Rgb8);
    assert!(matches!(raw.to_gray(), Err(ImageError::Size(_))));
}

#[test]
fn test_pixel_format_fourcc_roundtrip() {
    for format in [
        PixelFormat::Gray8,
        PixelFormat::Rgb8,
        PixelFormat::Yuyv,
        PixelFormat::Jpeg,
    ] {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()).unwrap(), format);
    }
    assert!(PixelFormat::from_fourcc(u32::from_le_bytes(*b"XXXX")).is_err());
}
