use {
    base::Vec2,
    crates_image::ImageEncoder,
    image::{ImageError, PixelFormat, RawImage, decode_gray},
};

fn encode_png_luma(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let img = crates_image::GrayImage::from_fn(width, height, |x, y| crates_image::Luma([f(x, y)]));
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, crates_image::ExtendedColorType::L8)
        .unwrap();
    buffer
}

#[tokio::test]
async fn test_decode_png_luma() {
    let png = encode_png_luma(4, 3, |x, y| (x * 10 + y) as u8);

    let gray = decode_gray(png).await.unwrap();

    assert_eq!(gray.size(), Vec2::new(4, 3));
    assert_eq!(gray.data()[0], 0);
    assert_eq!(gray.data()[3], 30);
    assert_eq!(gray.data()[4], 1);
}

#[tokio::test]
async fn test_decode_jpeg_rgb_to_luma() {
    let img = crates_image::RgbImage::from_fn(8, 8, |_, _| crates_image::Rgb([128, 128, 128]));
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .encode_image(&img)
        .unwrap();

    let gray = decode_gray(buffer.clone()).await.unwrap();
    assert_eq!(gray.size(), Vec2::new(8, 8));
    assert!(gray.data().iter().all(|&p| (p as i32 - 128).abs() <= 3));

    // the same bytes through the camera-buffer path
    let raw = RawImage::new(Vec2::new(8, 8), buffer, PixelFormat::Jpeg);
    assert_eq!(raw.to_gray().unwrap().size(), Vec2::new(8, 8));
}

#[tokio::test]
async fn test_decode_garbage_fails() {
    let result = decode_gray(vec![0x00, 0x01, 0x02, 0x03]).await;
    assert!(matches!(result, Err(ImageError::Decode(_))));
}
