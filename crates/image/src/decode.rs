use {
    crate::{GrayImage, ImageError},
    base::Vec2,
};

/// Decode an encoded image (JPEG, PNG, BMP) straight to 8-bit luma.
pub fn decode_gray_blocking(data: &[u8]) -> Result<GrayImage, ImageError> {
    let luma = crates_image::load_from_memory(data)?.to_luma8();
    let (width, height) = luma.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty("decoded image has no pixels".to_string()));
    }
    GrayImage::new(
        Vec2::new(width as usize, height as usize),
        luma.into_raw(),
    )
}

/// Decode an encoded image to 8-bit luma.
///
/// The CPU-bound decoding work runs on tokio's blocking thread pool.
pub async fn decode_gray(data: Vec<u8>) -> Result<GrayImage, ImageError> {
    tokio::task::spawn_blocking(move || decode_gray_blocking(&data))
        .await
        .map_err(|e| ImageError::Decode(e.to_string()))?
}
