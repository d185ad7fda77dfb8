use {crate::VideoError, image::GrayImage};

/// Anything that can hand the sampling loop one grayscale frame at a time.
///
/// `Ok(None)` means no frame is available for this tick. Errors are
/// transient as far as the loop is concerned; both skip the tick.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    async fn next_frame(&mut self) -> Result<Option<GrayImage>, VideoError>;
}
