//! Single-channel frames for the posture engine.
//!
//! Camera buffers arrive in whatever format the sensor produces; everything
//! here ends in an 8-bit luma `GrayImage`, borrowed as a `Frame` by the
//! classifiers. `resize_bilinear` is the preprocessing step shared by the
//! model backends.

pub mod decode;
pub mod error;
pub mod frame;
pub mod pixelformat;
pub mod resize;

pub use decode::{decode_gray, decode_gray_blocking};
pub use error::ImageError;
pub use frame::{Frame, GrayImage};
pub use pixelformat::{PixelFormat, RawImage};
pub use resize::{quantize, resize_bilinear};
