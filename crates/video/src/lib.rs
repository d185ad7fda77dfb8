//! Frame acquisition for the posture monitor.
//!
//! The engine only needs a single-channel frame per tick; `FrameSource` is
//! the seam a camera backend plugs into. `ReplaySource` plays back a
//! directory of stills or raw camera buffers so the loop can run without
//! hardware.

pub mod error;
pub mod replay;
pub mod source;

pub use error::VideoError;
pub use replay::ReplaySource;
pub use source::FrameSource;
