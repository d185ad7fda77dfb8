pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod quantization;
pub use quantization::*;

mod rect;
pub use rect::*;

mod tensor;
pub use tensor::*;

mod trigger;
pub use trigger::*;

mod vec2;
pub use vec2::*;

// downstream crates can use base::log::*
pub use log;
