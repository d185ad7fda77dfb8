pub mod error;
pub mod inference;
pub mod posture_net;
pub mod session;

pub use error::InferError;
pub use inference::Inference;
pub use posture_net::{PostureModel, PostureNet};
pub use session::{ModelInput, ModelOutput, ModelSpec, Session};
