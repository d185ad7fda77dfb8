use {
    crate::{error::InferError, posture_net::PostureModel},
    base::Vec2,
    candle_core::Device,
    std::path::Path,
};

#[derive(Debug)]
pub struct Inference {
    device: Device,
}

impl Inference {
    pub fn cpu() -> Result<Self, InferError> {
        log::info!("Inference device: CPU");
        Ok(Self {
            device: Device::Cpu,
        })
    }

    #[cfg(feature = "cuda")]
    pub fn cuda(ordinal: usize) -> Result<Self, InferError> {
        let device = Device::new_cuda(ordinal)?;
        if device.is_cuda() {
            log::info!("Inference device: CUDA (ordinal {})", ordinal);
        } else {
            log::warn!(
                "Inference device: requested CUDA ordinal {} but device reports non-CUDA",
                ordinal
            );
        }
        Ok(Self { device })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Load a posture classifier; `default_input` applies when the file carries no input size.
    pub fn use_posture_model(
        &self,
        model_path: impl AsRef<Path>,
        default_input: Vec2<usize>,
    ) -> Result<PostureModel, InferError> {
        PostureModel::new(model_path, default_input, self.device.clone())
    }
}
