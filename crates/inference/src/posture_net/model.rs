use {
    super::{POOL_STAGES, PostureNet},
    crate::{InferError, ModelInput, ModelOutput, ModelSpec, Session},
    base::Vec2,
    candle_core::{DType, Device, Tensor as CanTensor},
    candle_nn::{Module, VarBuilder},
    std::{collections::HashMap, path::Path},
};

/// A loaded [`PostureNet`] behind the [`Session`] seam.
#[derive(Debug)]
pub struct PostureModel {
    net: PostureNet,
    spec: ModelSpec,
    device: Device,
}

impl PostureModel {
    /// Load weights and the model spec from a safetensors file.
    pub(crate) fn new(
        model_path: impl AsRef<Path>,
        default_size: Vec2<usize>,
        device: Device,
    ) -> Result<Self, InferError> {
        let path = model_path.as_ref();
        let spec = read_model_spec(path, default_size)?;

        let weights = unsafe { VarBuilder::from_mmaped_safetensors(&[path], DType::F32, &device)? };

        let model = Self::load(weights, spec, device)?;
        log::info!(
            "posture model {}: input {}x{}, int8 input {}, int8 output {}",
            path.display(),
            model.spec.input_size.x,
            model.spec.input_size.y,
            model.spec.input_quantization.is_some(),
            model.spec.output_quantization.is_some(),
        );
        Ok(model)
    }

    pub fn load(vb: VarBuilder, spec: ModelSpec, device: Device) -> Result<Self, InferError> {
        let min_side = 1 << POOL_STAGES;
        if spec.input_size.x < min_side || spec.input_size.y < min_side {
            return Err(InferError::Shape(format!(
                "input {}x{} is smaller than {min_side}x{min_side}",
                spec.input_size.x, spec.input_size.y
            )));
        }
        let net = PostureNet::load(vb)?;
        Ok(Self { net, spec, device })
    }

    fn input_values(&self, input: ModelInput) -> Result<Vec<f32>, InferError> {
        match (input, &self.spec.input_quantization) {
            (ModelInput::F32(tensor), None) => Ok(tensor.data),
            (ModelInput::I8(tensor), Some(quantization)) => Ok(tensor
                .data
                .iter()
                .map(|&q| quantization.dequantize(q))
                .collect()),
            (ModelInput::F32(_), Some(_)) => Err(InferError::Runtime(
                "model expects an int8 input tensor".to_string(),
            )),
            (ModelInput::I8(_), None) => Err(InferError::Runtime(
                "model expects a float input tensor".to_string(),
            )),
        }
    }
}

impl Session for PostureModel {
    fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    fn run(&mut self, input: ModelInput) -> Result<ModelOutput, InferError> {
        let shape = self.spec.input_shape();
        if input.shape() != shape.as_slice() {
            return Err(InferError::Shape(format!(
                "expected input shape {:?}, got {:?}",
                shape,
                input.shape()
            )));
        }
        let values = self.input_values(input)?;
        let xs = CanTensor::from_vec(values, shape, &self.device)?;
        let probs: Vec<f32> = self.net.forward(&xs)?.flatten_all()?.to_vec1()?;

        Ok(match &self.spec.output_quantization {
            Some(quantization) => {
                ModelOutput::I8(probs.iter().map(|&p| quantization.quantize(p)).collect())
            }
            None => ModelOutput::F32(probs),
        })
    }
}

/// Check the first layer takes one channel and read the spec from `__metadata__`.
fn read_model_spec(path: &Path, default_size: Vec2<usize>) -> Result<ModelSpec, InferError> {
    use safetensors::SafeTensors;

    let file = std::fs::File::open(path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file) }
        .map_err(|e| InferError::Io(format!("failed to memory-map safetensors file: {e}")))?;

    let tensors = SafeTensors::deserialize(&mmap)
        .map_err(|e| InferError::Io(format!("failed to deserialize safetensors: {e}")))?;

    // Key: "conv1.weight", shape: [out_channels, in_channels, kH, kW]
    let key = "conv1.weight";
    let tensor_view = tensors
        .tensor(key)
        .map_err(|e| InferError::Shape(format!("key '{}' not found in safetensors: {e}", key)))?;
    let shape = tensor_view.shape();
    if shape.len() != 4 || shape[1] != 1 {
        return Err(InferError::Shape(format!(
            "{} must be [out, 1, k, k] for grayscale input, got {:?}",
            key, shape
        )));
    }

    let (_, metadata) = SafeTensors::read_metadata(&mmap)
        .map_err(|e| InferError::Metadata(format!("failed to read safetensors header: {e}")))?;
    let empty = HashMap::new();
    let entries = metadata.metadata().as_ref().unwrap_or(&empty);
    ModelSpec::from_metadata(entries, default_size)
}
