use {
    crate::InferError,
    base::{Quantization, Tensor, Vec2},
    std::{collections::HashMap, str::FromStr},
};

/// What a loaded model expects and produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    /// Input width/height in pixels; the input tensor is `[1, 1, height, width]`.
    pub input_size: Vec2<usize>,
    /// Present when the model takes an int8 input tensor.
    pub input_quantization: Option<Quantization>,
    /// Present when the model hands back int8 class scores.
    pub output_quantization: Option<Quantization>,
}

impl ModelSpec {
    pub fn float(input_size: Vec2<usize>) -> Self {
        Self {
            input_size,
            input_quantization: None,
            output_quantization: None,
        }
    }

    /// Build a spec from safetensors `__metadata__` entries.
    ///
    /// `input_width`/`input_height` override `default_size`. Quantization is
    /// declared by `{input,output}_scale` together with `{input,output}_zero_point`.
    pub fn from_metadata(
        metadata: &HashMap<String, String>,
        default_size: Vec2<usize>,
    ) -> Result<Self, InferError> {
        let width = parse_entry::<usize>(metadata, "input_width")?.unwrap_or(default_size.x);
        let height = parse_entry::<usize>(metadata, "input_height")?.unwrap_or(default_size.y);
        Ok(Self {
            input_size: Vec2::new(width, height),
            input_quantization: parse_quantization(metadata, "input")?,
            output_quantization: parse_quantization(metadata, "output")?,
        })
    }

    /// `[1, 1, height, width]`
    pub fn input_shape(&self) -> Vec<usize> {
        vec![1, 1, self.input_size.y, self.input_size.x]
    }
}

fn parse_entry<T: FromStr>(
    metadata: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, InferError> {
    match metadata.get(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| InferError::Metadata(format!("invalid value for {key}: {value:?}"))),
    }
}

fn parse_quantization(
    metadata: &HashMap<String, String>,
    prefix: &str,
) -> Result<Option<Quantization>, InferError> {
    let scale = parse_entry::<f32>(metadata, &format!("{prefix}_scale"))?;
    let zero_point = parse_entry::<i32>(metadata, &format!("{prefix}_zero_point"))?;
    match (scale, zero_point) {
        (None, None) => Ok(None),
        (Some(scale), zero_point) => {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(InferError::Metadata(format!(
                    "{prefix}_scale must be positive, got {scale}"
                )));
            }
            Ok(Some(Quantization::new(scale, zero_point.unwrap_or(0))))
        }
        (None, Some(_)) => Err(InferError::Metadata(format!(
            "{prefix}_zero_point given without {prefix}_scale"
        ))),
    }
}

/// Input tensor in the numeric type the model declares.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    F32(Tensor<f32>),
    I8(Tensor<i8>),
}

impl ModelInput {
    pub fn shape(&self) -> &[usize] {
        match self {
            ModelInput::F32(t) => &t.shape,
            ModelInput::I8(t) => &t.shape,
        }
    }
}

/// Raw class scores in the numeric type the model declares.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    F32(Vec<f32>),
    I8(Vec<i8>),
}

/// One loaded model that runs a single forward pass per call.
pub trait Session: Send {
    fn spec(&self) -> &ModelSpec;
    fn run(&mut self, input: ModelInput) -> Result<ModelOutput, InferError>;
}
