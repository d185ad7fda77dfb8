use {
    crate::{ClassificationResult, Classifier, ModelConfig, PostureError},
    base::Tensor,
    image::{Frame, quantize, resize_bilinear},
    inference::{
        InferError, Inference, ModelInput, ModelOutput, Session,
        posture_net::{CLASS_BAD, CLASS_GOOD},
    },
    std::time::Instant,
};

/// Classifies frames with a loaded two-class posture model.
pub struct ModelClassifier {
    session: Box<dyn Session>,
    threshold: f32,
}

impl ModelClassifier {
    pub fn new(session: Box<dyn Session>, threshold: f32) -> Self {
        Self { session, threshold }
    }

    pub fn load(inference: &Inference, config: &ModelConfig) -> Result<Self, InferError> {
        let path = config
            .path
            .as_ref()
            .ok_or_else(|| InferError::Config("no model path configured".to_string()))?;
        let model = inference.use_posture_model(path, config.input_size())?;
        Ok(Self::new(Box::new(model), config.threshold))
    }

    /// `(bad, good)` probabilities for one frame.
    fn infer(&mut self, frame: &Frame<'_>) -> Result<(f32, f32), PostureError> {
        let spec = self.session.spec().clone();
        let values = resize_bilinear(frame, spec.input_size)?;
        let input = match &spec.input_quantization {
            Some(quantization) => {
                ModelInput::I8(Tensor::new(spec.input_shape(), quantize(&values, quantization))?)
            }
            None => ModelInput::F32(Tensor::new(spec.input_shape(), values)?),
        };

        let probs = match self.session.run(input)? {
            ModelOutput::F32(probs) => probs,
            ModelOutput::I8(scores) => {
                let quantization = spec.output_quantization.ok_or_else(|| {
                    PostureError::Output("int8 output without quantization parameters".to_string())
                })?;
                scores.iter().map(|&q| quantization.dequantize(q)).collect()
            }
        };
        if probs.len() < 2 {
            return Err(PostureError::Output(format!(
                "expected 2 class scores, got {}",
                probs.len()
            )));
        }
        Ok((probs[CLASS_BAD], probs[CLASS_GOOD]))
    }
}

impl Classifier for ModelClassifier {
    fn classify(&mut self, frame: &Frame<'_>) -> ClassificationResult {
        if frame.is_empty() {
            log::warn!("inference skipped: empty frame");
            return ClassificationResult::neutral();
        }

        let start = Instant::now();
        let (bad, good) = match self.infer(frame) {
            Ok(scores) => scores,
            Err(e) => {
                log::warn!("inference failed: {e}");
                return ClassificationResult::neutral();
            }
        };
        let latency_ms = start.elapsed().as_millis() as u64;
        log::debug!("inference: good={:.2} bad={:.2} ({}ms)", good, bad, latency_ms);

        ClassificationResult {
            confidence: bad.clamp(0.0, 1.0),
            is_bad_posture: bad > self.threshold,
            latency_ms,
            angle: None,
            face_detected: None,
        }
    }

    fn model_loaded(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
