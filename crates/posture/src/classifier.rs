use {
    crate::{ClassifierBackend, HeuristicFaceClassifier, ModelClassifier, MonitorConfig},
    image::Frame,
    inference::Inference,
};

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassificationResult {
    /// Bad-posture score in `[0, 1]`.
    pub confidence: f32,
    pub is_bad_posture: bool,
    pub latency_ms: u64,
    /// Heuristic posture score in degrees-equivalent, when one was computed.
    pub angle: Option<f32>,
    /// Whether the heuristic found a face; `None` for backends that do not look.
    pub face_detected: Option<bool>,
}

impl ClassificationResult {
    /// Good posture, zero confidence.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// One frame in, one bad-posture verdict out.
///
/// Implementations never fail: internal errors are logged and reported as
/// [`ClassificationResult::neutral`].
pub trait Classifier: Send {
    fn classify(&mut self, frame: &Frame<'_>) -> ClassificationResult;

    /// Forget any learned reference so the next frames rebuild it.
    fn recalibrate(&mut self) {}

    fn is_calibrated(&self) -> bool {
        true
    }

    fn model_loaded(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str;
}

/// Reports good posture for every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClassifier;

impl Classifier for NullClassifier {
    fn classify(&mut self, _frame: &Frame<'_>) -> ClassificationResult {
        ClassificationResult::neutral()
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Build the configured backend, falling back to [`NullClassifier`] when the model cannot be loaded.
pub fn create_classifier(config: &MonitorConfig, inference: &Inference) -> Box<dyn Classifier> {
    let classifier: Box<dyn Classifier> = match config.backend {
        ClassifierBackend::Heuristic => Box::new(HeuristicFaceClassifier::new(&config.heuristic)),
        ClassifierBackend::Null => Box::new(NullClassifier),
        ClassifierBackend::Model => match ModelClassifier::load(inference, &config.model) {
            Ok(classifier) => Box::new(classifier),
            Err(e) => {
                log::warn!("model not loaded ({e}), running without posture detection");
                Box::new(NullClassifier)
            }
        },
    };
    log::info!("classifier backend: {}", classifier.name());
    classifier
}
