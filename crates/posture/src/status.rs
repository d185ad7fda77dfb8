use {
    crate::{ClassificationResult, PostureLevel, PostureState},
    serde::Serialize,
};

/// Snapshot published to the status transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub level: PostureLevel,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    pub slouching: bool,
    pub streak: u64,
    pub calibrated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_detected: Option<bool>,
    pub model_loaded: bool,
}

impl StatusReport {
    /// `result` is the last classification, if any tick has run yet.
    pub fn new(
        result: Option<&ClassificationResult>,
        state: &PostureState,
        calibrated: bool,
        model_loaded: bool,
    ) -> Self {
        Self {
            level: state.level,
            confidence: result.map(|r| r.confidence).unwrap_or(0.0),
            angle: result.and_then(|r| r.angle),
            slouching: state.is_slouching,
            streak: state.streak_hours,
            calibrated,
            face_detected: result.and_then(|r| r.face_detected),
            model_loaded,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
