use {crate::FaceObservation, base::Vec2};

/// Reference face position and size for good posture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Baseline {
    pub center: Vec2<f32>,
    pub size: f32,
    pub is_calibrated: bool,
}

/// Averages the first N detected face observations into a [`Baseline`].
///
/// The baseline is frozen once calibrated; only [`reset`](Self::reset) starts
/// a new accumulation.
#[derive(Debug, Clone)]
pub struct CalibrationTracker {
    required: usize,
    count: usize,
    center_sum: Vec2<f32>,
    size_sum: f32,
    baseline: Baseline,
}

impl CalibrationTracker {
    pub fn new(required: usize) -> Self {
        Self {
            required: required.max(1),
            count: 0,
            center_sum: Vec2::zero(),
            size_sum: 0.0,
            baseline: Baseline::default(),
        }
    }

    pub fn observe(&mut self, observation: &FaceObservation) {
        if self.baseline.is_calibrated || !observation.detected {
            return;
        }
        if self.count == 0 {
            log::info!("calibration: started, hold good posture for {} frames", self.required);
        }
        self.center_sum += observation.center;
        self.size_sum += observation.size;
        self.count += 1;

        if self.count >= self.required {
            let n = self.count as f32;
            self.baseline = Baseline {
                center: self.center_sum / n,
                size: self.size_sum / n,
                is_calibrated: true,
            };
            log::info!(
                "calibration: complete, baseline x={:.3} y={:.3} size={:.3}",
                self.baseline.center.x,
                self.baseline.center.y,
                self.baseline.size
            );
        }
    }

    /// Discard the baseline and start accumulating again.
    pub fn reset(&mut self) {
        *self = Self::new(self.required);
        log::info!("calibration: reset");
    }

    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_calibrated
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Fraction of the required observations collected so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.baseline.is_calibrated {
            1.0
        } else {
            self.count as f32 / self.required as f32
        }
    }
}
