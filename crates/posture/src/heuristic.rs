use {
    crate::{CalibrationTracker, ClassificationResult, Classifier, HeuristicConfig},
    base::{Rect, Vec2},
    image::Frame,
    std::time::Instant,
};

// fraction of the brightness range above the darkest cell that counts as face
const FACE_THRESHOLD: f32 = 0.6;

const MIN_ASPECT: f32 = 0.5;
const MAX_ASPECT: f32 = 2.0;
const MIN_SIZE: f32 = 0.02;
const MAX_SIZE: f32 = 0.5;

const WEIGHT_DROP: f32 = 60.0;
const WEIGHT_SIZE: f32 = 40.0;
const WEIGHT_LATERAL: f32 = 20.0;
const MIN_SCORE: f32 = -30.0;
const MAX_SCORE: f32 = 45.0;

/// Face position and size in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceObservation {
    pub center: Vec2<f32>,
    /// Bounding box area as a fraction of the frame.
    pub size: f32,
    pub detected: bool,
}

impl FaceObservation {
    pub fn new(center: Vec2<f32>, size: f32) -> Self {
        Self {
            center,
            size,
            detected: true,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Exponential moving average towards `raw` with weight `alpha`.
    pub fn smooth(&self, raw: &FaceObservation, alpha: f32) -> Self {
        Self {
            center: self.center.lerp(raw.center, alpha),
            size: self.size * (1.0 - alpha) + raw.size * alpha,
            detected: raw.detected,
        }
    }
}

/// Mean brightness per grid cell, row-major, sampling every 2nd pixel.
fn cell_means(frame: &Frame<'_>, cols: usize, rows: usize) -> Vec<f32> {
    let (width, height) = (frame.width(), frame.height());
    let span = |i: usize, n: usize, len: usize| {
        let start = i * len / n;
        let end = ((i + 1) * len / n).max(start + 1).min(len);
        start..end
    };

    let mut means = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        let ys = span(r, rows, height);
        for c in 0..cols {
            let xs = span(c, cols, width);
            let mut sum = 0u32;
            let mut count = 0u32;
            for y in ys.clone().step_by(2) {
                for x in xs.clone().step_by(2) {
                    sum += frame.pixel(x, y) as u32;
                    count += 1;
                }
            }
            means.push(sum as f32 / count.max(1) as f32);
        }
    }
    means
}

/// Find the bright face-like region in the upper two thirds of the frame.
pub fn detect_face(frame: &Frame<'_>, config: &HeuristicConfig) -> Option<FaceObservation> {
    if frame.is_empty() {
        return None;
    }
    let (cols, rows) = (config.grid_cols, config.grid_rows);
    let means = cell_means(frame, cols, rows);

    let min = means.iter().copied().fold(f32::INFINITY, f32::min);
    let max = means.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if range < config.noise_floor {
        return None;
    }
    let threshold = min + FACE_THRESHOLD * range;

    let mut weight_sum = 0.0f32;
    let mut weighted = Vec2::<f32>::zero();
    let mut lo = Vec2::new(usize::MAX, usize::MAX);
    let mut hi = Vec2::new(0usize, 0usize);
    for r in 0..(rows * 2).div_ceil(3) {
        for c in 0..cols {
            let brightness = means[r * cols + c];
            if brightness < threshold {
                continue;
            }
            let cell_center = Vec2::new(
                (c as f32 + 0.5) / cols as f32,
                (r as f32 + 0.5) / rows as f32,
            );
            weighted += cell_center * brightness;
            weight_sum += brightness;
            lo = Vec2::new(lo.x.min(c), lo.y.min(r));
            hi = Vec2::new(hi.x.max(c), hi.y.max(r));
        }
    }
    if weight_sum <= 0.0 {
        return None;
    }

    let bbox = Rect::from_min_max(
        Vec2::new(lo.x as f32 / cols as f32, lo.y as f32 / rows as f32),
        Vec2::new(
            (hi.x + 1) as f32 / cols as f32,
            (hi.y + 1) as f32 / rows as f32,
        ),
    );
    let size = bbox.area();
    // aspect in pixels, so non-square frames do not skew it
    let aspect = (bbox.size.x * frame.width() as f32) / (bbox.size.y * frame.height() as f32);
    if !(MIN_ASPECT..=MAX_ASPECT).contains(&aspect) || !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        log::trace!("face rejected: aspect {:.2}, size {:.3}", aspect, size);
        return None;
    }

    Some(FaceObservation::new(weighted / weight_sum, size))
}

/// Posture classifier that tracks the brightest face-like blob against a calibrated baseline.
#[derive(Debug, Clone)]
pub struct HeuristicFaceClassifier {
    config: HeuristicConfig,
    smoothed: Option<FaceObservation>,
    calibration: CalibrationTracker,
    missed_frames: u32,
    last_score: Option<f32>,
}

impl HeuristicFaceClassifier {
    pub fn new(config: &HeuristicConfig) -> Self {
        Self {
            config: config.clone(),
            smoothed: None,
            calibration: CalibrationTracker::new(config.calibration_frames),
            missed_frames: 0,
            last_score: None,
        }
    }

    pub fn calibration(&self) -> &CalibrationTracker {
        &self.calibration
    }

    pub fn smoothed(&self) -> Option<&FaceObservation> {
        self.smoothed.as_ref()
    }

    /// Posture score in degrees-equivalent; positive means slouching.
    fn score(&self, face: &FaceObservation) -> f32 {
        let baseline = self.calibration.baseline();
        let drop = face.center.y - baseline.center.y;
        let closer = face.size - baseline.size;
        let lateral = (face.center.x - baseline.center.x).abs();
        (WEIGHT_DROP * drop + WEIGHT_SIZE * closer + WEIGHT_LATERAL * lateral)
            .clamp(MIN_SCORE, MAX_SCORE)
    }

    fn scored(&self, score: f32, face_detected: bool, start: Instant) -> ClassificationResult {
        ClassificationResult {
            confidence: (score.max(0.0) / MAX_SCORE).clamp(0.0, 1.0),
            is_bad_posture: score > self.config.slouch_angle,
            latency_ms: start.elapsed().as_millis() as u64,
            angle: Some(score),
            face_detected: Some(face_detected),
        }
    }
}

impl Classifier for HeuristicFaceClassifier {
    fn classify(&mut self, frame: &Frame<'_>) -> ClassificationResult {
        let start = Instant::now();

        let Some(raw) = detect_face(frame, &self.config) else {
            self.missed_frames = self.missed_frames.saturating_add(1);
            return match self.last_score {
                Some(score) if self.missed_frames <= self.config.max_missed_frames => {
                    self.scored(score, false, start)
                }
                _ => ClassificationResult {
                    latency_ms: start.elapsed().as_millis() as u64,
                    face_detected: Some(false),
                    ..ClassificationResult::neutral()
                },
            };
        };
        self.missed_frames = 0;

        let smoothed = match &self.smoothed {
            Some(previous) => previous.smooth(&raw, self.config.smoothing),
            None => raw,
        };
        self.smoothed = Some(smoothed);

        if !self.calibration.is_calibrated() {
            self.calibration.observe(&smoothed);
            return ClassificationResult {
                latency_ms: start.elapsed().as_millis() as u64,
                face_detected: Some(true),
                ..ClassificationResult::neutral()
            };
        }

        let score = self.score(&smoothed);
        self.last_score = Some(score);
        self.scored(score, true, start)
    }

    fn recalibrate(&mut self) {
        self.calibration.reset();
        self.smoothed = None;
        self.missed_frames = 0;
        self.last_score = None;
    }

    fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
