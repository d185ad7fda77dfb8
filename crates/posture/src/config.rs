use {
    crate::ConfigError,
    base::Vec2,
    log::LevelFilter,
    serde::{Deserialize, Serialize},
    std::{path::Path, path::PathBuf, str::FromStr},
};

/// Which classifier the monitor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    #[default]
    Model,
    Heuristic,
    /// Always reports good posture.
    Null,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// safetensors weights; `None` means no model is available.
    pub path: Option<PathBuf>,
    /// Used when the weights carry no `input_width`/`input_height` metadata.
    pub input_width: usize,
    pub input_height: usize,
    /// Bad-class probability above which a frame counts as slouching.
    pub threshold: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            input_width: 96,
            input_height: 96,
            threshold: 0.5,
        }
    }
}

impl ModelConfig {
    pub fn input_size(&self) -> Vec2<usize> {
        Vec2::new(self.input_width, self.input_height)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub grid_cols: usize,
    pub grid_rows: usize,
    /// Minimum max-min spread of cell brightness for a frame to contain a face.
    pub noise_floor: f32,
    /// EMA weight of the newest observation.
    pub smoothing: f32,
    pub calibration_frames: usize,
    /// Score (degrees-equivalent) above which the posture counts as slouching.
    pub slouch_angle: f32,
    /// Consecutive detection misses during which the last score is held.
    pub max_missed_frames: u32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            grid_cols: 16,
            grid_rows: 12,
            noise_floor: 20.0,
            smoothing: 0.3,
            calibration_frames: 30,
            slouch_angle: 15.0,
            max_missed_frames: 10,
        }
    }
}

/// Seconds of continuous slouching needed for each level.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EscalationConfig {
    pub warning_secs: u64,
    pub serious_secs: u64,
    pub aggressive_secs: u64,
    pub airhorn_secs: u64,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            warning_secs: 30,
            serious_secs: 120,
            aggressive_secs: 300,
            airhorn_secs: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Write day-rolling log files here instead of stdout.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level {:?}", self.level)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub backend: ClassifierBackend,
    /// Sampling ticks per second.
    pub frame_rate: f32,
    /// Period of the full status publish.
    pub publish_interval_ms: u64,
    pub model: ModelConfig,
    pub heuristic: HeuristicConfig,
    pub escalation: EscalationConfig,
    pub log: LogConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            frame_rate: 5.0,
            publish_interval_ms: 5000,
            model: ModelConfig::default(),
            heuristic: HeuristicConfig::default(),
            escalation: EscalationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Milliseconds between sampling ticks.
    pub fn frame_interval_ms(&self) -> u64 {
        (1000.0 / self.frame_rate).round().max(1.0) as u64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be positive, got {}",
                self.frame_rate
            )));
        }
        if self.publish_interval_ms == 0 {
            return Err(ConfigError::Invalid("publish_interval_ms must be positive".to_string()));
        }

        let model = &self.model;
        if model.input_size().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "model input size {}x{} has no pixels",
                model.input_width, model.input_height
            )));
        }
        if !(0.0..=1.0).contains(&model.threshold) {
            return Err(ConfigError::Invalid(format!(
                "model threshold must be within [0, 1], got {}",
                model.threshold
            )));
        }

        let heuristic = &self.heuristic;
        if heuristic.grid_cols == 0 || heuristic.grid_rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} has no cells",
                heuristic.grid_cols, heuristic.grid_rows
            )));
        }
        if !(heuristic.smoothing > 0.0 && heuristic.smoothing <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "smoothing must be within (0, 1], got {}",
                heuristic.smoothing
            )));
        }
        if heuristic.calibration_frames == 0 {
            return Err(ConfigError::Invalid("calibration_frames must be at least 1".to_string()));
        }
        if !(heuristic.noise_floor.is_finite() && heuristic.slouch_angle.is_finite()) {
            return Err(ConfigError::Invalid(
                "noise_floor and slouch_angle must be finite".to_string(),
            ));
        }

        let e = &self.escalation;
        if !(e.warning_secs <= e.serious_secs
            && e.serious_secs <= e.aggressive_secs
            && e.aggressive_secs <= e.airhorn_secs)
        {
            return Err(ConfigError::Invalid(format!(
                "escalation thresholds must ascend, got {}/{}/{}/{}",
                e.warning_secs, e.serious_secs, e.aggressive_secs, e.airhorn_secs
            )));
        }

        self.log.level_filter()?;
        Ok(())
    }
}
