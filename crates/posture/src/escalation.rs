use {
    crate::EscalationConfig,
    serde::Serialize,
    std::fmt,
};

const MS_PER_SEC: u64 = 1000;
const MS_PER_HOUR: u64 = 3600 * MS_PER_SEC;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum PostureLevel {
    #[default]
    Good,
    Warning,
    Serious,
    Aggressive,
    Airhorn,
}

impl PostureLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// LED blinks signalling this level.
    pub fn flash_count(self) -> u8 {
        self.as_u8() + 1
    }
}

impl From<PostureLevel> for u8 {
    fn from(level: PostureLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for PostureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostureLevel::Good => "good",
            PostureLevel::Warning => "warning",
            PostureLevel::Serious => "serious",
            PostureLevel::Aggressive => "aggressive",
            PostureLevel::Airhorn => "airhorn",
        };
        f.write_str(name)
    }
}

/// Escalation state. Exactly one of the two timers is set.
#[derive(Debug, Clone, PartialEq)]
pub struct PostureState {
    pub level: PostureLevel,
    pub slouch_start_ms: Option<u64>,
    pub good_start_ms: Option<u64>,
    /// Whole hours of uninterrupted good posture.
    pub streak_hours: u64,
    pub is_slouching: bool,
}

impl PostureState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            level: PostureLevel::Good,
            slouch_start_ms: None,
            good_start_ms: Some(now_ms),
            streak_hours: 0,
            is_slouching: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChange {
    pub from: PostureLevel,
    pub to: PostureLevel,
    /// Length of the slouch when the change happened.
    pub slouch_secs: u64,
}

/// Receives level changes synchronously, in order, before the tick returns.
pub trait Notifier: Send {
    fn level_changed(&mut self, change: &LevelChange, state: &PostureState);
}

/// Logs every level change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn level_changed(&mut self, change: &LevelChange, _state: &PostureState) {
        log::info!(
            "ESCALATION: level {} -> {} (slouching {} s)",
            change.from.as_u8(),
            change.to.as_u8(),
            change.slouch_secs
        );
    }
}

/// Turns per-tick slouch verdicts into an escalation level and a good-posture streak.
#[derive(Debug, Clone)]
pub struct EscalationEngine {
    thresholds: EscalationConfig,
    state: PostureState,
}

impl EscalationEngine {
    pub fn new(thresholds: &EscalationConfig, now_ms: u64) -> Self {
        Self {
            thresholds: thresholds.clone(),
            state: PostureState::new(now_ms),
        }
    }

    pub fn state(&self) -> &PostureState {
        &self.state
    }

    /// Highest level whose threshold `slouch_secs` has reached.
    fn level_for(&self, slouch_secs: u64) -> Option<PostureLevel> {
        let t = &self.thresholds;
        if slouch_secs >= t.airhorn_secs {
            Some(PostureLevel::Airhorn)
        } else if slouch_secs >= t.aggressive_secs {
            Some(PostureLevel::Aggressive)
        } else if slouch_secs >= t.serious_secs {
            Some(PostureLevel::Serious)
        } else if slouch_secs >= t.warning_secs {
            Some(PostureLevel::Warning)
        } else {
            None
        }
    }

    /// Apply one tick. A good tick drops straight to `Good`; a bad tick only escalates.
    pub fn update(
        &mut self,
        is_slouching: bool,
        now_ms: u64,
        notifier: &mut dyn Notifier,
    ) -> &PostureState {
        let previous = self.state.level;
        let slouch_secs = self
            .state
            .slouch_start_ms
            .map(|start| now_ms.saturating_sub(start) / MS_PER_SEC)
            .unwrap_or(0);
        self.state.is_slouching = is_slouching;

        if is_slouching {
            self.state.good_start_ms = None;
            let start = *self.state.slouch_start_ms.get_or_insert(now_ms);
            let slouch_secs = now_ms.saturating_sub(start) / MS_PER_SEC;
            if let Some(level) = self.level_for(slouch_secs) {
                self.state.level = level;
            }
            self.notify(previous, slouch_secs, notifier);
        } else {
            self.state.level = PostureLevel::Good;
            self.state.slouch_start_ms = None;
            let start = *self.state.good_start_ms.get_or_insert(now_ms);
            self.state.streak_hours = now_ms.saturating_sub(start) / MS_PER_HOUR;
            self.notify(previous, slouch_secs, notifier);
        }
        &self.state
    }

    fn notify(&self, previous: PostureLevel, slouch_secs: u64, notifier: &mut dyn Notifier) {
        if self.state.level != previous {
            let change = LevelChange {
                from: previous,
                to: self.state.level,
                slouch_secs,
            };
            notifier.level_changed(&change, &self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_thresholds() {
        let engine = EscalationEngine::new(&EscalationConfig::default(), 0);
        assert_eq!(engine.level_for(29), None);
        assert_eq!(engine.level_for(30), Some(PostureLevel::Warning));
        assert_eq!(engine.level_for(119), Some(PostureLevel::Warning));
        assert_eq!(engine.level_for(120), Some(PostureLevel::Serious));
        assert_eq!(engine.level_for(300), Some(PostureLevel::Aggressive));
        assert_eq!(engine.level_for(10_000), Some(PostureLevel::Airhorn));
    }

    #[test]
    fn test_flash_count() {
        assert_eq!(PostureLevel::Good.flash_count(), 1);
        assert_eq!(PostureLevel::Airhorn.flash_count(), 5);
    }
}
