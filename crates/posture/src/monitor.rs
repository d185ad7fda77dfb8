use {
    crate::{
        ClassificationResult, Classifier, EscalationEngine, MonitorConfig, Notifier, PostureState,
        StatusReport,
    },
    base::Trigger,
    image::Frame,
};

/// One sampling stream: classifier, escalation state and notifier, advanced one tick at a time.
pub struct Monitor {
    classifier: Box<dyn Classifier>,
    engine: EscalationEngine,
    notifier: Box<dyn Notifier>,
    recalibrate: Trigger,
    last_result: Option<ClassificationResult>,
}

impl Monitor {
    pub fn new(
        config: &MonitorConfig,
        classifier: Box<dyn Classifier>,
        notifier: Box<dyn Notifier>,
        now_ms: u64,
    ) -> Self {
        Self {
            classifier,
            engine: EscalationEngine::new(&config.escalation, now_ms),
            notifier,
            recalibrate: Trigger::new(),
            last_result: None,
        }
    }

    /// Handle for requesting recalibration from outside the sampling loop.
    pub fn recalibrate_trigger(&self) -> Trigger {
        self.recalibrate.clone()
    }

    /// Run one pipeline pass. Returns `None` when the tick was skipped for lack of a frame.
    pub fn tick(&mut self, frame: Option<&Frame<'_>>, now_ms: u64) -> Option<StatusReport> {
        if self.recalibrate.take() {
            log::info!("recalibration requested");
            self.classifier.recalibrate();
        }

        let frame = match frame {
            Some(frame) if !frame.is_empty() => frame,
            _ => {
                log::debug!("tick skipped: no frame");
                return None;
            }
        };

        let result = self.classifier.classify(frame);
        self.engine
            .update(result.is_bad_posture, now_ms, self.notifier.as_mut());
        self.last_result = Some(result);
        Some(self.status())
    }

    pub fn state(&self) -> &PostureState {
        self.engine.state()
    }

    pub fn last_result(&self) -> Option<&ClassificationResult> {
        self.last_result.as_ref()
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.model_loaded()
    }

    pub fn status(&self) -> StatusReport {
        StatusReport::new(
            self.last_result.as_ref(),
            self.engine.state(),
            self.classifier.is_calibrated(),
            self.classifier.model_loaded(),
        )
    }
}
