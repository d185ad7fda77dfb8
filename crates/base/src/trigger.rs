use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A shared one-shot request flag.
///
/// Any clone may `request()`; the owner of the work consumes the request
/// with `take()` at a point of its choosing, so the request is applied
/// between units of work and never in the middle of one. Several requests
/// made before a `take()` collapse into one.
#[derive(Clone, Debug, Default)]
pub struct Trigger {
    pending: Arc<AtomicBool>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consume a pending request. Returns whether one was pending.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
