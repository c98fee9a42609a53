//! Timed interpolation between two values.

/// Cubic in-out easing on [0, 1].
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// A transition that started at `start` (seconds) and lasts `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    start: f64,
    duration: f64,
}

impl Transition {
    pub fn new(start: f64, duration_ms: u64) -> Self {
        Self {
            start,
            duration: duration_ms as f64 / 1000.0,
        }
    }

    /// Eased progress at `now`, exactly 1.0 once finished.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return 1.0;
        }
        ease_cubic_in_out((now - self.start) / self.duration)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}
