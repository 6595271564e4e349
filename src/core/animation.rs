//! Indicator slide animation.
//!
//! Fire-and-forget: a selection change starts a fresh 150 ms linear
//! transition from wherever the indicator currently rests, and a newer
//! transition simply replaces an older one. Hosts sample `frame_at` on each
//! redraw and use [`IndicatorAnimation::schedule`] to request wakeups.

use std::time::{Duration, Instant};

use super::layout::INDICATOR_SLIDE_MS;
use super::Rect;

/// Redraw cadence while a transition is running.
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// One in-flight frame transition for the indicator layer.
#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    pub from: Rect,
    pub to: Rect,
    pub started: Instant,
    pub duration: Duration,
}

impl IndicatorAnimation {
    pub fn new(from: Rect, to: Rect, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: Duration::from_millis(INDICATOR_SLIDE_MS),
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Linearly interpolated frame at `now`.
    pub fn frame_at(&self, now: Instant) -> Rect {
        let t = self.progress(now);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Rect::new(
            lerp(self.from.x, self.to.x),
            lerp(self.from.y, self.to.y),
            lerp(self.from.width, self.to.width),
            lerp(self.from.height, self.to.height),
        )
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Next wakeup deadline, or `None` once the transition has settled.
    pub fn schedule(&self, now: Instant) -> Option<Instant> {
        if self.is_finished(now) {
            return None;
        }
        Some(now + ANIMATION_FRAME_INTERVAL)
    }
}
