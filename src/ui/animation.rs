//! UI transitions built on `iced_anim`
//!
//! The wheel's own motion lives in [`crate::ui::primitives::wheel`]; this
//! module only covers fades for overlays like the winner banner.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Banner fade duration
const FADE_DURATION: Duration = Duration::from_millis(250);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

/// Fade between hidden (0.0) and shown (1.0)
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade in
    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Jump straight to hidden
    pub fn hide(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
