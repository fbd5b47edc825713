//! Spin update handlers

use std::time::{Duration, Instant};

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::settings::WheelSettings;
use crate::ui::primitives::BASE_SPIN_DURATION;

/// Longest accepted spin multiplier
const MAX_SPIN_MULTIPLIER: f32 = 6.0;

/// Configured spin length; invalid multipliers stop immediately
fn spin_duration(wheel: &WheelSettings) -> Duration {
    let multiplier = wheel.spin_duration;
    if multiplier.is_finite() && multiplier > 0.0 {
        BASE_SPIN_DURATION.mul_f32(multiplier.min(MAX_SPIN_MULTIPLIER))
    } else {
        Duration::ZERO
    }
}

impl App {
    /// Handle spin lifecycle messages
    pub(super) fn handle_spin(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Spin => {
                if let Some(request) = self.spin.request_spin(self.roster.entries()) {
                    self.ui.banner.hide();
                    self.ui.confetti.clear();
                    self.ui.last_frame = None;
                    self.ui.wheel.start(
                        request,
                        spin_duration(&self.core.settings.wheel),
                        Instant::now(),
                    );
                }
                Some(Task::none())
            }
            Message::SpinStopped => {
                if self.spin.on_animation_complete().is_some() {
                    self.ui.banner.show();
                    if self.core.settings.wheel.confetti {
                        self.ui.confetti.burst();
                    }
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
