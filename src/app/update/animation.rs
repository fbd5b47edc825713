//! Animation frame handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Advance wheel, banner and confetti by one frame
    pub(super) fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        let Message::AnimationTick(now) = message else {
            return None;
        };
        let now = *now;

        let dt = self
            .ui
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.ui.last_frame = Some(now);

        self.ui.banner.tick(now);
        if self.ui.confetti.is_active() {
            self.ui.confetti.tick(dt);
        }

        // The wheel reports its stop exactly once
        if self.ui.wheel.tick(now) {
            return Some(Task::done(Message::SpinStopped));
        }
        Some(Task::none())
    }
}
