//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings messages
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
