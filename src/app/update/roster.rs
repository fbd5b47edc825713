//! Name list update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle name list messages
    pub(super) fn handle_roster(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::NameInputChanged(value) => {
                self.ui.name_input = value.clone();
                Some(Task::none())
            }
            Message::AddName => {
                // The wheel must keep its segment count while spinning
                if self.spin.is_spinning() {
                    tracing::debug!("Ignoring add while spinning");
                } else if self.roster.add(&self.ui.name_input) {
                    tracing::debug!("Added name ({} total)", self.roster.len());
                    self.ui.name_input.clear();
                }
                Some(Task::none())
            }
            Message::RemoveName(index) => {
                if self.spin.is_spinning() {
                    tracing::debug!("Ignoring remove while spinning");
                } else if let Some(entry) = self.roster.remove(*index) {
                    tracing::debug!("Removed {} ({} left)", entry.label, self.roster.len());
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
