//! Window update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window messages
    pub(super) fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }
            _ => None,
        }
    }
}
