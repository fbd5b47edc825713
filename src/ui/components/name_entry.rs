//! Name entry component
//! Text input with the "Add Name" button

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the name entry row
///
/// Input and button are disabled while `enabled` is false.
pub fn view(value: &str, enabled: bool, locale: Locale) -> Element<'_, Message> {
    let mut input = text_input(locale.get(Key::NameInputPlaceholder), value)
        .padding(10)
        .size(15)
        .width(260)
        .style(theme::name_input);
    if enabled {
        input = input
            .on_input(Message::NameInputChanged)
            .on_submit(Message::AddName);
    }

    let add_btn = button(text(locale.get(Key::AddName)).size(15))
        .padding([10, 16])
        .style(theme::add_button)
        .on_press_maybe(enabled.then_some(Message::AddName));

    row![input, add_btn]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
