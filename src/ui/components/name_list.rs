//! Name list component
//! Wrapping row of name chips, each with a remove button

use iced::widget::{Row, button, column, container, row, text, tooltip};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::features::Entry;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the heading and chips for `entries`
pub fn view(entries: &[Entry], enabled: bool, locale: Locale) -> Element<'_, Message> {
    let heading = text(locale.get(Key::NamesHeading))
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        });

    let chips: Element<'_, Message> = if entries.is_empty() {
        text(locale.get(Key::NoNames))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else {
        Row::with_children(
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| chip(index, &entry.label, enabled, locale)),
        )
        .spacing(8)
        .wrap()
        .into()
    };

    column![heading, chips].spacing(6).width(480).into()
}

fn chip(index: usize, label: &str, enabled: bool, locale: Locale) -> Element<'_, Message> {
    let remove_btn = button(text("✕").size(12))
        .padding([0, 4])
        .style(theme::remove_button)
        .on_press_maybe(enabled.then_some(Message::RemoveName(index)));

    let remove_btn = tooltip(
        remove_btn,
        text(locale.get(Key::RemoveName)).size(12),
        tooltip::Position::Top,
    );

    container(
        row![text(label).size(14), remove_btn]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .padding([4, 8])
    .style(theme::name_chip)
    .into()
}
