//! Winner banner component

use iced::widget::{container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the banner announcing `winner`, faded by `opacity`
pub fn view(winner: &str, opacity: f32, locale: Locale) -> Element<'static, Message> {
    let title = text(format!("{} {}", locale.get(Key::WinnerPrefix), winner))
        .size(24)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let banner = container(title)
        .padding(8)
        .style(move |_theme| theme::winner_banner(opacity));

    container(banner)
        .width(Fill)
        .padding(Padding::new(0.0).top(64.0))
        .center_x(Fill)
        .into()
}
