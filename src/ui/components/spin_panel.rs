//! Spin panel component
//! The wheel canvas with the spin button underneath

use iced::widget::{button, column, text};
use iced::{Alignment, Color, Element};

use crate::app::Message;
use crate::features::Entry;
use crate::i18n::{Key, Locale};
use crate::ui::primitives::{Wheel, wheel};
use crate::ui::theme;

/// Wheel diameter in logical pixels
pub const WHEEL_SIZE: f32 = 380.0;

/// Wheel inputs for the panel
pub struct SpinPanel<'a> {
    pub entries: &'a [Entry],
    pub rotation: f32,
    pub background_colors: &'a [Color],
    pub text_colors: &'a [Color],
    pub spinning: bool,
    /// Spin button enabled
    pub can_spin: bool,
    /// Outline the segment under the pointer (a winner is shown)
    pub highlight: bool,
}

/// Build the spin panel
pub fn view(panel: SpinPanel<'_>, locale: Locale) -> Element<'_, Message> {
    let wheel_canvas = wheel::view(
        Wheel::new(panel.entries, panel.rotation)
            .background_colors(panel.background_colors)
            .text_colors(panel.text_colors)
            .highlight(panel.highlight),
        WHEEL_SIZE,
    );

    let label = if panel.spinning {
        Key::SpinningButton
    } else {
        Key::SpinButton
    };
    let spin_btn = button(text(locale.get(label)).size(16))
        .padding([10, 20])
        .style(theme::spin_button)
        .on_press_maybe(panel.can_spin.then_some(Message::Spin));

    column![wheel_canvas, spin_btn]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
}
