// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, row, stack, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::components::spin_panel::SpinPanel;
use crate::ui::primitives::confetti;
use crate::ui::{components, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let spinning = self.spin.is_spinning();
        let winner = self.spin.announced_winner();

        let dark_mode_toggle = toggler(self.core.settings.display.dark_mode)
            .label(locale.get(Key::DarkMode))
            .on_toggle(Message::DarkModeToggled)
            .size(18)
            .text_size(13);

        let header = row![Space::new().width(Fill), dark_mode_toggle]
            .align_y(Alignment::Center)
            .padding(12);

        let body = column![
            components::name_entry::view(&self.ui.name_input, !spinning, locale),
            components::name_list::view(self.roster.entries(), !spinning, locale),
            components::spin_panel::view(
                SpinPanel {
                    entries: self.roster.entries(),
                    rotation: self.ui.wheel.rotation(),
                    background_colors: &self.core.background_palette,
                    text_colors: &self.core.text_palette,
                    spinning,
                    can_spin: !spinning && !self.roster.is_empty(),
                    highlight: winner.is_some(),
                },
                locale,
            ),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let main_layout = column![
            header,
            container(body).width(Fill).height(Fill).center_x(Fill).center_y(Fill),
        ]
        .width(Fill)
        .height(Fill);

        let main_layout = container(main_layout)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Winner overlays (empty space if no winner is announced)
        let (confetti_overlay, banner_overlay): (Element<'_, Message>, Element<'_, Message>) =
            match winner {
                Some(name) => {
                    let confetti_layer = if self.ui.confetti.is_active() {
                        confetti::view(&self.ui.confetti)
                    } else {
                        Space::new().width(0).height(0).into()
                    };
                    (
                        confetti_layer,
                        components::winner_banner::view(name, self.ui.banner.progress(), locale),
                    )
                }
                None => (
                    Space::new().width(0).height(0).into(),
                    Space::new().width(0).height(0).into(),
                ),
            };

        // Always use consistent stack structure
        stack![main_layout, confetti_overlay, banner_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
