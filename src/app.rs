//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Roster, Settings, SpinController};
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Load the name list from durable storage
        let roster = Roster::load(helpers::open_store());
        let spin = SpinController::with_seed(settings.wheel.seed);
        let app = Self::with_parts(settings, locale, roster, spin);

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(900.0, 760.0),
            min_size: Some(iced::Size::new(560.0, 640.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "spinwheel".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Assemble the application from already loaded parts
    pub fn with_parts(
        settings: Settings,
        locale: Locale,
        roster: Roster,
        spin: SpinController,
    ) -> Self {
        Self {
            core: CoreState::new(settings, locale),
            roster,
            spin,
            ui: UiState::new(),
        }
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, naming the last winner once announced
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let app_name = self.core.locale.get(Key::AppName);
        match self.spin.announced_winner() {
            Some(winner) => format!(
                "{} - {} {}",
                app_name,
                self.core.locale.get(Key::WinnerPrefix),
                winner
            ),
            None => app_name.to_string(),
        }
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Animation subscription (vsync rate) only while something moves
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, close_event_sub])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::*;
    use crate::features::roster::STORAGE_KEY;
    use crate::features::spin::{RandomSource, SpinState};
    use crate::features::{KeyValueStore, MemoryStore};

    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn test_app(store: MemoryStore, pick: usize) -> App {
        let mut settings = Settings::default();
        settings.wheel.spin_duration = 0.0;
        let store: Box<dyn KeyValueStore> = Box::new(store);
        App::with_parts(
            settings,
            Locale::default(),
            Roster::load(store),
            SpinController::new(Box::new(FixedRandom(pick))),
        )
    }

    fn labels(app: &App) -> Vec<&str> {
        app.roster
            .entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect()
    }

    fn finish_spin(app: &mut App) {
        let _ = app.update(Message::AnimationTick(Instant::now() + Duration::from_millis(1)));
        assert!(!app.ui.wheel.is_spinning());
        let _ = app.update(Message::SpinStopped);
    }

    #[test]
    fn test_add_name_from_input() {
        let store = MemoryStore::new();
        let mut app = test_app(store.clone(), 0);

        let _ = app.update(Message::NameInputChanged("  Dana ".to_string()));
        let _ = app.update(Message::AddName);
        assert_eq!(labels(&app), vec!["Alice", "Bob", "Charlie", "Dana"]);
        assert!(app.ui.name_input.is_empty());
        assert!(store.get(STORAGE_KEY).unwrap().unwrap().contains("Dana"));
    }

    #[test]
    fn test_blank_input_is_kept() {
        let mut app = test_app(MemoryStore::new(), 0);
        let _ = app.update(Message::NameInputChanged("   ".to_string()));
        let _ = app.update(Message::AddName);
        assert_eq!(app.roster.len(), 3);
        assert_eq!(app.ui.name_input, "   ");
    }

    #[test]
    fn test_spin_flow_announces_winner() {
        let mut app = test_app(MemoryStore::new(), 1);

        let _ = app.update(Message::Spin);
        assert!(app.spin.is_spinning());
        assert!(app.ui.has_active_animations());
        assert_eq!(app.spin.announced_winner(), None);

        finish_spin(&mut app);
        assert_eq!(app.spin.state(), &SpinState::Idle);
        assert_eq!(app.spin.announced_winner(), Some("Bob"));
        assert!(app.ui.confetti.is_active());
        assert_eq!(app.title(iced::window::Id::unique()), "Spin Wheel - Winner: Bob");
    }

    #[test]
    fn test_list_locked_while_spinning() {
        let mut app = test_app(MemoryStore::new(), 2);

        let _ = app.update(Message::Spin);
        let _ = app.update(Message::RemoveName(0));
        let _ = app.update(Message::NameInputChanged("Eve".to_string()));
        let _ = app.update(Message::AddName);
        assert_eq!(labels(&app), vec!["Alice", "Bob", "Charlie"]);

        finish_spin(&mut app);
        assert_eq!(app.spin.announced_winner(), Some("Charlie"));

        // Unlocked again once idle
        let _ = app.update(Message::RemoveName(0));
        assert_eq!(labels(&app), vec!["Bob", "Charlie"]);
    }

    #[test]
    fn test_new_spin_clears_celebration() {
        let mut app = test_app(MemoryStore::new(), 0);
        let _ = app.update(Message::Spin);
        finish_spin(&mut app);
        assert!(app.ui.confetti.is_active());

        let _ = app.update(Message::Spin);
        assert!(!app.ui.confetti.is_active());
        assert_eq!(app.spin.announced_winner(), None);
        assert_eq!(app.title(iced::window::Id::unique()), "Spin Wheel");
    }

    #[test]
    fn test_spin_on_empty_list_does_nothing() {
        let mut app = test_app(MemoryStore::with_value(STORAGE_KEY, "[]"), 0);
        assert!(app.roster.is_empty());

        let _ = app.update(Message::Spin);
        assert!(!app.spin.is_spinning());
        assert!(!app.ui.wheel.is_spinning());
    }

    #[test]
    fn test_seed_setting_repeats_winners() {
        let winners = |seed: u64| {
            let mut settings = Settings::default();
            settings.wheel.spin_duration = 0.0;
            settings.wheel.seed = Some(seed);
            let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
            let spin = SpinController::with_seed(settings.wheel.seed);
            let mut app = App::with_parts(settings, Locale::default(), Roster::load(store), spin);

            (0..5)
                .map(|_| {
                    let _ = app.update(Message::Spin);
                    finish_spin(&mut app);
                    app.spin.announced_winner().map(str::to_string)
                })
                .collect::<Vec<_>>()
        };

        let first = winners(3);
        assert!(first.iter().all(Option::is_some));
        assert_eq!(first, winners(3));
    }

    #[test]
    fn test_stray_stop_is_ignored() {
        let mut app = test_app(MemoryStore::new(), 0);
        let _ = app.update(Message::SpinStopped);
        assert_eq!(app.spin.announced_winner(), None);
        assert!(!app.ui.confetti.is_active());
    }
}
