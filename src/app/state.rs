// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::features::{Roster, Settings, SpinController};
use crate::i18n::Locale;
use crate::ui::animation::FadeAnimation;
use crate::ui::primitives::{Confetti, WheelMotion};

/// Main application state
pub struct App {
    /// Settings and locale
    pub core: CoreState,
    /// Persistent name list
    pub roster: Roster,
    /// Spin lifecycle and last winner
    pub spin: SpinController,
    /// UI state (input text, animations)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Parsed wheel segment colors
    pub background_palette: Vec<iced::Color>,
    /// Parsed wheel label colors
    pub text_palette: Vec<iced::Color>,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let background_palette = settings.wheel.background_palette();
        let text_palette = settings.wheel.text_palette();
        Self {
            settings,
            locale,
            background_palette,
            text_palette,
        }
    }
}

/// UI state
#[derive(Default)]
pub struct UiState {
    /// Current text in the name input
    pub name_input: String,
    /// Wheel rotation and running spin
    pub wheel: WheelMotion,
    /// Celebration overlay
    pub confetti: Confetti,
    /// Winner banner fade
    pub banner: FadeAnimation,
    /// Time of the previous animation frame
    pub last_frame: Option<Instant>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if anything on screen needs frame updates
    pub fn has_active_animations(&self) -> bool {
        self.wheel.is_spinning() || self.confetti.is_active() || self.banner.is_animating()
    }
}
