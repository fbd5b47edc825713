//! Theme system for the spin wheel
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x16181d);
    pub const SURFACE: Color = color!(0x23262d);
    pub const BORDER: Color = color!(0x3a3e47);
    pub const CHIP: Color = color!(0x2e323a);
    pub const TEXT_MUTED: Color = color!(0x8a8f98);
    pub const TEXT_PRIMARY: Color = color!(0xf3f4f6);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf3f4f6);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xd1d5db);
    pub const CHIP: Color = color!(0xe5e7eb);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Add button green
pub const ADD_GREEN: Color = color!(0x22c55e);
pub const ADD_GREEN_HOVER: Color = color!(0x16a34a);

/// Spin button blue
pub const SPIN_BLUE: Color = color!(0x3b82f6);
pub const SPIN_BLUE_HOVER: Color = color!(0x2563eb);

/// Remove icon red
pub const REMOVE_RED: Color = color!(0xef4444);
pub const REMOVE_RED_HOVER: Color = color!(0xb91c1c);

/// Winner banner amber
pub const WINNER_AMBER: Color = color!(0xfde68a);

/// Highlight for the winning segment
pub const WINNER_GOLD: Color = color!(0xfacc15);

/// Wheel pointer
pub const POINTER_RED: Color = color!(0xdc2626);

/// Disabled controls
pub const DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Wheel rim and segment separators
pub fn wheel_rim(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xe5e7eb)
    } else {
        color!(0x374151)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Name chip in the list
pub fn name_chip(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            dark::CHIP
        } else {
            light::CHIP
        })),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Winner announcement, faded by `opacity`
pub fn winner_banner(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..WINNER_AMBER
        })),
        text_color: Some(Color {
            a: opacity,
            ..color!(0x1f2937)
        }),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * opacity),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

fn filled_button(base: Color, hover: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => hover,
        button::Status::Disabled => DISABLED,
        button::Status::Active => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// "Add Name" button
pub fn add_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(ADD_GREEN, ADD_GREEN_HOVER, status)
}

/// "Spin the Wheel" button
pub fn spin_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(SPIN_BLUE, SPIN_BLUE_HOVER, status)
}

/// Small ✕ on a name chip
pub fn remove_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => REMOVE_RED_HOVER,
        button::Status::Disabled => DISABLED,
        button::Status::Active => REMOVE_RED,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Name input field
pub fn name_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => SPIN_BLUE,
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border,
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.4,
            ..SPIN_BLUE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn test_disabled_buttons_use_disabled_color() {
        let style = spin_button(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(DISABLED)));
    }
}
