//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Segment colors used when none are configured
pub const DEFAULT_BACKGROUND_COLORS: [&str; 4] = ["#ff8f43", "#70bbe0", "#0b648f", "#ff8f43"];

/// Label colors used when none are configured
pub const DEFAULT_TEXT_COLORS: [&str; 1] = ["#ffffff"];

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Wheel appearance and timing
    #[serde(default)]
    pub wheel: WheelSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
}

/// Wheel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelSettings {
    /// Spin length multiplier (1.0 = ten seconds)
    #[serde(default = "default_spin_duration")]
    pub spin_duration: f32,
    /// Segment fill colors, cycled (hex `#rrggbb`)
    #[serde(default = "default_background_colors")]
    pub background_colors: Vec<String>,
    /// Label colors, cycled (hex `#rrggbb`)
    #[serde(default = "default_text_colors")]
    pub text_colors: Vec<String>,
    /// Show confetti when a winner is announced
    #[serde(default = "default_true")]
    pub confetti: bool,
    /// Fixed seed for reproducible draws; unset draws from the thread generator
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_spin_duration() -> f32 {
    0.5
}

fn default_background_colors() -> Vec<String> {
    DEFAULT_BACKGROUND_COLORS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_text_colors() -> Vec<String> {
    DEFAULT_TEXT_COLORS.iter().map(|c| c.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            spin_duration: default_spin_duration(),
            background_colors: default_background_colors(),
            text_colors: default_text_colors(),
            confetti: true,
            seed: None,
        }
    }
}

impl WheelSettings {
    /// Parsed segment colors; invalid entries are skipped
    pub fn background_palette(&self) -> Vec<iced::Color> {
        parse_palette(&self.background_colors, &DEFAULT_BACKGROUND_COLORS)
    }

    /// Parsed label colors; invalid entries are skipped
    pub fn text_palette(&self) -> Vec<iced::Color> {
        parse_palette(&self.text_colors, &DEFAULT_TEXT_COLORS)
    }
}

/// Parse hex colors, falling back to `defaults` if nothing parses
fn parse_palette(colors: &[String], defaults: &[&str]) -> Vec<iced::Color> {
    let parsed: Vec<iced::Color> = colors.iter().filter_map(|c| parse_hex(c)).collect();
    if parsed.is_empty() {
        defaults.iter().filter_map(|c| parse_hex(c)).collect()
    } else {
        parsed
    }
}

/// Parse `#rrggbb` or `rrggbb`
pub fn parse_hex(value: &str) -> Option<iced::Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(iced::Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "spinwheel", "SpinWheel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
