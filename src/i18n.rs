//! Internationalization (i18n) support
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Language for a settings code; unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Name list
    NameInputPlaceholder,
    AddName,
    NamesHeading,
    RemoveName,
    NoNames,

    // Wheel
    SpinButton,
    SpinningButton,
    WinnerPrefix,

    // Display
    DarkMode,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [Key; 10] = [
        Key::AppName,
        Key::NameInputPlaceholder,
        Key::AddName,
        Key::NamesHeading,
        Key::RemoveName,
        Key::NoNames,
        Key::SpinButton,
        Key::SpinningButton,
        Key::WinnerPrefix,
        Key::DarkMode,
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
