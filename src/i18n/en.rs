//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Spin Wheel");

    // Name list
    m.insert(Key::NameInputPlaceholder, "Enter a name");
    m.insert(Key::AddName, "Add Name");
    m.insert(Key::NamesHeading, "Names:");
    m.insert(Key::RemoveName, "Remove name");
    m.insert(Key::NoNames, "Add a name to spin the wheel");

    // Wheel
    m.insert(Key::SpinButton, "Spin the Wheel");
    m.insert(Key::SpinningButton, "Spinning...");
    m.insert(Key::WinnerPrefix, "Winner:");

    // Display
    m.insert(Key::DarkMode, "Dark mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
