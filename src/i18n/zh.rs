//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "幸运转盘");

    // Name list
    m.insert(Key::NameInputPlaceholder, "输入名字");
    m.insert(Key::AddName, "添加名字");
    m.insert(Key::NamesHeading, "名单：");
    m.insert(Key::RemoveName, "移除名字");
    m.insert(Key::NoNames, "添加名字后即可转动转盘");

    // Wheel
    m.insert(Key::SpinButton, "转动转盘");
    m.insert(Key::SpinningButton, "转动中...");
    m.insert(Key::WinnerPrefix, "获胜者：");

    // Display
    m.insert(Key::DarkMode, "深色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
