//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Name list ============
    /// Name input text changed
    NameInputChanged(String),
    /// Add the current input as a name
    AddName,
    /// Remove the name at index
    RemoveName(usize),

    // ============ Spin ============
    /// Spin button pressed
    Spin,
    /// Wheel reached its target segment
    SpinStopped,

    // ============ Animation ============
    /// Frame tick while the wheel, banner or confetti is moving
    AnimationTick(Instant),

    // ============ Settings ============
    /// Dark mode toggled
    DarkModeToggled(bool),

    // ============ Window ============
    /// The main window was closed
    WindowClosed,
}
