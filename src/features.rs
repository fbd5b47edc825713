//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod roster;
pub mod settings;
pub mod spin;
pub mod storage;

pub use roster::{Entry, Roster};
pub use settings::Settings;
pub use spin::{SpinController, SpinRequest};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
