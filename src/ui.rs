//! UI module for the spin wheel
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Canvas programs (wheel, confetti)
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod animation;
pub mod components;
pub mod primitives;
pub mod theme;
