//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`Wheel`] - Segmented roulette wheel with a fixed pointer
//! - [`WheelMotion`] - Spin timing with a single stop notification
//! - [`Confetti`] - Celebratory particle overlay

pub mod confetti;
pub mod wheel;

pub use confetti::Confetti;
pub use wheel::{BASE_SPIN_DURATION, Wheel, WheelMotion};
