//! Glide Animation System
//!
//! Frame-driven tweening: easing curves, timed animations, and a manager that
//! advances a batch of animations once per frame.
//!
//! # Features
//!
//! - **Easing Curves**: Sine, cubic and quint families plus linear
//! - **Animations**: Clamped timing with exactly-once completion
//! - **Manager**: Uniform per-frame updates with automatic pruning
//!
//! The core never samples a clock. Callers own the frame loop and pass the
//! elapsed delta (in seconds) to [`AnimationManager::update`].

pub mod animation;
pub mod easing;
pub mod error;
pub mod manager;

pub use animation::{Animation, SharedAnimation};
pub use easing::{Easing, EasingFn};
pub use error::{AnimationError, EasingParseError, Result};
pub use manager::AnimationManager;
