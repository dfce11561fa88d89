//! Centralized theme system.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `css`: CSS color values from the prediction backend mapped to terminal colors

pub mod css;
pub mod palette;
pub mod styles;
