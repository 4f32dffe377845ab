//! Terminal presentation
//!
//! - `theme` - color and icon tokens
//! - `terminal` / `context` - capability detection and output settings
//! - `primitives`, `blocks`, `views` - pure string renderers
//! - `console` - the terminal implementation of the status surfaces

pub mod blocks;
pub mod console;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
