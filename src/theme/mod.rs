//! Theme state: color mode, accent color, tokens, and the store that owns them.
//!
//! This module provides:
//!
//! - [`ColorMode`]: light or dark, with the toggle transition
//! - [`AccentColor`] and [`PALETTE`]: the accent value and the eight stock accents
//! - [`ThemePreference`]: the persisted (mode, accent) pair
//! - [`ThemeTokens`]: concrete design tokens resolved from a preference
//! - [`ThemeStore`]: the single owner of the live preference

mod accent;
mod mode;
mod preference;
mod store;
mod tokens;

pub use accent::{palette_entry, AccentColor, PaletteEntry, DEFAULT_ACCENT, PALETTE};
pub use mode::{
    reset_mode_detector, set_mode_detector, ColorMode, FallbackMode, ParseColorModeError,
};
pub use preference::{ThemePatch, ThemePreference};
pub use store::ThemeStore;
pub use tokens::ThemeTokens;
