//! Light/dark color mode and OS mode detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use crate::store::lock;

/// The two color modes a dashboard can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// The other mode. Toggling twice returns the original mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The persisted representation (`"light"` / `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode '{0}'")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    /// Parses the exact persisted values. Anything else, including other
    /// casings, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseColorModeError(other.to_string())),
        }
    }
}

/// Where the initial mode comes from when nothing valid is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Always start in light mode.
    #[default]
    Light,
    /// Ask the operating system whether it prefers dark mode.
    System,
}

impl FallbackMode {
    pub fn resolve(self) -> ColorMode {
        match self {
            FallbackMode::Light => ColorMode::Light,
            FallbackMode::System => detect_color_mode(),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector consulted by [`FallbackMode::System`].
///
/// Useful for tests, or for hosts that know the display mode better than the
/// OS query does.
pub fn set_mode_detector(detector: ModeDetector) {
    *lock(&*MODE_DETECTOR) = detector;
}

/// Restores the OS-backed detector.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = *lock(&*MODE_DETECTOR);
    detector()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
