//! The persisted (mode, accent) pair.

use serde::{Deserialize, Serialize};

use super::accent::AccentColor;
use super::mode::ColorMode;

/// The user's visual preference: color mode plus accent color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub mode: ColorMode,
    pub accent_color: AccentColor,
}

impl ThemePreference {
    pub fn new(mode: ColorMode, accent_color: impl Into<AccentColor>) -> Self {
        Self {
            mode,
            accent_color: accent_color.into(),
        }
    }

    /// Applies a partial update, leaving unset fields alone.
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(accent) = patch.accent_color {
            self.accent_color = accent;
        }
    }
}

/// A partial [`ThemePreference`] update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemePatch {
    pub mode: Option<ColorMode>,
    pub accent_color: Option<AccentColor>,
}

impl ThemePatch {
    pub fn mode(mode: ColorMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn accent(color: impl Into<AccentColor>) -> Self {
        Self {
            accent_color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.accent_color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference() {
        let pref = ThemePreference::default();
        assert_eq!(pref.mode, ColorMode::Light);
        assert_eq!(pref.accent_color, "#0173CE");
    }

    #[test]
    fn test_apply_partial() {
        let mut pref = ThemePreference::default();
        pref.apply(ThemePatch::mode(ColorMode::Dark));
        assert_eq!(pref, ThemePreference::new(ColorMode::Dark, "#0173CE"));

        pref.apply(ThemePatch::accent("#722ED1"));
        assert_eq!(pref, ThemePreference::new(ColorMode::Dark, "#722ED1"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut pref = ThemePreference::new(ColorMode::Dark, "#13C2C2");
        let before = pref.clone();
        let patch = ThemePatch::default();
        assert!(patch.is_empty());
        pref.apply(patch);
        assert_eq!(pref, before);
    }

    #[test]
    fn test_serializes_camel_case() {
        let pref = ThemePreference::new(ColorMode::Dark, "#722ED1");
        let json = serde_json::to_value(&pref).unwrap();
        assert_eq!(json["mode"], "dark");
        assert_eq!(json["accentColor"], "#722ED1");
    }
}
