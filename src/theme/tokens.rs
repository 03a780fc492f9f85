//! Design tokens for the light and dark themes.
//!
//! Tokens are the concrete values a render layer needs: colors, radii and the
//! base font size. Resolving a [`ThemePreference`] picks the token set of its
//! mode and substitutes the accent color for the primary color.

use console::{Color, Style};
use serde::Serialize;

use super::accent::{nearest_ansi256, parse_hex};
use super::mode::ColorMode;
use super::preference::ThemePreference;

/// Resolved design tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub mode: ColorMode,
    pub font_size: u8,
    pub border_radius: u8,
    pub color_primary: String,
    pub color_text: String,
    pub color_text_secondary: String,
    pub color_fill_secondary: String,
    pub color_bg_container: String,
    pub color_border: String,
    pub color_success: String,
    pub color_warning: String,
    pub color_error: String,
    pub color_info: String,
    pub card_radius: u8,
    pub table_header_bg: String,
    pub button_radius: u8,
}

impl ThemeTokens {
    /// Stock light tokens (primary `#004D7E`).
    pub fn light() -> Self {
        Self::base(
            ColorMode::Light,
            [
                "#004D7E", "#1F1F1F", "#49607A", "#F3F6F9", "#FFFFFF", "#E5E5E5", "#F8F9FA",
            ],
        )
    }

    /// Stock dark tokens (primary `#1890FF`).
    pub fn dark() -> Self {
        Self::base(
            ColorMode::Dark,
            [
                "#1890FF", "#E5E5E5", "#8B949E", "#1F2937", "#121212", "#30363D", "#1F2937",
            ],
        )
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }

    /// Tokens for a preference: the mode's set with the accent as primary.
    pub fn resolve(pref: &ThemePreference) -> Self {
        let mut tokens = Self::for_mode(pref.mode);
        tokens.color_primary = pref.accent_color.as_str().to_string();
        tokens
    }

    /// Looks up a color token by its field name (`"color_primary"`, ...).
    pub fn color(&self, name: &str) -> Option<&str> {
        let value = match name {
            "color_primary" => &self.color_primary,
            "color_text" => &self.color_text,
            "color_text_secondary" => &self.color_text_secondary,
            "color_fill_secondary" => &self.color_fill_secondary,
            "color_bg_container" => &self.color_bg_container,
            "color_border" => &self.color_border,
            "color_success" => &self.color_success,
            "color_warning" => &self.color_warning,
            "color_error" => &self.color_error,
            "color_info" => &self.color_info,
            "table_header_bg" => &self.table_header_bg,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Terminal foreground style for a color token.
    ///
    /// Unknown tokens and colors that are not hex notation yield a plain style.
    pub fn style(&self, name: &str) -> Style {
        match self.color(name).and_then(parse_hex) {
            Some(rgb) => Style::new().fg(Color::Color256(nearest_ansi256(rgb))),
            None => Style::new(),
        }
    }

    // [primary, text, text_secondary, fill_secondary, bg_container, border, table_header_bg]
    fn base(mode: ColorMode, colors: [&str; 7]) -> Self {
        let [primary, text, text_secondary, fill_secondary, bg_container, border, header_bg] =
            colors.map(String::from);
        Self {
            mode,
            font_size: 16,
            border_radius: 8,
            color_primary: primary,
            color_text: text,
            color_text_secondary: text_secondary,
            color_fill_secondary: fill_secondary,
            color_bg_container: bg_container,
            color_border: border,
            color_success: "#52C41A".into(),
            color_warning: "#FAAD14".into(),
            color_error: "#FF4D4F".into(),
            color_info: "#1890FF".into(),
            card_radius: 12,
            table_header_bg: header_bg,
            button_radius: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_overrides_primary_only() {
        let pref = ThemePreference::new(ColorMode::Dark, "#722ED1");
        let tokens = ThemeTokens::resolve(&pref);
        let stock = ThemeTokens::dark();

        assert_eq!(tokens.color_primary, "#722ED1");
        assert_eq!(tokens.color_bg_container, stock.color_bg_container);
        assert_eq!(tokens.color_text, stock.color_text);
        assert_eq!(tokens.mode, ColorMode::Dark);
    }

    #[test]
    fn test_light_and_dark_differ() {
        let light = ThemeTokens::light();
        let dark = ThemeTokens::dark();
        assert_eq!(light.color_bg_container, "#FFFFFF");
        assert_eq!(dark.color_bg_container, "#121212");
        assert_eq!(light.table_header_bg, "#F8F9FA");
        assert_eq!(dark.table_header_bg, "#1F2937");
        assert_eq!(light.color_success, dark.color_success);
    }

    #[test]
    fn test_color_lookup() {
        let tokens = ThemeTokens::light();
        assert_eq!(tokens.color("color_border"), Some("#E5E5E5"));
        assert_eq!(tokens.color("font_size"), None);
        assert_eq!(tokens.color("nope"), None);
    }

    #[test]
    fn test_style_for_unparseable_accent_is_plain() {
        let pref = ThemePreference::new(ColorMode::Light, "hotpink");
        let tokens = ThemeTokens::resolve(&pref);
        let styled = tokens.style("color_primary").apply_to("x").to_string();
        assert_eq!(styled, "x");
    }

    #[test]
    fn test_style_for_hex_token_is_colored() {
        let tokens = ThemeTokens::light();
        let styled = tokens
            .style("color_error")
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert!(styled.contains("\x1b[38;5;"));
    }
}
