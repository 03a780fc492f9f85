//! Accent colors and the fixed selection palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable accent in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Short family name. Not unique: two shades share `"blue"`.
    pub key: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

/// The eight accents offered on the theme settings page, in display order.
pub const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry {
        key: "blue",
        color: "#0173CE",
        label: "Ocean Blue",
    },
    PaletteEntry {
        key: "red",
        color: "#FF4D4F",
        label: "Ruby Red",
    },
    PaletteEntry {
        key: "orange",
        color: "#FA8C16",
        label: "Sunset Orange",
    },
    PaletteEntry {
        key: "yellow",
        color: "#FAAD14",
        label: "Golden Yellow",
    },
    PaletteEntry {
        key: "cyan",
        color: "#13C2C2",
        label: "Turquoise",
    },
    PaletteEntry {
        key: "green",
        color: "#52C41A",
        label: "Forest Green",
    },
    PaletteEntry {
        key: "blue",
        color: "#1890FF",
        label: "Sky Blue",
    },
    PaletteEntry {
        key: "purple",
        color: "#722ED1",
        label: "Royal Purple",
    },
];

/// Accent used when nothing usable is persisted.
pub const DEFAULT_ACCENT: &str = PALETTE[0].color;

/// Looks up the palette entry for a color, ignoring ASCII case.
pub fn palette_entry(color: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|e| e.color.eq_ignore_ascii_case(color))
}

/// An accent color string.
///
/// The value is kept verbatim: the store accepts colors outside the palette
/// and colors it cannot parse. Helpers like [`AccentColor::rgb`] simply return
/// `None` for those.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccentColor(String);

impl AccentColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    /// Interprets a persisted value. Blank values are malformed.
    pub fn from_persisted(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The palette entry this color belongs to, if any.
    pub fn palette_entry(&self) -> Option<&'static PaletteEntry> {
        palette_entry(&self.0)
    }

    pub fn is_in_palette(&self) -> bool {
        self.palette_entry().is_some()
    }

    /// Parses `#rgb` or `#rrggbb` notation.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(&self.0)
    }

    /// Nearest ANSI 256-color index, for terminal previews.
    pub fn ansi256(&self) -> Option<u8> {
        self.rgb().map(nearest_ansi256)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(DEFAULT_ACCENT.to_string())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccentColor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AccentColor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for AccentColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AccentColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

pub(crate) fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize, width: usize| {
        let v = u8::from_str_radix(&hex[i..i + width], 16).ok()?;
        Some(if width == 1 { v * 17 } else { v })
    };
    match hex.len() {
        3 => Some((channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
        6 => Some((channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        _ => None,
    }
}

/// Maps RGB onto the xterm 256-color table: grays go to the 24-step ramp,
/// everything else to the 6x6x6 cube.
pub(crate) fn nearest_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            v => 232 + ((u16::from(v) - 8) * 24 / 247) as u8,
        };
    }
    let cube = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_eight_distinct_colors() {
        let mut colors: Vec<_> = PALETTE.iter().map(|e| e.color).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 8);
    }

    #[test]
    fn test_default_is_ocean_blue() {
        assert_eq!(DEFAULT_ACCENT, "#0173CE");
        assert_eq!(
            AccentColor::default().palette_entry().map(|e| e.label),
            Some("Ocean Blue")
        );
    }

    #[test]
    fn test_palette_lookup_ignores_case() {
        assert_eq!(palette_entry("#722ed1").map(|e| e.key), Some("purple"));
        assert!(palette_entry("#123456").is_none());
    }

    #[test]
    fn test_from_persisted_rejects_blank() {
        assert!(AccentColor::from_persisted("").is_none());
        assert!(AccentColor::from_persisted("   ").is_none());
        assert_eq!(
            AccentColor::from_persisted(" #52C41A ").unwrap(),
            "#52C41A"
        );
    }

    #[test]
    fn test_off_palette_kept_verbatim() {
        let accent = AccentColor::new("hotpink");
        assert_eq!(accent.as_str(), "hotpink");
        assert!(!accent.is_in_palette());
        assert_eq!(accent.rgb(), None);
    }

    #[test]
    fn test_rgb_parsing() {
        assert_eq!(AccentColor::new("#0173CE").rgb(), Some((0x01, 0x73, 0xCE)));
        assert_eq!(AccentColor::new("#fff").rgb(), Some((255, 255, 255)));
        assert_eq!(AccentColor::new("#12345").rgb(), None);
        assert_eq!(AccentColor::new("0173CE").rgb(), None);
        assert_eq!(AccentColor::new("#GG0000").rgb(), None);
    }

    #[test]
    fn test_ansi256_mapping() {
        assert_eq!(nearest_ansi256((255, 0, 0)), 196);
        assert_eq!(nearest_ansi256((0, 255, 0)), 46);
        assert_eq!(nearest_ansi256((0, 0, 0)), 16);
        assert_eq!(nearest_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&nearest_ansi256((128, 128, 128))));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&AccentColor::new("#FA8C16")).unwrap();
        assert_eq!(json, "\"#FA8C16\"");
    }
}
