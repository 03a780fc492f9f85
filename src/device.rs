//! Viewport classification into device categories.
//!
//! Classification is a one-shot decision made at application entry: the
//! width is measured once, mapped to a [`DeviceCategory`], and the matching
//! [`LayoutRoute`] is chosen. Nothing here listens for resize events.
//!
//! # Example
//!
//! ```rust
//! use dashboard_shell::{classify, DeviceCategory, LayoutRoute};
//!
//! assert_eq!(classify(Some(500)), DeviceCategory::Mobile);
//! assert_eq!(classify(Some(900)), DeviceCategory::Tablet);
//! assert_eq!(classify(Some(1280)), DeviceCategory::Web);
//!
//! // No viewport (e.g. server-side rendering) falls back to the web layout.
//! assert_eq!(classify(None), DeviceCategory::Web);
//! assert_eq!(LayoutRoute::for_device(classify(None)).path(), "/web/dashboard");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The device class a viewport width falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Mobile,
    Tablet,
    Web,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Mobile => "mobile",
            DeviceCategory::Tablet => "tablet",
            DeviceCategory::Web => "web",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width thresholds separating the three device categories.
///
/// A width below `tablet` is mobile, a width below `web` is tablet, and
/// anything else is web. Both bounds are exclusive on the upper side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Smallest width classified as tablet.
    pub tablet: u32,
    /// Smallest width classified as web.
    pub web: u32,
}

impl Breakpoints {
    /// The stock 768 / 1024 pixel thresholds.
    pub const STANDARD: Breakpoints = Breakpoints {
        tablet: 768,
        web: 1024,
    };

    /// Maps a measured width to a category.
    ///
    /// `None` means no viewport exists; that case resolves to
    /// [`DeviceCategory::Web`].
    pub fn classify(&self, width: Option<u32>) -> DeviceCategory {
        match width {
            None => DeviceCategory::Web,
            Some(w) if w < self.tablet => DeviceCategory::Mobile,
            Some(w) if w < self.web => DeviceCategory::Tablet,
            Some(_) => DeviceCategory::Web,
        }
    }

    /// Whether the thresholds are ordered so every category stays reachable
    /// or collapses cleanly (`tablet == web` leaves no tablet range).
    pub fn is_ordered(&self) -> bool {
        self.tablet <= self.web
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Classifies a width with the standard breakpoints.
pub fn classify(width: Option<u32>) -> DeviceCategory {
    Breakpoints::STANDARD.classify(width)
}

pub fn is_mobile(width: Option<u32>) -> bool {
    classify(width) == DeviceCategory::Mobile
}

pub fn is_tablet(width: Option<u32>) -> bool {
    classify(width) == DeviceCategory::Tablet
}

pub fn is_web(width: Option<u32>) -> bool {
    classify(width) == DeviceCategory::Web
}

/// The entry route rendered for a device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRoute {
    device: DeviceCategory,
}

impl LayoutRoute {
    pub fn for_device(device: DeviceCategory) -> Self {
        Self { device }
    }

    pub fn device(&self) -> DeviceCategory {
        self.device
    }

    /// Path of the dashboard page for this device.
    pub fn path(&self) -> &'static str {
        match self.device {
            DeviceCategory::Mobile => "/mobile/dashboard",
            DeviceCategory::Tablet => "/tablet/dashboard",
            DeviceCategory::Web => "/web/dashboard",
        }
    }
}

impl fmt::Display for LayoutRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(Some(0)), DeviceCategory::Mobile);
        assert_eq!(classify(Some(767)), DeviceCategory::Mobile);
        assert_eq!(classify(Some(768)), DeviceCategory::Tablet);
        assert_eq!(classify(Some(1023)), DeviceCategory::Tablet);
        assert_eq!(classify(Some(1024)), DeviceCategory::Web);
        assert_eq!(classify(Some(u32::MAX)), DeviceCategory::Web);
    }

    #[test]
    fn test_classify_unavailable_is_web() {
        assert_eq!(classify(None), DeviceCategory::Web);
        assert!(is_web(None));
        assert!(!is_mobile(None));
        assert!(!is_tablet(None));
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints {
            tablet: 600,
            web: 1200,
        };
        assert_eq!(bp.classify(Some(700)), DeviceCategory::Tablet);
        assert_eq!(bp.classify(Some(1100)), DeviceCategory::Tablet);
        assert_eq!(bp.classify(Some(1200)), DeviceCategory::Web);
    }

    #[test]
    fn test_collapsed_tablet_range() {
        let bp = Breakpoints {
            tablet: 900,
            web: 900,
        };
        assert!(bp.is_ordered());
        assert_eq!(bp.classify(Some(899)), DeviceCategory::Mobile);
        assert_eq!(bp.classify(Some(900)), DeviceCategory::Web);
    }

    #[test]
    fn test_unordered_breakpoints_detected() {
        let bp = Breakpoints {
            tablet: 1024,
            web: 768,
        };
        assert!(!bp.is_ordered());
    }

    #[test]
    fn test_routes() {
        assert_eq!(
            LayoutRoute::for_device(DeviceCategory::Mobile).path(),
            "/mobile/dashboard"
        );
        assert_eq!(
            LayoutRoute::for_device(DeviceCategory::Tablet).to_string(),
            "/tablet/dashboard"
        );
        assert_eq!(
            LayoutRoute::for_device(DeviceCategory::Web).path(),
            "/web/dashboard"
        );
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&DeviceCategory::Tablet).unwrap();
        assert_eq!(json, "\"tablet\"");
    }

    proptest! {
        #[test]
        fn prop_mobile_below_768(w in 0u32..768) {
            prop_assert_eq!(classify(Some(w)), DeviceCategory::Mobile);
            prop_assert!(is_mobile(Some(w)));
            prop_assert!(!is_tablet(Some(w)));
            prop_assert!(!is_web(Some(w)));
        }

        #[test]
        fn prop_tablet_between(w in 768u32..1024) {
            prop_assert_eq!(classify(Some(w)), DeviceCategory::Tablet);
        }

        #[test]
        fn prop_web_from_1024(w in 1024u32..=u32::MAX) {
            prop_assert_eq!(classify(Some(w)), DeviceCategory::Web);
        }

        #[test]
        fn prop_exactly_one_projection(w in any::<Option<u32>>()) {
            let hits = [is_mobile(w), is_tablet(w), is_web(w)]
                .iter()
                .filter(|b| **b)
                .count();
            prop_assert_eq!(hits, 1);
        }
    }
}
