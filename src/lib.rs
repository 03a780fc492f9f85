//! # dashboard-shell
//!
//! Device-adaptive layout selection and persisted light/dark theming for
//! dashboard front ends.
//!
//! The crate covers the two decisions every dashboard page depends on:
//!
//! - **Which layout?** A viewport width is classified once, at entry, into
//!   [`DeviceCategory::Mobile`], [`DeviceCategory::Tablet`] or
//!   [`DeviceCategory::Web`], which picks the route and [`LayoutVariant`].
//! - **Which theme?** A [`ThemeStore`] owns the live [`ThemePreference`]
//!   (light/dark mode plus accent color), loads it from
//!   [`PreferenceStorage`], persists every change, and pushes changes to
//!   subscribers so every rendered frame reflects the current values.
//!
//! Cards, charts and tables are not part of this crate: they are page
//! content handed to a [`Layout`] as already-rendered children.
//!
//! ## Quick start
//!
//! ```rust
//! use dashboard_shell::{ColorMode, Dashboard, DashboardConfig, DeviceCategory, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! let dash = Dashboard::launch(&DashboardConfig::default(), storage.clone(), Some(500));
//! assert_eq!(dash.device(), DeviceCategory::Mobile);
//!
//! let theme = dash.theme();
//! assert_eq!(theme.current().mode, ColorMode::Light);
//! assert_eq!(theme.current().accent_color, "#0173CE");
//!
//! theme.toggle_mode();
//! theme.set_accent_color("#722ED1");
//! assert_eq!(storage.peek("themeColor").as_deref(), Some("#722ED1"));
//! ```
//!
//! ## Propagation
//!
//! [`ThemeStore::subscribe`] registers a listener that runs synchronously
//! after each mutation. [`LiveView`] uses it to keep a rendered frame
//! current; any other rendering layer can adapt the same hook.

pub mod app;
pub mod config;
pub mod device;
pub mod error;
pub mod shell;
pub mod storage;
pub mod store;
pub mod theme;

pub use app::Dashboard;
pub use config::{DashboardConfig, StorageKeys};
pub use device::{classify, is_mobile, is_tablet, is_web, Breakpoints, DeviceCategory, LayoutRoute};
pub use error::{ConfigError, LayoutError, StorageError};
pub use shell::{Layout, LayoutVariant, LiveView, RenderContext, ShellState, TemplateLayout};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{Store, Subscription};
pub use theme::{
    palette_entry, reset_mode_detector, set_mode_detector, AccentColor, ColorMode, FallbackMode,
    PaletteEntry, ParseColorModeError, ThemePatch, ThemePreference, ThemeStore, ThemeTokens,
    DEFAULT_ACCENT, PALETTE,
};
