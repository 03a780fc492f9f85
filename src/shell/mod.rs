//! Layout shells: the per-device frame that renders page content.
//!
//! - [`LayoutVariant`] and [`ShellState`]: which frame is shown and its toggles
//! - [`Layout`]: the "render children" contract page content relies on
//! - [`TemplateLayout`]: a template-backed layout for terminal or text output
//! - [`LiveView`]: keeps a rendered frame in sync with a [`ThemeStore`](crate::ThemeStore)

mod layout;
mod live;

pub use layout::{Layout, RenderContext, TemplateLayout};
pub use live::LiveView;

use serde::Serialize;

use crate::device::DeviceCategory;

/// Sider width when expanded, in pixels.
pub const SIDER_EXPANDED_WIDTH: u16 = 200;
/// Sider width when collapsed to icons, in pixels.
pub const SIDER_COLLAPSED_WIDTH: u16 = 80;

/// The layout frame chosen for a device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Header with a drawer menu, no sider.
    Mobile,
    /// Collapsible sider plus settings drawer.
    Tablet,
    /// Collapsible sider plus settings drawer, full header.
    Web,
}

impl LayoutVariant {
    pub fn for_device(device: DeviceCategory) -> Self {
        match device {
            DeviceCategory::Mobile => LayoutVariant::Mobile,
            DeviceCategory::Tablet => LayoutVariant::Tablet,
            DeviceCategory::Web => LayoutVariant::Web,
        }
    }

    pub fn has_sider(&self) -> bool {
        !matches!(self, LayoutVariant::Mobile)
    }

    /// Template name used by [`TemplateLayout`].
    pub fn name(&self) -> &'static str {
        match self {
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::Tablet => "tablet",
            LayoutVariant::Web => "web",
        }
    }
}

/// UI toggles owned by a layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShellState {
    pub variant: LayoutVariant,
    pub sidebar_collapsed: bool,
    pub drawer_open: bool,
}

impl ShellState {
    /// Starts expanded with the drawer closed.
    pub fn new(variant: LayoutVariant) -> Self {
        Self {
            variant,
            sidebar_collapsed: false,
            drawer_open: false,
        }
    }

    /// Collapses or expands the sider. No effect on variants without one.
    pub fn toggle_sidebar(&mut self) {
        if self.variant.has_sider() {
            self.sidebar_collapsed = !self.sidebar_collapsed;
        }
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Horizontal space taken by the sider, zero when there is none.
    pub fn sider_width(&self) -> u16 {
        match (self.variant.has_sider(), self.sidebar_collapsed) {
            (false, _) => 0,
            (true, true) => SIDER_COLLAPSED_WIDTH,
            (true, false) => SIDER_EXPANDED_WIDTH,
        }
    }
}
