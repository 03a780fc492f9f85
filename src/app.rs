//! Application entry: classify once, initialize the theme once, render.

use std::sync::{Arc, Mutex};

use crate::config::DashboardConfig;
use crate::device::{DeviceCategory, LayoutRoute};
use crate::error::LayoutError;
use crate::shell::{Layout, LayoutVariant, LiveView, RenderContext, ShellState, TemplateLayout};
use crate::storage::{FileStorage, MemoryStorage, PreferenceStorage};
use crate::store::lock;
use crate::theme::ThemeStore;

/// A launched dashboard session.
///
/// The device category is decided once at launch from the width passed in
/// and is never recomputed; resizing after launch does not change the
/// layout.
///
/// # Example
///
/// ```rust
/// use dashboard_shell::{Dashboard, DashboardConfig, DeviceCategory, MemoryStorage};
///
/// let dash = Dashboard::launch(&DashboardConfig::default(), MemoryStorage::new(), Some(900));
/// assert_eq!(dash.device(), DeviceCategory::Tablet);
/// assert_eq!(dash.route().path(), "/tablet/dashboard");
///
/// dash.theme().toggle_mode();
/// let frame = dash.render("welcome").unwrap();
/// assert!(frame.contains("mode=dark"));
/// ```
pub struct Dashboard {
    device: DeviceCategory,
    theme: ThemeStore,
    layout: Arc<dyn Layout>,
    shell: Mutex<ShellState>,
}

impl Dashboard {
    /// Launches with the stock template layout.
    pub fn launch<S>(config: &DashboardConfig, storage: S, width: Option<u32>) -> Self
    where
        S: PreferenceStorage + 'static,
    {
        Self::launch_with_layout(config, storage, width, Arc::new(TemplateLayout::new()))
    }

    pub fn launch_with_layout<S>(
        config: &DashboardConfig,
        storage: S,
        width: Option<u32>,
        layout: Arc<dyn Layout>,
    ) -> Self
    where
        S: PreferenceStorage + 'static,
    {
        let device = config.breakpoints.classify(width);
        log::info!(
            "viewport width {} classified as {}",
            width.map_or_else(|| "unavailable".to_string(), |w| format!("{w}px")),
            device
        );

        let theme = ThemeStore::new(storage)
            .with_keys(config.storage_keys.clone())
            .with_fallback(config.fallback_mode);
        theme.initialize();

        Self {
            device,
            theme,
            layout,
            shell: Mutex::new(ShellState::new(LayoutVariant::for_device(device))),
        }
    }

    /// Launches over the storage named by the config: the JSON file at
    /// `storage_path`, or memory when unset.
    pub fn from_config(config: &DashboardConfig, width: Option<u32>) -> Self {
        match &config.storage_path {
            Some(path) => Self::launch(config, FileStorage::new(path), width),
            None => Self::launch(config, MemoryStorage::new(), width),
        }
    }

    pub fn device(&self) -> DeviceCategory {
        self.device
    }

    pub fn route(&self) -> LayoutRoute {
        LayoutRoute::for_device(self.device)
    }

    pub fn variant(&self) -> LayoutVariant {
        LayoutVariant::for_device(self.device)
    }

    /// The theme store handle shared with every consumer.
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn shell(&self) -> ShellState {
        *lock(&self.shell)
    }

    pub fn toggle_sidebar(&self) {
        lock(&self.shell).toggle_sidebar();
    }

    pub fn set_drawer_open(&self, open: bool) {
        let mut shell = lock(&self.shell);
        if open {
            shell.open_drawer();
        } else {
            shell.close_drawer();
        }
    }

    /// The context a render at this moment would see.
    pub fn context(&self) -> RenderContext {
        RenderContext::new(self.device, self.theme.current(), self.shell())
    }

    /// Renders page content inside this session's layout.
    pub fn render(&self, children: &str) -> Result<String, LayoutError> {
        self.layout.render(&self.context(), children)
    }

    /// Renders page content and keeps the frame current as the theme changes.
    pub fn live_view(&self, children: impl Into<String>) -> Result<LiveView, LayoutError> {
        LiveView::attach(
            &self.theme,
            Arc::clone(&self.layout),
            self.device,
            self.shell(),
            children,
        )
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("device", &self.device)
            .field("theme", &self.theme)
            .field("shell", &self.shell())
            .finish_non_exhaustive()
    }
}
