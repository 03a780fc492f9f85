//! A rendered frame kept current with the theme store.

use std::sync::{Arc, Mutex};

use super::layout::{Layout, RenderContext};
use super::ShellState;
use crate::device::DeviceCategory;
use crate::error::LayoutError;
use crate::store::{lock, Subscription};
use crate::theme::{ThemePreference, ThemeStore};

struct ViewState {
    device: DeviceCategory,
    shell: ShellState,
    children: String,
    frame: String,
    renders: usize,
}

impl ViewState {
    fn rerender(&mut self, layout: &dyn Layout, pref: ThemePreference) -> Result<(), LayoutError> {
        let ctx = RenderContext::new(self.device, pref, self.shell);
        self.frame = layout.render(&ctx, &self.children)?;
        self.renders += 1;
        Ok(())
    }
}

/// A layout subscribed to a [`ThemeStore`].
///
/// The frame is rendered once on attach and again, synchronously, every
/// time the store publishes a change, so [`frame`](Self::frame) always
/// reflects the current mode and accent without a manual refresh. Dropping
/// the view unsubscribes it.
pub struct LiveView {
    theme: ThemeStore,
    layout: Arc<dyn Layout>,
    state: Arc<Mutex<ViewState>>,
    _subscription: Subscription,
}

impl LiveView {
    pub fn attach(
        theme: &ThemeStore,
        layout: Arc<dyn Layout>,
        device: DeviceCategory,
        shell: ShellState,
        children: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        let mut initial = ViewState {
            device,
            shell,
            children: children.into(),
            frame: String::new(),
            renders: 0,
        };
        initial.rerender(layout.as_ref(), theme.current())?;
        let state = Arc::new(Mutex::new(initial));

        let listener_state = Arc::clone(&state);
        let listener_layout = Arc::clone(&layout);
        let subscription = theme.subscribe(move |pref| {
            let mut view = lock(&listener_state);
            if let Err(e) = view.rerender(listener_layout.as_ref(), pref.clone()) {
                log::error!("failed to re-render {} layout: {}", view.device, e);
            }
        });

        Ok(Self {
            theme: theme.clone(),
            layout,
            state,
            _subscription: subscription,
        })
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> String {
        lock(&self.state).frame.clone()
    }

    /// How many times the frame has been rendered, including the first.
    pub fn render_count(&self) -> usize {
        lock(&self.state).renders
    }

    pub fn shell(&self) -> ShellState {
        lock(&self.state).shell
    }

    /// Changes the shell toggles and re-renders.
    pub fn update_shell<F>(&self, f: F) -> Result<(), LayoutError>
    where
        F: FnOnce(&mut ShellState),
    {
        let mut view = lock(&self.state);
        f(&mut view.shell);
        view.rerender(self.layout.as_ref(), self.theme.current())
    }

    /// Replaces the page content and re-renders.
    pub fn set_children(&self, children: impl Into<String>) -> Result<(), LayoutError> {
        let mut view = lock(&self.state);
        view.children = children.into();
        view.rerender(self.layout.as_ref(), self.theme.current())
    }
}

impl std::fmt::Debug for LiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let view = lock(&self.state);
        f.debug_struct("LiveView")
            .field("device", &view.device)
            .field("shell", &view.shell)
            .field("renders", &view.renders)
            .finish_non_exhaustive()
    }
}
