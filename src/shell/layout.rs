//! The render-children contract and its template implementation.

use console::{Color, Style};
use minijinja::{Environment, Value};
use serde::Serialize;

use super::{LayoutVariant, ShellState};
use crate::device::{DeviceCategory, LayoutRoute};
use crate::error::LayoutError;
use crate::theme::{AccentColor, ThemePreference, ThemeTokens};

/// Everything a layout may read while rendering.
///
/// This is the whole surface the core exposes to page content: the device
/// classification, the live theme preference with its tokens, and the
/// shell's own toggles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub device: DeviceCategory,
    pub route: &'static str,
    pub preference: ThemePreference,
    pub tokens: ThemeTokens,
    pub shell: ShellState,
    pub sider_width: u16,
}

impl RenderContext {
    pub fn new(device: DeviceCategory, preference: ThemePreference, shell: ShellState) -> Self {
        Self {
            device,
            route: LayoutRoute::for_device(device).path(),
            tokens: ThemeTokens::resolve(&preference),
            preference,
            sider_width: shell.sider_width(),
            shell,
        }
    }
}

/// Renders already-rendered page content inside a frame.
///
/// Implementations must be pure with respect to the context: rendering the
/// same context and children twice gives the same output. That lets a
/// [`LiveView`](super::LiveView) re-render freely whenever the theme changes.
pub trait Layout: Send + Sync {
    fn render(&self, ctx: &RenderContext, children: &str) -> Result<String, LayoutError>;
}

const MOBILE_TEMPLATE: &str = r#"[=] {{ "Dashboard" | tone(tokens.color_primary) }} ({{ preference.mode }})
{%- if shell.drawer_open %}
{{ "Dashboard | Analytics | Settings" | tone(tokens.color_text_secondary) }}
{%- endif %}
{{ children }}"#;

const TABLET_TEMPLATE: &str = r#"{{ "Dashboard" | tone(tokens.color_primary) }} [{{ device }}] sider={{ sider_width }}px mode={{ preference.mode }}
{%- if shell.drawer_open %}
{{ "Settings" | tone(tokens.color_text_secondary) }}
{%- endif %}
{{ children }}"#;

const WEB_TEMPLATE: &str = r#"{{ "Dashboard" | tone(tokens.color_primary) }} [{{ device }}] {{ route }} sider={{ sider_width }}px mode={{ preference.mode }} accent={{ preference.accentColor }}
{%- if shell.drawer_open %}
{{ "Settings" | tone(tokens.color_text_secondary) }}
{%- endif %}
{{ children }}"#;

#[derive(Serialize)]
struct Frame<'a> {
    #[serde(flatten)]
    ctx: &'a RenderContext,
    children: &'a str,
}

/// A [`Layout`] backed by one minijinja template per [`LayoutVariant`].
///
/// Templates see the [`RenderContext`] fields plus `children`, and get a
/// `tone(color)` filter that paints text with a hex color when colors are
/// enabled.
///
/// # Example
///
/// ```rust
/// use dashboard_shell::{
///     DeviceCategory, Layout, LayoutVariant, RenderContext, ShellState, TemplateLayout,
///     ThemePreference,
/// };
///
/// let layout = TemplateLayout::with_colors(false);
/// let ctx = RenderContext::new(
///     DeviceCategory::Mobile,
///     ThemePreference::default(),
///     ShellState::new(LayoutVariant::Mobile),
/// );
/// let frame = layout.render(&ctx, "4,42,236 page views").unwrap();
/// assert!(frame.contains("(light)"));
/// assert!(frame.ends_with("4,42,236 page views"));
/// ```
pub struct TemplateLayout {
    env: Environment<'static>,
}

impl TemplateLayout {
    /// Creates a layout that colors output when the terminal supports it.
    pub fn new() -> Self {
        Self::with_colors(console::colors_enabled())
    }

    /// Creates a layout with colors forced on or off.
    pub fn with_colors(colors: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, colors);
        for (variant, source) in [
            (LayoutVariant::Mobile, MOBILE_TEMPLATE),
            (LayoutVariant::Tablet, TABLET_TEMPLATE),
            (LayoutVariant::Web, WEB_TEMPLATE),
        ] {
            // Built-in sources are static and known to compile.
            if let Err(e) = env.add_template(variant.name(), source) {
                log::error!("built-in {} layout failed to compile: {}", variant.name(), e);
            }
        }
        Self { env }
    }

    /// Replaces the template for one variant.
    ///
    /// The template is compiled immediately; syntax errors are returned.
    pub fn set_template(&mut self, variant: LayoutVariant, source: &str) -> Result<(), LayoutError> {
        self.env
            .add_template_owned(variant.name().to_string(), source.to_string())?;
        Ok(())
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for TemplateLayout {
    fn render(&self, ctx: &RenderContext, children: &str) -> Result<String, LayoutError> {
        let tmpl = self.env.get_template(ctx.shell.variant.name())?;
        Ok(tmpl.render(Frame { ctx, children })?)
    }
}

impl std::fmt::Debug for TemplateLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateLayout").finish_non_exhaustive()
    }
}

fn register_filters(env: &mut Environment<'static>, colors: bool) {
    env.add_filter("tone", move |value: Value, color: String| -> String {
        let text = value.to_string();
        if !colors {
            return text;
        }
        match AccentColor::new(color).ansi256() {
            Some(index) => Style::new()
                .fg(Color::Color256(index))
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            None => text,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorMode;

    fn ctx(device: DeviceCategory, pref: ThemePreference) -> RenderContext {
        RenderContext::new(
            device,
            pref,
            ShellState::new(LayoutVariant::for_device(device)),
        )
    }

    #[test]
    fn test_context_derives_route_and_tokens() {
        let c = ctx(
            DeviceCategory::Tablet,
            ThemePreference::new(ColorMode::Dark, "#722ED1"),
        );
        assert_eq!(c.route, "/tablet/dashboard");
        assert_eq!(c.tokens.color_primary, "#722ED1");
        assert_eq!(c.sider_width, 200);
    }

    #[test]
    fn test_web_frame_plain() {
        let layout = TemplateLayout::with_colors(false);
        let out = layout
            .render(&ctx(DeviceCategory::Web, ThemePreference::default()), "BODY")
            .unwrap();
        assert!(out.starts_with("Dashboard [web] /web/dashboard sider=200px mode=light"));
        assert!(out.contains("accent=#0173CE"));
        assert!(out.ends_with("BODY"));
    }

    #[test]
    fn test_mobile_drawer_section() {
        let layout = TemplateLayout::with_colors(false);
        let mut c = ctx(DeviceCategory::Mobile, ThemePreference::default());
        let closed = layout.render(&c, "x").unwrap();
        assert!(!closed.contains("Analytics"));

        c.shell.open_drawer();
        let open = layout.render(&c, "x").unwrap();
        assert!(open.contains("Dashboard | Analytics | Settings"));
    }

    #[test]
    fn test_tone_colors_with_accent() {
        let layout = TemplateLayout::with_colors(true);
        let out = layout
            .render(
                &ctx(
                    DeviceCategory::Web,
                    ThemePreference::new(ColorMode::Light, "#FF0000"),
                ),
                "",
            )
            .unwrap();
        assert!(out.contains("\x1b[38;5;196m"));
    }

    #[test]
    fn test_custom_template() {
        let mut layout = TemplateLayout::with_colors(false);
        layout
            .set_template(LayoutVariant::Tablet, "{{ preference.mode }}:{{ children }}")
            .unwrap();
        let out = layout
            .render(
                &ctx(
                    DeviceCategory::Tablet,
                    ThemePreference::new(ColorMode::Dark, "#0173CE"),
                ),
                "kids",
            )
            .unwrap();
        assert_eq!(out, "dark:kids");
    }

    #[test]
    fn test_invalid_template_rejected() {
        let mut layout = TemplateLayout::with_colors(false);
        assert!(layout
            .set_template(LayoutVariant::Web, "{{ unclosed")
            .is_err());
    }
}
