use dashboard_shell::{
    classify, is_mobile, is_tablet, is_web, Dashboard, DashboardConfig, DeviceCategory, Layout,
    LayoutVariant, MemoryStorage, TemplateLayout,
};
use proptest::prelude::*;
use std::sync::Arc;

fn launch(width: Option<u32>) -> Dashboard {
    Dashboard::launch_with_layout(
        &DashboardConfig::default(),
        MemoryStorage::new(),
        width,
        Arc::new(TemplateLayout::with_colors(false)) as Arc<dyn Layout>,
    )
}

#[test]
fn test_concrete_widths_pick_layouts() {
    assert_eq!(launch(Some(500)).variant(), LayoutVariant::Mobile);
    assert_eq!(launch(Some(900)).variant(), LayoutVariant::Tablet);
    assert_eq!(launch(Some(1280)).variant(), LayoutVariant::Web);
    assert_eq!(launch(None).variant(), LayoutVariant::Web);
}

#[test]
fn test_server_context_falls_back_to_web() {
    assert_eq!(classify(None), DeviceCategory::Web);
    assert_eq!(launch(None).route().path(), "/web/dashboard");
}

#[test]
fn test_mobile_frame_has_no_sider() {
    let dash = launch(Some(375));
    dash.toggle_sidebar();
    assert_eq!(dash.shell().sider_width(), 0);
    let frame = dash.render("cards").unwrap();
    assert!(frame.starts_with("[=] Dashboard (light)"));
}

#[test]
fn test_classification_is_fixed_at_launch() {
    let dash = launch(Some(500));
    dash.theme().toggle_mode();
    dash.toggle_sidebar();
    assert_eq!(dash.device(), DeviceCategory::Mobile);
}

proptest! {
    #[test]
    fn prop_projections_agree_with_classify(w in any::<u32>()) {
        let device = classify(Some(w));
        prop_assert_eq!(is_mobile(Some(w)), device == DeviceCategory::Mobile);
        prop_assert_eq!(is_tablet(Some(w)), device == DeviceCategory::Tablet);
        prop_assert_eq!(is_web(Some(w)), device == DeviceCategory::Web);
    }

    #[test]
    fn prop_launch_matches_thresholds(w in 0u32..4096) {
        let expected = if w < 768 {
            DeviceCategory::Mobile
        } else if w < 1024 {
            DeviceCategory::Tablet
        } else {
            DeviceCategory::Web
        };
        prop_assert_eq!(launch(Some(w)).device(), expected);
    }
}
