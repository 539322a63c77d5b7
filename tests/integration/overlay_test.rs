//! Overlay surface interaction: visibility, markup and failure handling.

use chrono::NaiveTime;
use timedisplay::host::StatusSnapshot;
use timedisplay::{OsdConfig, StyleConfig, Visibility};

use crate::helpers::{playing, Harness, SurfaceCall};

// ============================================================================
// Visibility Tests
// ============================================================================

#[test]
fn init_applies_style_and_shows() {
    let mut h = Harness::new();
    h.controller.init();

    let calls = h.surface.calls.borrow();
    assert_eq!(calls[0], SurfaceCall::SimpleMode);
    assert!(matches!(&calls[1], SurfaceCall::Style(css) if css.contains("#osd-container")));
    assert!(matches!(&calls[2], SurfaceCall::Content(_)));
    assert_eq!(calls[3], SurfaceCall::Show);
    assert_eq!(h.controller.visibility(), Visibility::Shown);
}

#[test]
fn reinit_while_shown_restyles() {
    let mut h = Harness::new();
    h.controller.init();
    h.controller.init();

    let styles = h
        .surface
        .calls
        .borrow()
        .iter()
        .filter(|c| matches!(c, SurfaceCall::Style(_)))
        .count();
    assert_eq!(styles, 2);
    assert_eq!(h.controller.visibility(), Visibility::Shown);
}

#[test]
fn teardown_hides_and_stops_refreshing() {
    let mut h = Harness::new();
    h.controller.init();
    h.controller.teardown();

    assert_eq!(h.surface.last_call(), Some(SurfaceCall::Hide));
    assert_eq!(h.controller.visibility(), Visibility::Hidden);

    let pushed = h.surface.contents().len();
    assert!(h.controller.tick().is_none());
    assert_eq!(h.surface.contents().len(), pushed);
}

#[test]
fn configured_style_reaches_surface() {
    let config = OsdConfig::from_toml_str("[style]\nfont_size_px = 28").unwrap();
    let mut h = Harness::with_config(&config);
    h.controller.init();

    let calls = h.surface.calls.borrow();
    assert!(matches!(&calls[1], SurfaceCall::Style(css) if css.contains("font-size: 28px;")));
}

#[test]
fn unvalidated_style_literal_is_not_spliced() {
    let config = OsdConfig {
        style: StyleConfig {
            text_color: "white; } body { display:none".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut h = Harness::with_config(&config);
    h.controller.init();

    let calls = h.surface.calls.borrow();
    assert!(matches!(&calls[1], SurfaceCall::Style(css) if !css.contains("display:none")));
    assert!(matches!(&calls[1], SurfaceCall::Style(css) if css.contains("rgba(255, 255, 255, 0.95)")));
}

// ============================================================================
// Markup Tests
// ============================================================================

#[test]
fn markup_contains_three_regions() {
    let mut h = Harness::new();
    h.status.set(StatusSnapshot {
        title: Some("Big Buck Bunny".to_string()),
        ..playing(596.0, 65.0)
    });
    h.clock.set_wall(NaiveTime::from_hms_opt(9, 5, 3).unwrap());
    h.controller.init();

    let markup = h.surface.contents().pop().unwrap();
    insta::assert_snapshot!(markup, @r#"<div id="osd-container"><div id="left" class="osd-item">09:56 : 01:05 - 08:51</div><div id="center" class="osd-item">09:05:03</div><div id="right" class="osd-item">Big Buck Bunny</div></div>"#);
}

#[test]
fn markup_escapes_hostile_titles() {
    let mut h = Harness::new();
    h.status.set(StatusSnapshot {
        title: Some("<script>alert(1)</script>".to_string()),
        ..Default::default()
    });
    h.controller.init();

    let markup = h.surface.contents().pop().unwrap();
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[test]
fn failing_surface_never_interrupts_ticks() {
    let mut h = Harness::new();
    h.status.set(playing(600.0, 10.0));
    h.surface.failing.set(true);

    h.controller.init();
    for _ in 0..5 {
        h.clock.advance(0.5);
        assert!(h.controller.tick().is_some());
    }

    // Estimation kept going even though nothing reached the surface
    assert_eq!(h.controller.estimator().virtual_position(), 12.5);
    assert!(h.surface.calls.borrow().is_empty());
}

#[test]
fn surface_recovers_after_failure() {
    let mut h = Harness::new();
    h.surface.failing.set(true);
    h.controller.init();

    h.surface.failing.set(false);
    h.controller.tick();

    assert_eq!(h.surface.contents().len(), 1);
}

#[test]
fn status_failure_falls_back_to_placeholder() {
    let mut h = Harness::new();
    h.status.set(playing(600.0, 10.0));
    h.controller.init();

    h.status.failing.set(true);
    let layout = h.controller.tick().unwrap();

    assert_eq!(layout.left, "00:00 : 00:00 - 00:00");
    assert_eq!(layout.center, "21:15:00");
}
