//! Edge swipe recognition from the left screen edge.

use media_shell::drawer::{DrawerGestureRecognizer, GestureConfig, GestureOutcome, TouchPoint};

fn gesture(
    recognizer: &mut DrawerGestureRecognizer,
    start: TouchPoint,
    end: TouchPoint,
) -> GestureOutcome {
    recognizer.touch_start(start, false);
    recognizer.touch_move(TouchPoint::new(
        (start.x + end.x) / 2.0,
        (start.y + end.y) / 2.0,
        (start.time_ms + end.time_ms) / 2.0,
    ));
    recognizer.touch_end(end, false)
}

#[test]
fn horizontal_edge_swipe_opens() {
    let mut r = DrawerGestureRecognizer::new(GestureConfig::default(), true);
    let outcome = gesture(
        &mut r,
        TouchPoint::new(10.0, 400.0, 1000.0),
        TouchPoint::new(90.0, 405.0, 1400.0),
    );
    assert_eq!(outcome, GestureOutcome::OpenDrawer);
    assert!(!r.is_tracking());
}

#[test]
fn mostly_vertical_drag_is_ignored() {
    let mut r = DrawerGestureRecognizer::new(GestureConfig::default(), true);
    let outcome = gesture(
        &mut r,
        TouchPoint::new(10.0, 100.0, 0.0),
        TouchPoint::new(60.0, 400.0, 100.0),
    );
    assert_eq!(outcome, GestureOutcome::Ignored);
}

#[test]
fn each_touch_is_judged_alone() {
    let mut r = DrawerGestureRecognizer::new(GestureConfig::default(), true);

    // Starts mid-screen, never tracked
    assert!(!r.touch_start(TouchPoint::new(200.0, 300.0, 0.0), false));
    assert_eq!(
        r.touch_end(TouchPoint::new(400.0, 300.0, 100.0), false),
        GestureOutcome::Ignored
    );

    // A stray end without a start does nothing either
    assert_eq!(
        r.touch_end(TouchPoint::new(400.0, 300.0, 200.0), false),
        GestureOutcome::Ignored
    );

    let outcome = gesture(
        &mut r,
        TouchPoint::new(5.0, 300.0, 300.0),
        TouchPoint::new(100.0, 310.0, 600.0),
    );
    assert_eq!(outcome, GestureOutcome::OpenDrawer);
}

#[test]
fn drawer_opening_mid_gesture_cancels() {
    let mut r = DrawerGestureRecognizer::new(GestureConfig::default(), true);
    assert!(r.touch_start(TouchPoint::new(10.0, 300.0, 0.0), false));
    assert_eq!(
        r.touch_end(TouchPoint::new(120.0, 300.0, 200.0), true),
        GestureOutcome::Ignored
    );
    assert!(!r.is_tracking());
}

#[test]
fn custom_thresholds_apply() {
    let config = GestureConfig {
        edge_threshold: 40.0,
        distance_threshold: 150.0,
        ..GestureConfig::default()
    };
    let mut r = DrawerGestureRecognizer::new(config, true);

    // Slow 100px swipe: under the custom distance, too slow for a flick
    let outcome = gesture(
        &mut r,
        TouchPoint::new(30.0, 300.0, 0.0),
        TouchPoint::new(130.0, 300.0, 1000.0),
    );
    assert_eq!(outcome, GestureOutcome::Ignored);

    let outcome = gesture(
        &mut r,
        TouchPoint::new(30.0, 300.0, 0.0),
        TouchPoint::new(200.0, 300.0, 1000.0),
    );
    assert_eq!(outcome, GestureOutcome::OpenDrawer);
}
