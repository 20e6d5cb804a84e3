use super::*;
use crate::metrics::ScreenMetrics;
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(700.0, 90.0),
    ));
    raw.events = events;

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        f(ctx);
    })
}

/// Commands issued for the root viewport during a frame.
fn root_commands(output: &egui::FullOutput) -> Vec<egui::ViewportCommand> {
    output
        .viewport_output
        .get(&egui::ViewportId::ROOT)
        .map(|v| v.commands.clone())
        .unwrap_or_default()
}

fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn escape_closes_the_window() {
    let mut app = RulerApp::default();

    let out = run_ui_with(
        vec![key_press(egui::Key::Escape, egui::Modifiers::NONE)],
        |ctx| app.handle_close_keys(ctx),
    );

    assert!(root_commands(&out)
        .iter()
        .any(|c| matches!(c, egui::ViewportCommand::Close)));
}

#[test]
fn command_q_closes_the_window() {
    let mut app = RulerApp::default();

    let modifiers = egui::Modifiers {
        command: true,
        ..Default::default()
    };
    let mut raw = egui::RawInput::default();
    raw.modifiers = modifiers;
    raw.events = vec![key_press(egui::Key::Q, modifiers)];

    let ctx = egui::Context::default();
    let out = ctx.run(raw, |ctx| app.handle_close_keys(ctx));

    assert!(root_commands(&out)
        .iter()
        .any(|c| matches!(c, egui::ViewportCommand::Close)));
}

#[test]
fn plain_q_does_not_close_the_window() {
    let mut app = RulerApp::default();

    let out = run_ui_with(
        vec![key_press(egui::Key::Q, egui::Modifiers::NONE)],
        |ctx| app.handle_close_keys(ctx),
    );

    assert!(root_commands(&out).is_empty());
}

#[test]
fn r_key_flips_orientation_and_requests_resize() {
    let mut app = RulerApp::default();
    let horizontal_size = app.window_size();
    assert_eq!(app.orientation, Orientation::Horizontal);

    let _ = run_ui_with(
        vec![key_press(egui::Key::R, egui::Modifiers::NONE)],
        |ctx| app.handle_orientation_key(ctx),
    );

    assert_eq!(app.orientation, Orientation::Vertical);
    assert!(app.pending_resize);

    // The window dimensions swap with the orientation.
    let vertical_size = app.window_size();
    assert_eq!(vertical_size.x, horizontal_size.y);
    assert_eq!(vertical_size.y, horizontal_size.x);
}

#[test]
fn ruler_face_paints_a_tick_per_millimetre_plus_baseline() {
    // Reported (non-estimated) metrics: 10 px/mm at 2x, i.e. 5 pt/mm.
    let mut app = RulerApp::new(ScreenMetrics::new(10.0, 2.0));

    let out = run_ui_with(Vec::new(), |ctx| app.draw_face(ctx));

    let line_segments = out
        .shapes
        .iter()
        .filter(|s| matches!(s.shape, egui::Shape::LineSegment { .. }))
        .count();
    // 151 ticks (one per millimetre, origin included) plus the baseline.
    assert_eq!(line_segments, 152);

    let labels = out
        .shapes
        .iter()
        .filter(|s| matches!(s.shape, egui::Shape::Text(_)))
        .count();
    // One label per centimetre, 0 through 15. No advisory note.
    assert_eq!(labels, 16);
}

#[test]
fn estimated_metrics_paint_an_advisory_note() {
    let mut app = RulerApp::new(ScreenMetrics::from_scale_factor(1.0));

    let out = run_ui_with(Vec::new(), |ctx| app.draw_face(ctx));

    let labels = out
        .shapes
        .iter()
        .filter(|s| matches!(s.shape, egui::Shape::Text(_)))
        .count();
    // 16 centimetre labels plus the advisory note.
    assert_eq!(labels, 17);
}

#[test]
fn scale_factor_change_triggers_remeasure_and_resize() {
    let mut app = RulerApp::default();
    assert_eq!(app.applied_scale_factor, None);

    let mut raw = egui::RawInput::default();
    raw.viewports
        .entry(egui::ViewportId::ROOT)
        .or_default()
        .native_pixels_per_point = Some(2.0);

    let ctx = egui::Context::default();
    let _ = ctx.run(raw, |ctx| app.sync_display_metrics(ctx));

    assert_eq!(app.applied_scale_factor, Some(2.0));
    assert!(app.pending_resize);

    // The next frame resizes the window and re-asserts always-on-top.
    let out = run_ui_with(Vec::new(), |ctx| app.apply_pending_resize(ctx));
    let commands = root_commands(&out);
    assert!(commands
        .iter()
        .any(|c| matches!(c, egui::ViewportCommand::InnerSize(_))));
    assert!(commands.iter().any(|c| matches!(
        c,
        egui::ViewportCommand::WindowLevel(egui::WindowLevel::AlwaysOnTop)
    )));
    assert!(!app.pending_resize);
}

#[test]
fn dragging_the_face_starts_a_window_move() {
    let mut app = RulerApp::default();
    let pos = egui::pos2(300.0, 45.0);

    // Drive multiple frames on the same egui Context so interaction state
    // persists: hover, press, then move.
    let ctx = egui::Context::default();
    let mut all_commands = Vec::new();

    let frames: Vec<Vec<egui::Event>> = vec![
        vec![egui::Event::PointerMoved(pos)],
        vec![egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }],
        vec![egui::Event::PointerMoved(pos + egui::vec2(30.0, 0.0))],
    ];

    for events in frames {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(700.0, 90.0),
        ));
        raw.events = events;
        let out = ctx.run(raw, |ctx| app.draw_face(ctx));
        all_commands.extend(root_commands(&out));
    }

    assert!(all_commands
        .iter()
        .any(|c| matches!(c, egui::ViewportCommand::StartDrag)));
}
