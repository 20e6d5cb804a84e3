//! # Screen Ruler
//!
//! A 15 cm on-screen ruler for laptop displays. The window length is
//! derived from the primary display's physical pixel density, so the
//! markings stay physically accurate regardless of resolution or scale
//! factor.
//!
//! ## Features
//! - Millimetre ticks with half-centimetre and centimetre grading
//! - Borderless, always-on-top window, draggable anywhere on its face
//! - Automatic re-measuring when the display's scale factor changes
//! - Horizontal and vertical orientation

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod metrics;
mod ticks;
mod ui;

// Re-export the measurement core
pub use metrics::{detect, ScreenMetrics};
pub use ticks::{kind_for_mm, scale_ticks, Tick, TickKind};
use eframe::egui;
use ui::RulerApp;

/// Window title, shown in mission control and app switchers only (the
/// window itself is borderless).
pub const APP_TITLE: &str = "15 cm Ruler";

/// Runs the ruler application.
///
/// Detects the primary display's metrics, opens a borderless always-on-top
/// window sized to 15 cm, and blocks in the event loop until the window is
/// closed.
///
/// # Returns
///
/// Returns `Ok(())` once the window has been closed, or an `eframe::Error`
/// if the toolkit fails to start.
///
/// # Example
///
/// ```no_run
/// use screen_ruler::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let app = RulerApp::new(metrics::detect(None));
    let options = eframe::NativeOptions {
        viewport: viewport_builder(app.window_size()),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// Builds the viewport for the ruler window: borderless, non-resizable,
/// always on top, parked near the screen's top-left edge.
pub(crate) fn viewport_builder(size: egui::Vec2) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_position([constants::EDGE_OFFSET_PT, constants::EDGE_OFFSET_PT])
        .with_inner_size([size.x, size.y])
        .with_decorations(false)
        .with_resizable(false)
        .with_always_on_top()
}
