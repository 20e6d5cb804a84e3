//! Application state structures.
//!
//! The ruler has one piece of mutable state beyond its metrics: which way
//! it lies on the screen. Everything else is computed per frame.

use crate::constants::{MARGIN_PT, RULER_THICKNESS_PT};
use crate::metrics::ScreenMetrics;
use eframe::egui;

/// Which way the ruler lies on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Scale runs left to right; the window is wide and short.
    Horizontal,
    /// Scale runs top to bottom; the window is narrow and tall.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// The main application structure: the ruler window and its state.
///
/// Implements `eframe::App`; all rendering and interaction logic lives in
/// the sibling modules.
pub struct RulerApp {
    /// Metrics of the display the ruler is currently shown on.
    pub metrics: ScreenMetrics,
    /// Current orientation of the ruler window.
    pub orientation: Orientation,
    /// Scale factor the current metrics were detected against. `None`
    /// until the window has reported one.
    pub applied_scale_factor: Option<f32>,
    /// Set when the window must be resized to match metrics or
    /// orientation on the next frame.
    pub pending_resize: bool,
}

impl RulerApp {
    /// Creates the app for a display with the given metrics.
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            metrics,
            orientation: Orientation::Horizontal,
            applied_scale_factor: None,
            pending_resize: false,
        }
    }

    /// Window size in logical points for the current metrics and
    /// orientation: the 150 mm scale plus a margin on each end along the
    /// long axis, fixed thickness across the short axis.
    pub fn window_size(&self) -> egui::Vec2 {
        let length = 2.0 * MARGIN_PT + self.metrics.ruler_length_points();
        match self.orientation {
            Orientation::Horizontal => egui::vec2(length, RULER_THICKNESS_PT),
            Orientation::Vertical => egui::vec2(RULER_THICKNESS_PT, length),
        }
    }
}

impl Default for RulerApp {
    fn default() -> Self {
        Self::new(ScreenMetrics::from_scale_factor(1.0))
    }
}
