//! Display metrics and physical-to-pixel conversion.
//!
//! The whole application hinges on one conversion: a fixed physical length
//! (150 mm) into an on-screen length. This module detects how many pixels
//! the primary display packs into a millimetre and how many pixels make up
//! one logical point, and derives the ruler's window length from them.

use crate::constants::{BASE_LOGICAL_DPI, MM_PER_INCH, RULER_LENGTH_MM};
#[cfg(target_os = "macos")]
use crate::constants::FALLBACK_PPI;

/// Pixel density of the display the ruler is shown on.
///
/// `pixels_per_mm` is the physical density; `pixels_per_point` is the
/// backing scale factor the windowing system applies to logical points.
/// Window geometry is expressed in logical points, so the length of the
/// ruler scale on screen is `RULER_LENGTH_MM * pixels_per_mm / pixels_per_point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Physical pixels per millimetre of screen.
    pub pixels_per_mm: f64,
    /// Physical pixels per logical point (backing scale factor).
    pub pixels_per_point: f64,
    /// True when the density was assumed rather than reported by the system.
    pub estimated: bool,
}

impl ScreenMetrics {
    /// Metrics from a reported physical density and scale factor.
    pub fn new(pixels_per_mm: f64, pixels_per_point: f64) -> Self {
        Self {
            pixels_per_mm,
            pixels_per_point,
            estimated: false,
        }
    }

    /// Estimates metrics from the backing scale factor alone.
    ///
    /// Logical points are nominally 1/96 inch, so a display at scale `s`
    /// is assumed to pack `96 * s` pixels per inch. Used on platforms that
    /// do not report a physical screen size.
    pub fn from_scale_factor(scale: f64) -> Self {
        Self {
            pixels_per_mm: BASE_LOGICAL_DPI * scale / MM_PER_INCH,
            pixels_per_point: scale,
            estimated: true,
        }
    }

    /// Logical points per millimetre.
    pub fn points_per_mm(&self) -> f64 {
        self.pixels_per_mm / self.pixels_per_point
    }

    /// Physical pixels per centimetre.
    pub fn pixels_per_cm(&self) -> f64 {
        self.pixels_per_mm * 10.0
    }

    /// Length of the full 150 mm scale in logical points.
    pub fn ruler_length_points(&self) -> f32 {
        (RULER_LENGTH_MM as f64 * self.points_per_mm()) as f32
    }

    /// Length of the full 150 mm scale in physical pixels.
    pub fn ruler_length_pixels(&self) -> f64 {
        RULER_LENGTH_MM as f64 * self.pixels_per_mm
    }
}

/// Detects metrics for the primary display.
///
/// On macOS the display's physical millimetre size and current-mode pixel
/// width are queried through CoreGraphics; elsewhere (and when the system
/// reports no physical size) the metrics are estimated from the scale
/// factor, falling back to `scale_hint` when the caller already knows it.
#[cfg(target_os = "macos")]
pub fn detect(scale_hint: Option<f64>) -> ScreenMetrics {
    use core_graphics::display::CGDisplay;

    let display = CGDisplay::main();
    let bounds = display.bounds();
    let size_mm = display.screen_size();
    let pixel_width = display
        .display_mode()
        .map(|mode| mode.pixel_width() as f64)
        .unwrap_or(0.0);

    let pixels_per_point = if pixel_width > 0.0 && bounds.size.width > 0.0 {
        pixel_width / bounds.size.width
    } else {
        // Retina displays default to 2x when the mode cannot be read.
        scale_hint.unwrap_or(2.0)
    };

    if size_mm.width > 0.0 && pixel_width > 0.0 {
        let metrics = ScreenMetrics::new(pixel_width / size_mm.width, pixels_per_point);
        log::info!(
            "display: {:.0} px across {:.0} mm ({:.2} px/mm, {:.1}x scale)",
            pixel_width,
            size_mm.width,
            metrics.pixels_per_mm,
            metrics.pixels_per_point,
        );
        metrics
    } else {
        log::warn!(
            "display did not report a physical size; assuming {FALLBACK_PPI} ppi"
        );
        ScreenMetrics {
            pixels_per_mm: FALLBACK_PPI / MM_PER_INCH,
            pixels_per_point,
            estimated: true,
        }
    }
}

/// Detects metrics for the primary display.
///
/// Non-macOS platforms report no physical screen size through the stack
/// this application uses, so the metrics are always estimated from the
/// scale factor (1.0 until the window reports one).
#[cfg(not(target_os = "macos"))]
pub fn detect(scale_hint: Option<f64>) -> ScreenMetrics {
    let scale = scale_hint.unwrap_or(1.0);
    log::info!("estimating display density from scale factor {scale:.1}");
    ScreenMetrics::from_scale_factor(scale)
}
