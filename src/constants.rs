//! Shared application-wide constants.
//! Centralizes tweakable values used across display metrics and UI rendering.

// Physical units
/// Millimetres per inch, used to convert reported DPI values to metric lengths.
pub const MM_PER_INCH: f64 = 25.4;
/// Total ruler length in millimetres (15 cm).
pub const RULER_LENGTH_MM: u32 = 150;
/// Assumed panel density (pixels per inch) when the system does not report
/// a physical screen size. Matches a 16-inch Liquid Retina XDR panel.
pub const FALLBACK_PPI: f64 = 254.0;
/// Nominal logical-point density: most platforms define one logical point
/// as 1/96 inch at scale factor 1.0.
pub const BASE_LOGICAL_DPI: f64 = 96.0;

// Window geometry (logical points)
/// Empty margin on each end of the ruler scale.
pub const MARGIN_PT: f32 = 20.0;
/// Thickness of the ruler window across its short axis.
pub const RULER_THICKNESS_PT: f32 = 90.0;
/// Distance from the window's labelled edge to the baseline the ticks rise from.
pub const BASELINE_INSET_PT: f32 = 28.0;
/// Initial offset of the window from the screen's top-left corner.
pub const EDGE_OFFSET_PT: f32 = 40.0;

// Tick rendering (logical points)
/// Height of a 1 mm tick.
pub const TICK_MINOR_PT: f32 = 10.0;
/// Height of a 5 mm tick.
pub const TICK_MEDIAN_PT: f32 = 18.0;
/// Height of a 10 mm (centimetre) tick.
pub const TICK_MAJOR_PT: f32 = 28.0;
/// Stroke width for the baseline and tick marks.
pub const TICK_STROKE_PT: f32 = 1.0;
/// Gap between the baseline and the centimetre labels.
pub const LABEL_GAP_PT: f32 = 4.0;
/// Font size for centimetre labels.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Font size for the estimated-density advisory note.
pub const NOTE_FONT_SIZE: f32 = 11.0;
