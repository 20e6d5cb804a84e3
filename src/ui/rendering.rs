//! Ruler face rendering.
//!
//! This module handles all drawing operations: the baseline along the
//! scale, one tick per millimetre rising from it, centimetre labels, and
//! the advisory note shown when the pixel density is an estimate.

use super::state::{Orientation, RulerApp};
use crate::constants::*;
use crate::ticks::{self, TickKind};
use eframe::egui;

/// Tick height in logical points for a given visual weight.
fn tick_height(kind: TickKind) -> f32 {
    match kind {
        TickKind::Minor => TICK_MINOR_PT,
        TickKind::Median => TICK_MEDIAN_PT,
        TickKind::Major => TICK_MAJOR_PT,
    }
}

impl RulerApp {
    /// Renders the ruler face into `rect`.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `rect` - The screen-space rectangle of the window content
    pub fn draw_ruler(&self, painter: &egui::Painter, rect: egui::Rect) {
        match self.orientation {
            Orientation::Horizontal => self.draw_horizontal(painter, rect),
            Orientation::Vertical => self.draw_vertical(painter, rect),
        }
        if self.metrics.estimated {
            self.draw_estimate_note(painter, rect);
        }
    }

    /// Draws the scale along the bottom edge: baseline with ticks rising
    /// from it, labels in the strip between baseline and window edge.
    fn draw_horizontal(&self, painter: &egui::Painter, rect: egui::Rect) {
        let points_per_mm = self.metrics.points_per_mm();
        let stroke = egui::Stroke::new(TICK_STROKE_PT, egui::Color32::BLACK);
        let font = egui::FontId::proportional(LABEL_FONT_SIZE);

        let x0 = rect.left() + MARGIN_PT;
        let x1 = x0 + self.metrics.ruler_length_points();
        let y0 = rect.bottom() - BASELINE_INSET_PT;

        painter.line_segment([egui::pos2(x0, y0), egui::pos2(x1, y0)], stroke);

        for tick in ticks::scale_ticks() {
            let x = x0 + tick.offset_points(points_per_mm);
            let height = tick_height(tick.kind);
            painter.line_segment([egui::pos2(x, y0), egui::pos2(x, y0 - height)], stroke);

            if let Some(cm) = tick.label() {
                painter.text(
                    egui::pos2(x, y0 + LABEL_GAP_PT),
                    egui::Align2::CENTER_TOP,
                    cm.to_string(),
                    font.clone(),
                    egui::Color32::BLACK,
                );
            }
        }
    }

    /// Draws the scale along the left edge, origin at the top. Labels sit
    /// left of the baseline, ticks extend to the right.
    fn draw_vertical(&self, painter: &egui::Painter, rect: egui::Rect) {
        let points_per_mm = self.metrics.points_per_mm();
        let stroke = egui::Stroke::new(TICK_STROKE_PT, egui::Color32::BLACK);
        let font = egui::FontId::proportional(LABEL_FONT_SIZE);

        let y0 = rect.top() + MARGIN_PT;
        let y1 = y0 + self.metrics.ruler_length_points();
        let x0 = rect.left() + BASELINE_INSET_PT;

        painter.line_segment([egui::pos2(x0, y0), egui::pos2(x0, y1)], stroke);

        for tick in ticks::scale_ticks() {
            let y = y0 + tick.offset_points(points_per_mm);
            let height = tick_height(tick.kind);
            painter.line_segment([egui::pos2(x0, y), egui::pos2(x0 + height, y)], stroke);

            if let Some(cm) = tick.label() {
                painter.text(
                    egui::pos2(x0 - LABEL_GAP_PT, y),
                    egui::Align2::RIGHT_CENTER,
                    cm.to_string(),
                    font.clone(),
                    egui::Color32::BLACK,
                );
            }
        }
    }

    /// Grey advisory note shown when the density was assumed rather than
    /// reported, so measurements are known to be approximate.
    fn draw_estimate_note(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.text(
            rect.min + egui::vec2(MARGIN_PT, LABEL_GAP_PT),
            egui::Align2::LEFT_TOP,
            "Note: assumed pixel density; markings may be approximate.",
            egui::FontId::proportional(NOTE_FONT_SIZE),
            egui::Color32::from_gray(120),
        );
    }
}
