//! User interface for the ruler window.
//!
//! This module contains the main application struct, its `eframe::App`
//! implementation, keyboard handling, and window management.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main RulerApp
//! - `rendering` - Drawing the baseline, tick marks, and labels

mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::{Orientation, RulerApp};

use crate::metrics;
use eframe::egui;

impl eframe::App for RulerApp {
    /// Main update function called by egui for each frame.
    ///
    /// Keeps the metrics in sync with the display, processes keyboard
    /// shortcuts, and draws the ruler face.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_display_metrics(ctx);
        self.handle_close_keys(ctx);
        self.handle_orientation_key(ctx);
        self.apply_pending_resize(ctx);
        self.draw_face(ctx);
    }
}

impl RulerApp {
    /// Fills the window with the ruler face and forwards drags on it to
    /// the window manager.
    pub(super) fn draw_face(&mut self, ctx: &egui::Context) {
        let face = egui::Frame::NONE.fill(egui::Color32::WHITE);
        egui::CentralPanel::default().frame(face).show(ctx, |ui| {
            let rect = ui.max_rect();

            // The window has no titlebar; dragging anywhere on the face
            // moves it.
            let response = ui.interact(rect, egui::Id::new("ruler_face"), egui::Sense::drag());
            if response.drag_started() {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            self.draw_ruler(ui.painter(), rect);
        });
    }

    /// Re-detects display metrics when the reported scale factor differs
    /// from the one the current metrics were computed against.
    ///
    /// This covers both the first frame (the pre-launch estimate may not
    /// match the real backing scale) and the window being moved to a
    /// screen with different parameters.
    pub(super) fn sync_display_metrics(&mut self, ctx: &egui::Context) {
        let native = ctx.input(|i| i.viewport().native_pixels_per_point);
        let Some(scale) = native else {
            return;
        };
        if self.applied_scale_factor == Some(scale) {
            return;
        }
        self.metrics = metrics::detect(Some(scale as f64));
        self.applied_scale_factor = Some(scale);
        self.pending_resize = true;
    }

    /// Closes the window on Esc, or on Q with the platform command
    /// modifier (Cmd on macOS, Ctrl elsewhere).
    pub(super) fn handle_close_keys(&mut self, ctx: &egui::Context) {
        let close = ctx.input(|i| {
            i.key_pressed(egui::Key::Escape)
                || (i.key_pressed(egui::Key::Q) && (i.modifiers.command || i.modifiers.ctrl))
        });
        if close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Flips the ruler between horizontal and vertical on R.
    pub(super) fn handle_orientation_key(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.orientation = self.orientation.flipped();
            self.pending_resize = true;
        }
    }

    /// Resizes the window to match the current metrics and orientation,
    /// re-asserting the always-on-top level while at it (window levels can
    /// be dropped by the system across screen changes).
    pub(super) fn apply_pending_resize(&mut self, ctx: &egui::Context) {
        if !self.pending_resize {
            return;
        }
        self.pending_resize = false;
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(self.window_size()));
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
            egui::WindowLevel::AlwaysOnTop,
        ));
    }
}
