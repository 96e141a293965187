// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for frame display and rectangle dragging.
//!
//! This module provides the canvas area where the current frame is shown
//! letterboxed into the available space. Pointer drags are translated to
//! image pixel coordinates and reported back as actions; the in-progress
//! rectangle is stroked on top of the frame so the source pixels stay
//! untouched until the drag commits.

use crate::models::rect::Rect;
use crate::util::geometry;

/// Stroke color for the in-progress rectangle.
const DRAG_COLOR: egui::Color32 = egui::Color32::LIGHT_GREEN;

/// Result of canvas interaction, in image pixel coordinates.
pub enum CanvasAction {
    None,
    DragStarted(i32, i32),
    DragMoved(i32, i32),
    DragFinished,
}

/// Display the canvas area and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    active_rect: Option<Rect>,
    title: Option<&str>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    // Create a frame for the canvas
    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let (Some(texture), Some((img_width, img_height))) = (texture, image_size) {
            // Scale the frame to fit the available space, centered
            let available = ui.available_size();
            let (display_width, display_height) =
                geometry::fit_dimensions(img_width, img_height, available.x, available.y);
            let x_offset = (available.x - display_width) / 2.0;
            let y_offset = (available.y - display_height) / 2.0;

            let image_rect = egui::Rect::from_min_size(
                ui.min_rect().min + egui::vec2(x_offset, y_offset),
                egui::vec2(display_width, display_height),
            );

            // Draw the frame
            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            // Translate pointer drags into pixel-space actions
            let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());
            let pointer_pixel = response.interact_pointer_pos().map(|pos| {
                geometry::to_pixel_coords(
                    pos.x - image_rect.min.x,
                    pos.y - image_rect.min.y,
                    display_width,
                    display_height,
                    img_width,
                    img_height,
                )
            });

            if response.drag_started() {
                if let Some((px, py)) = pointer_pixel {
                    action = CanvasAction::DragStarted(px, py);
                }
            } else if response.drag_stopped() {
                action = CanvasAction::DragFinished;
            } else if response.dragged() {
                if let Some((px, py)) = pointer_pixel {
                    action = CanvasAction::DragMoved(px, py);
                }
            }

            // Stroke the in-progress rectangle on top of the frame
            if let Some(rect) = active_rect {
                let rect = rect.normalized();
                let (sx, sy) = geometry::to_screen_coords(
                    rect.x,
                    rect.y,
                    display_width,
                    display_height,
                    img_width,
                    img_height,
                );
                let (sw, sh) = geometry::to_screen_coords(
                    rect.width,
                    rect.height,
                    display_width,
                    display_height,
                    img_width,
                    img_height,
                );
                ui.painter().rect_stroke(
                    egui::Rect::from_min_size(
                        image_rect.min + egui::vec2(sx, sy),
                        egui::vec2(sw, sh),
                    ),
                    0.0,
                    egui::Stroke::new(2.0, DRAG_COLOR),
                );
            }
        } else {
            // Show welcome message when no session is active
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("BOXMARK")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.label(
                        egui::RichText::new("Rectangle overlay viewer for images and videos")
                            .size(14.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Enter a file path on standard input to begin")
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            });
        }
    });

    // Display session info at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        match title {
            Some(title) => {
                ui.label(title);
                ui.separator();
                ui.label("Drag to draw a box, Escape to close");
            }
            None => {
                ui.label("No file loaded");
            }
        }
    });

    action
}
