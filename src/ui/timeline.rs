// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video playback toggle control.
//!
//! This module renders the trackbar-style 0..=1 switch for pausing and
//! resuming video playback. The edge-triggered "Run"/"Pause" reporting
//! lives in `PlaybackToggle`; this is only the widget.

use crate::models::session::PlaybackToggle;

/// Display the playback switch. Returns the notification to report when
/// the position changed, `None` otherwise.
pub fn show(ui: &mut egui::Ui, toggle: &mut PlaybackToggle) -> Option<&'static str> {
    let mut position = toggle.position();

    ui.horizontal(|ui| {
        ui.label("Switch:");
        ui.add(egui::Slider::new(&mut position, 0..=1).show_value(false));
        let state_text = if position == 0 { "Paused" } else { "Playing" };
        ui.label(egui::RichText::new(state_text).italics().weak());
    });

    toggle.set(position)
}
