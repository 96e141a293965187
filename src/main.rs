// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! boxmark - interactive rectangle overlay viewer
//!
//! Reads image and video paths from standard input, displays each one in
//! a window, and lets the user drag rectangle overlays onto the frame.
//! Video sessions expose a trackbar-style play/pause switch.

mod app;
mod io;
mod models;
mod resolver;
mod ui;
mod util;

use anyhow::Result;
use app::BoxmarkApp;
use std::sync::mpsc::channel;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("boxmark"),
        ..Default::default()
    };

    // Resolver -> app session hand-offs, app -> resolver end-of-session acks
    let (event_tx, event_rx) = channel();
    let (done_tx, done_rx) = channel();

    // Run the application; the resolver thread reads stdin for the
    // process lifetime and ends the app when the input stream closes.
    eframe::run_native(
        "boxmark",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            std::thread::spawn(move || resolver::run(event_tx, done_rx, ctx));
            Ok(Box::new(BoxmarkApp::new(event_rx, done_tx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
