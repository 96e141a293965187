// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the active session (frame buffer, texture, drag state
//! and, for video, the stream source and playback toggle), applies canvas
//! actions to the drag state machine, and coordinates with the resolver
//! thread over channels: one resolver event opens a session, one
//! acknowledgement ends it.

use crate::io::media::Frame;
use crate::io::video::{self, Advance, FrameSource};
use crate::models::session::{DragState, PlaybackToggle};
use crate::resolver::ResolverEvent;
use crate::ui::{canvas, timeline};
use crate::util::overlay;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

/// Window title while no session is active.
const APP_TITLE: &str = "boxmark";

/// Repaint tick while a video session is active.
const VIDEO_TICK: Duration = Duration::from_millis(10);

/// Kind of media behind the active session.
enum Media {
    Image,
    Video {
        source: Box<dyn FrameSource>,
        toggle: PlaybackToggle,
    },
}

/// One display session: everything scoped from open to window close.
struct Session {
    title: String,
    frame: Frame,
    texture: egui::TextureHandle,
    drag: DragState,
    media: Media,
}

/// Main application state.
pub struct BoxmarkApp {
    /// Sessions handed over by the resolver thread
    events: Receiver<ResolverEvent>,

    /// Acknowledges a session's end so the resolver prompts again
    session_done: Sender<()>,

    /// Currently active session, if any
    session: Option<Session>,
}

impl BoxmarkApp {
    /// Create a new boxmark application instance.
    pub fn new(events: Receiver<ResolverEvent>, session_done: Sender<()>) -> Self {
        Self {
            events,
            session_done,
            session: None,
        }
    }

    /// Open a session for a decoded frame, retitling the window.
    fn start_session(&mut self, ctx: &egui::Context, title: String, frame: Frame, media: Media) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
        let texture =
            ctx.load_texture("session_frame", color_image(&frame), egui::TextureOptions::LINEAR);
        log::info!("Session started: {} ({}x{})", title, frame.width, frame.height);
        self.session = Some(Session {
            title,
            frame,
            texture,
            drag: DragState::Idle,
            media,
        });
    }

    /// Tear down the active session and acknowledge the resolver.
    fn end_session(&mut self, ctx: &egui::Context) {
        if let Some(session) = self.session.take() {
            log::info!("Session ended: {}", session.title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(APP_TITLE.to_owned()));
            let _ = self.session_done.send(());
        }
    }

    /// Handle a media hand-off from the resolver.
    fn handle_event(&mut self, ctx: &egui::Context, event: ResolverEvent) {
        match event {
            ResolverEvent::OpenImage { title, frame } => {
                self.start_session(ctx, title, frame, Media::Image);
            }
            ResolverEvent::OpenVideo { title, mut source } => {
                // Decode the first frame up front so the session always has
                // something to present.
                match source.next_frame() {
                    Ok(Some(frame)) => {
                        let media = Media::Video {
                            source,
                            toggle: PlaybackToggle::new(),
                        };
                        self.start_session(ctx, title, frame, media);
                    }
                    Ok(None) => {
                        log::warn!("Video stream {title} has no frames");
                        let _ = self.session_done.send(());
                    }
                    Err(e) => {
                        log::error!("Failed to decode first frame of {title}: {e:#}");
                        let _ = self.session_done.send(());
                    }
                }
            }
            ResolverEvent::Quit => {
                self.session = None;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Advance a video session by one tick. Returns true when the stream
    /// ended and the session should close.
    fn advance_video(&mut self, ctx: &egui::Context) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        let Media::Video { source, toggle } = &mut session.media else {
            return false;
        };

        let ended = match video::advance(source.as_mut(), toggle) {
            Ok(Advance::Frame(frame)) => {
                session
                    .texture
                    .set(color_image(&frame), egui::TextureOptions::LINEAR);
                session.frame = frame;
                false
            }
            Ok(Advance::Paused) => false,
            Ok(Advance::Ended) => {
                log::info!("End of stream: {}", session.title);
                true
            }
            Err(e) => {
                log::warn!("Frame decode failed, ending session: {e:#}");
                true
            }
        };

        // The short poll doubles as the scheduling tick.
        ctx.request_repaint_after(VIDEO_TICK);
        ended
    }

    /// Apply a canvas action to the drag state machine, baking the
    /// rectangle into the frame when the drag commits.
    fn apply_canvas_action(&mut self, action: canvas::CanvasAction) {
        let Some(session) = &mut self.session else {
            return;
        };

        match action {
            canvas::CanvasAction::DragStarted(x, y) => {
                session.drag.pointer_down(x, y);
                log::info!("Drag started at ({x}, {y})");
            }
            canvas::CanvasAction::DragMoved(x, y) => {
                session.drag.pointer_moved(x, y);
            }
            canvas::CanvasAction::DragFinished => {
                if let Some(rect) = session.drag.pointer_up() {
                    overlay::draw_rect(
                        &mut session.frame.pixels,
                        session.frame.width,
                        session.frame.height,
                        &rect,
                        overlay::OVERLAY_COLOR,
                    );
                    session
                        .texture
                        .set(color_image(&session.frame), egui::TextureOptions::LINEAR);
                    log::info!(
                        "Committed rectangle ({}, {}, {}, {})",
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height
                    );
                }
            }
            canvas::CanvasAction::None => {}
        }
    }
}

impl eframe::App for BoxmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a session hand-off or shutdown from the resolver
        if let Ok(event) = self.events.try_recv() {
            self.handle_event(ctx, event);
        }

        // Escape ends the current session; the resolver prompts again
        if self.session.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.end_session(ctx);
        }

        // Advance video playback
        if self.advance_video(ctx) {
            self.end_session(ctx);
        }

        // Playback switch (bottom panel), video sessions only
        if let Some(session) = &mut self.session {
            if let Media::Video { toggle, .. } = &mut session.media {
                let notification = egui::TopBottomPanel::bottom("timeline")
                    .show(ctx, |ui| timeline::show(ui, toggle))
                    .inner;
                if let Some(message) = notification {
                    // Stdout is the user-facing channel for toggle reports
                    println!("{message}");
                    log::info!("Playback switch: {message}");
                }
            }
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let session = self.session.as_ref();
                canvas::show(
                    ui,
                    session.map(|s| &s.texture),
                    session.map(|s| (s.frame.width, s.frame.height)),
                    session.and_then(|s| s.drag.active_rect()),
                    session.map(|s| s.title.as_str()),
                )
            })
            .inner;

        self.apply_canvas_action(canvas_action);
    }
}

/// Build an egui color image from an RGBA frame.
fn color_image(frame: &Frame) -> egui::ColorImage {
    let size = [frame.width as usize, frame.height as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, &frame.pixels)
}
