// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standard-input path resolver.
//!
//! Runs on a background thread: prompts on stdout, reads file paths from
//! stdin one per line, classifies each as a still image or a video stream,
//! and hands the decoded media to the GUI thread over a channel. After a
//! successful hand-off the resolver blocks until the session ends before
//! prompting again, so exactly one session is active at a time.
//!
//! An unsupported path is non-fatal: it is reported on stdout and the
//! resolver prompts again. An empty line or EOF requests shutdown.

use crate::io::media::{self, Frame};
use crate::io::video::{self, FrameSource};
use std::io::BufRead;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};

/// Media hand-off from the resolver thread to the GUI thread.
pub enum ResolverEvent {
    /// Open an image session for an already-decoded frame.
    OpenImage { title: String, frame: Frame },
    /// Open a video session for an already-opened stream.
    OpenVideo {
        title: String,
        source: Box<dyn FrameSource>,
    },
    /// Empty line or EOF on stdin: close the window and exit.
    Quit,
}

/// What a path turned out to be.
pub enum Classification {
    Image(Frame),
    Video(Box<dyn FrameSource>),
    Unsupported,
}

/// Classify a path by attempting a still-image decode first and falling
/// back to a video-stream open.
pub fn classify(path: &Path) -> Classification {
    match media::load_image(path) {
        Ok(frame) => Classification::Image(frame),
        Err(image_err) => {
            log::debug!("Not a still image ({image_err:#}), trying video");
            match video::open(path) {
                Ok(source) => Classification::Video(source),
                Err(video_err) => {
                    log::debug!("Not a video stream either ({video_err:#})");
                    Classification::Unsupported
                }
            }
        }
    }
}

/// Resolver loop. `events` feeds sessions to the app; `session_done`
/// delivers one message per ended session; `ctx` wakes the repaint loop
/// after each send.
pub fn run(events: Sender<ResolverEvent>, session_done: Receiver<()>, ctx: egui::Context) {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Please enter an image path to interact with");

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("Failed to read from stdin: {e}");
                break;
            }
            None => break, // EOF
        };

        let path_str = line.trim_end();
        if path_str.is_empty() {
            break;
        }

        let event = match classify(Path::new(path_str)) {
            Classification::Image(frame) => {
                log::info!("Resolved {path_str} as a still image ({}x{})", frame.width, frame.height);
                ResolverEvent::OpenImage {
                    title: path_str.to_string(),
                    frame,
                }
            }
            Classification::Video(source) => {
                log::info!("Resolved {path_str} as a video stream");
                ResolverEvent::OpenVideo {
                    title: path_str.to_string(),
                    source,
                }
            }
            Classification::Unsupported => {
                println!("The following file: {path_str} is not supported.");
                continue;
            }
        };

        if events.send(event).is_err() {
            return; // window already closed
        }
        ctx.request_repaint();

        // Block until the session ends (Escape or end-of-stream).
        if session_done.recv().is_err() {
            return;
        }
    }

    let _ = events.send(ResolverEvent::Quit);
    ctx.request_repaint();
}
