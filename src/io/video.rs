// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video stream decoding.
//!
//! The session loop talks to a `FrameSource` trait object so the playback
//! logic stays independent of any particular codec library. The concrete
//! OpenCV-backed source is gated behind the `video-opencv` feature; without
//! it every video open fails and the resolver reports the file as
//! unsupported.

use super::media::Frame;
use crate::models::session::PlaybackToggle;
use anyhow::Result;
use std::path::Path;

/// Abstracts video decoding so the session loop can advance through any
/// stream without depending on a specific codec library.
pub trait FrameSource: Send {
    /// Decode the next frame. `Ok(None)` signals end-of-stream, which is
    /// normal loop termination rather than an error.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Outcome of one video-session tick.
pub enum Advance {
    /// A new frame was decoded and should be presented.
    Frame(Frame),
    /// The toggle is in the paused position; nothing was consumed.
    Paused,
    /// The stream is exhausted; the session should end.
    Ended,
}

/// Advance the stream by one frame if the playback toggle allows it.
pub fn advance(source: &mut dyn FrameSource, toggle: &PlaybackToggle) -> Result<Advance> {
    if !toggle.is_playing() {
        return Ok(Advance::Paused);
    }
    match source.next_frame()? {
        Some(frame) => Ok(Advance::Frame(frame)),
        None => Ok(Advance::Ended),
    }
}

/// Open a video stream for the given path.
#[cfg(feature = "video-opencv")]
pub fn open(path: &Path) -> Result<Box<dyn FrameSource>> {
    Ok(Box::new(opencv_source::OpenCvSource::open(path)?))
}

/// Open a video stream for the given path.
///
/// Without a video backend compiled in this always fails, so the resolver
/// reports video files as unsupported.
#[cfg(not(feature = "video-opencv"))]
pub fn open(path: &Path) -> Result<Box<dyn FrameSource>> {
    anyhow::bail!(
        "No video backend compiled in (enable the video-opencv feature): {}",
        path.display()
    )
}

#[cfg(feature = "video-opencv")]
mod opencv_source {
    use super::{Frame, FrameSource};
    use anyhow::{Context, Result};
    use opencv::{core::Mat, imgproc, prelude::*, videoio};
    use std::path::Path;

    /// Video stream backed by `cv::VideoCapture`.
    pub struct OpenCvSource {
        cap: videoio::VideoCapture,
    }

    impl OpenCvSource {
        pub fn open(path: &Path) -> Result<Self> {
            let path_str = path
                .to_str()
                .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
            let cap = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
            if !cap.is_opened()? {
                anyhow::bail!("Failed to open video stream: {}", path.display());
            }
            Ok(Self { cap })
        }
    }

    impl FrameSource for OpenCvSource {
        fn next_frame(&mut self) -> Result<Option<Frame>> {
            let mut bgr = Mat::default();
            if !self.cap.read(&mut bgr)? || bgr.size()?.width == 0 {
                return Ok(None);
            }

            // egui textures want RGBA; VideoCapture decodes to BGR.
            let mut rgba = Mat::default();
            imgproc::cvt_color(&bgr, &mut rgba, imgproc::COLOR_BGR2RGBA, 0)?;

            Ok(Some(Frame {
                width: rgba.cols() as u32,
                height: rgba.rows() as u32,
                pixels: rgba.data_bytes()?.to_vec(),
            }))
        }
    }
}
