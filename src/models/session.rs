// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-session interaction state.
//!
//! This module defines the drag-gesture state machine and the playback
//! toggle. Both are plain values owned by the active session, so the
//! transitions can be tested without a display.

use super::rect::Rect;

/// State of the rectangle drag gesture.
///
/// Transitions:
/// - `Idle` -> `Dragging` on primary-button-down: origin recorded at the
///   pointer, zero extents.
/// - `Dragging` -> `Dragging` on pointer-move: extents recomputed as the
///   signed offset from the origin.
/// - `Dragging` -> `Idle` on primary-button-up: the rectangle is
///   normalized and committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { rect: Rect },
}

impl DragState {
    /// Begin a drag at the given pixel position.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        *self = DragState::Dragging {
            rect: Rect::new(x, y, 0, 0),
        };
    }

    /// Resize the in-progress rectangle toward the given pixel position.
    /// Ignored while idle.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        if let DragState::Dragging { rect } = self {
            rect.width = x - rect.x;
            rect.height = y - rect.y;
        }
    }

    /// End the drag and return the committed (normalized) rectangle.
    /// Returns `None` if no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<Rect> {
        match *self {
            DragState::Dragging { rect } => {
                *self = DragState::Idle;
                Some(rect.normalized())
            }
            DragState::Idle => None,
        }
    }

    /// The in-progress rectangle, if a drag is active.
    pub fn active_rect(&self) -> Option<Rect> {
        match *self {
            DragState::Dragging { rect } => Some(rect),
            DragState::Idle => None,
        }
    }
}

/// Play/pause toggle for a video session, mirroring a 0..=1 trackbar.
///
/// Position 1 means playing, 0 means paused. Notifications are
/// edge-triggered: `set` reports "Run" or "Pause" only when the position
/// actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackToggle {
    position: i32,
}

impl Default for PlaybackToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackToggle {
    /// A new toggle starts in the playing position.
    pub fn new() -> Self {
        Self { position: 1 }
    }

    /// Current trackbar position.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Whether frames should advance.
    pub fn is_playing(&self) -> bool {
        self.position != 0
    }

    /// Move the toggle. Returns the notification to report ("Run" or
    /// "Pause") when the position changed, `None` when it did not.
    pub fn set(&mut self, position: i32) -> Option<&'static str> {
        if position == self.position {
            return None;
        }
        self.position = position;
        if self.position == 0 {
            Some("Pause")
        } else {
            Some("Run")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_commit_normalizes_origin_and_extents() {
        // Drag down-right: origin stays at the down position.
        let mut drag = DragState::Idle;
        drag.pointer_down(10, 10);
        drag.pointer_moved(50, 40);
        assert_eq!(drag.pointer_up(), Some(Rect::new(10, 10, 40, 30)));
        assert_eq!(drag, DragState::Idle);

        // Drag up-left: origin shifts to the pointer-up corner.
        let mut drag = DragState::Idle;
        drag.pointer_down(50, 40);
        drag.pointer_moved(10, 10);
        assert_eq!(drag.pointer_up(), Some(Rect::new(10, 10, 40, 30)));
    }

    #[test]
    fn test_drag_extents_are_signed_while_in_progress() {
        let mut drag = DragState::Idle;
        drag.pointer_down(50, 40);
        drag.pointer_moved(10, 10);
        assert_eq!(drag.active_rect(), Some(Rect::new(50, 40, -40, -30)));
    }

    #[test]
    fn test_drag_last_move_wins() {
        let mut drag = DragState::Idle;
        drag.pointer_down(0, 0);
        drag.pointer_moved(100, 100);
        drag.pointer_moved(20, 30);
        assert_eq!(drag.pointer_up(), Some(Rect::new(0, 0, 20, 30)));
    }

    #[test]
    fn test_moves_while_idle_are_ignored() {
        let mut drag = DragState::Idle;
        drag.pointer_moved(25, 25);
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.active_rect(), None);
        assert_eq!(drag.pointer_up(), None);
    }

    #[test]
    fn test_zero_area_drag_commits_empty_rect() {
        let mut drag = DragState::Idle;
        drag.pointer_down(7, 9);
        assert_eq!(drag.pointer_up(), Some(Rect::new(7, 9, 0, 0)));
    }

    #[test]
    fn test_toggle_starts_playing() {
        let toggle = PlaybackToggle::new();
        assert!(toggle.is_playing());
        assert_eq!(toggle.position(), 1);
    }

    #[test]
    fn test_toggle_reports_each_change_once() {
        let mut toggle = PlaybackToggle::new();
        assert_eq!(toggle.set(0), Some("Pause"));
        assert!(!toggle.is_playing());
        // Repeating the same position does not re-emit.
        assert_eq!(toggle.set(0), None);
        assert_eq!(toggle.set(1), Some("Run"));
        assert_eq!(toggle.set(1), None);
        assert!(toggle.is_playing());
    }
}
