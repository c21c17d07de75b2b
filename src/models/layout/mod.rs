// Layout module
// Derived geometry produced by the overlap resolver

use serde::{Deserialize, Serialize};

use crate::services::layout::LayoutDiagnostic;

/// An event's span in minutes since midnight of its calendar day.
///
/// Always `start_minute < end_minute <= 1440`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    pub id: String,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl TimeInterval {
    /// Half-open overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, start_minute: u32, end_minute: u32) -> bool {
        self.start_minute < end_minute && self.end_minute > start_minute
    }

    pub fn overlaps_interval(&self, other: &TimeInterval) -> bool {
        self.overlaps(other.start_minute, other.end_minute)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

/// One `slot_duration` division of the visible window, used for concurrency counting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlot {
    pub start_minute: u32,
    pub end_minute: u32,
    pub top_pixel: f32,
}

/// A laid-out rectangle for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub id: String,
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
    /// Lane index within the event's column grid
    pub column: usize,
    /// Number of lanes the event's width was divided by
    pub columns: usize,
}

impl PositionedEvent {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Whether the horizontal spans `[left, right)` intersect.
    pub fn shares_horizontal_span(&self, other: &PositionedEvent) -> bool {
        self.left < other.right() && other.left < self.right()
    }
}

/// Outcome of one layout pass: the rectangles for every accepted event plus
/// a warning for every event that was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub events: Vec<PositionedEvent>,
    pub diagnostics: Vec<LayoutDiagnostic>,
    /// Widest lane count used by the pass
    pub max_overlaps: usize,
}

impl LayoutResult {
    pub fn get(&self, id: &str) -> Option<&PositionedEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
