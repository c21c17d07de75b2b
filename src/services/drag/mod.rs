//! Drag-to-reschedule session.
//!
//! A gesture on one event moves through `Idle -> Dragging -> Idle`. While
//! dragging, every pointer sample yields a preview top snapped to whole move
//! steps; releasing produces a copy of the event shifted by the same number of
//! steps. Nothing here touches the caller's event list.

use thiserror::Error;

use crate::models::event::Event;
use crate::models::layout::LayoutResult;
use crate::models::settings::Settings;

pub const DEFAULT_MOVE_STEP_MINUTES: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("event `{active}` is already being dragged")]
    AlreadyDragging { active: String },
    #[error("event `{0}` was not part of the last layout pass")]
    NotLaidOut(String),
}

/// The gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Event as it was when the gesture started
    pub event: Event,
    pub origin_top: f32,
    /// Last snapped offset from `origin_top`
    pub live_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Receives the rescheduled event once per completed drag.
#[cfg_attr(test, mockall::automock)]
pub trait EventChangeSink {
    fn on_event_change(&mut self, updated: &Event);
}

impl<F> EventChangeSink for F
where
    F: FnMut(&Event),
{
    fn on_event_change(&mut self, updated: &Event) {
        self(updated)
    }
}

#[derive(Debug, Clone)]
pub struct DragSession {
    state: DragState,
    move_step_minutes: u32,
    hour_height: f32,
}

impl DragSession {
    pub fn new(move_step_minutes: u32, hour_height: f32) -> Self {
        Self {
            state: DragState::Idle,
            move_step_minutes,
            hour_height,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.move_step_minutes, settings.hour_height)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active_event_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging(active) => Some(active.event.id.as_str()),
            DragState::Idle => None,
        }
    }

    pub fn move_step_minutes(&self) -> u32 {
        self.move_step_minutes
    }

    /// Pixel height of one move step.
    pub fn step_height(&self) -> f32 {
        self.move_step_minutes as f32 / 60.0 * self.hour_height
    }

    /// Whole steps nearest to `delta_y`, rounding halves away from zero.
    pub fn snap_steps(&self, delta_y: f32) -> i64 {
        let step = self.step_height();
        if !delta_y.is_finite() || !(step.is_finite() && step > 0.0) {
            return 0;
        }
        (delta_y / step).round() as i64
    }

    /// Start dragging `event`, anchored at its top from `layout`.
    ///
    /// Returns the origin top.
    pub fn begin(&mut self, event: &Event, layout: &LayoutResult) -> Result<f32, DragError> {
        if let DragState::Dragging(active) = &self.state {
            return Err(DragError::AlreadyDragging {
                active: active.event.id.clone(),
            });
        }

        let origin_top = layout
            .get(&event.id)
            .map(|positioned| positioned.top)
            .ok_or_else(|| DragError::NotLaidOut(event.id.clone()))?;

        log::debug!("Drag started on '{}' at top {}", event.id, origin_top);
        self.state = DragState::Dragging(ActiveDrag {
            event: event.clone(),
            origin_top,
            live_offset: 0.0,
        });
        Ok(origin_top)
    }

    /// Snapped preview top for a pointer `delta_y` pixels from the press.
    ///
    /// `None` when no drag is in progress.
    pub fn update(&mut self, delta_y: f32) -> Option<f32> {
        let offset = self.snap_steps(delta_y) as f32 * self.step_height();
        match &mut self.state {
            DragState::Dragging(active) => {
                active.live_offset = offset;
                Some(active.origin_top + offset)
            }
            DragState::Idle => {
                log::trace!("Ignoring drag update without an active drag");
                None
            }
        }
    }

    pub fn preview_top(&self) -> Option<f32> {
        match &self.state {
            DragState::Dragging(active) => Some(active.origin_top + active.live_offset),
            DragState::Idle => None,
        }
    }

    /// Finish the drag and return the shifted event.
    ///
    /// `None` when no drag is in progress. A displacement too large to
    /// express as a date ends the drag without a change, like [`cancel`](Self::cancel).
    pub fn end(&mut self, delta_y: f32) -> Option<Event> {
        let steps = self.snap_steps(delta_y);
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            log::trace!("Ignoring drag end without an active drag");
            return None;
        };

        let shifted = steps
            .checked_mul(self.move_step_minutes as i64)
            .and_then(|minutes| Some((minutes, active.event.shifted_by_minutes(minutes)?)));
        match shifted {
            Some((minutes, updated)) => {
                log::debug!("Drag on '{}' ended, moving {} minutes", active.event.id, minutes);
                Some(updated)
            }
            None => {
                log::warn!(
                    "Drag on '{}' moved {} steps, out of the representable range; discarding",
                    active.event.id,
                    steps
                );
                None
            }
        }
    }

    /// [`end`](Self::end), then hand the result to `sink`.
    pub fn release<S>(&mut self, delta_y: f32, sink: &mut S) -> Option<Event>
    where
        S: EventChangeSink + ?Sized,
    {
        let updated = self.end(delta_y)?;
        sink.on_event_change(&updated);
        Some(updated)
    }

    /// Abandon the drag without producing a change.
    ///
    /// Returns the origin top the preview should snap back to.
    pub fn cancel(&mut self) -> Option<f32> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(active) => {
                log::debug!("Drag on '{}' cancelled", active.event.id);
                Some(active.origin_top)
            }
            DragState::Idle => None,
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_STEP_MINUTES, Settings::default().hour_height)
    }
}
