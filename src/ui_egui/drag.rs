use egui::{Context, Key, Response};

use crate::models::event::Event;
use crate::models::layout::LayoutResult;
use crate::services::drag::{DragSession, EventChangeSink};

/// What a gesture frame did to the event under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    Idle,
    Preview { top: f32 },
    Changed(Event),
    Cancelled { top: f32 },
}

/// Feeds egui pointer interaction on an event rectangle into a [`DragSession`].
///
/// egui reports movement per frame; the session wants the total displacement
/// since the press, so the adapter keeps the running sum.
#[derive(Clone, Debug, Default)]
pub struct GestureAdapter {
    accumulated_y: f32,
}

impl GestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated_y(&self) -> f32 {
        self.accumulated_y
    }

    pub fn handle<S>(
        &mut self,
        ctx: &Context,
        response: &Response,
        event: &Event,
        layout: &LayoutResult,
        session: &mut DragSession,
        sink: &mut S,
    ) -> GestureOutcome
    where
        S: EventChangeSink + ?Sized,
    {
        if response.drag_started() {
            self.accumulated_y = 0.0;
            if let Err(err) = session.begin(event, layout) {
                log::warn!("Could not start dragging '{}': {}", event.id, err);
                return GestureOutcome::Idle;
            }
        }

        if session.active_event_id() != Some(event.id.as_str()) {
            return GestureOutcome::Idle;
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return self.cancel(session);
        }

        if response.drag_stopped() {
            self.accumulated_y += response.drag_delta().y;
            let delta = std::mem::take(&mut self.accumulated_y);
            return match session.release(delta, sink) {
                Some(updated) => GestureOutcome::Changed(updated),
                None => GestureOutcome::Idle,
            };
        }

        if response.dragged() {
            self.accumulated_y += response.drag_delta().y;
            return match session.update(self.accumulated_y) {
                Some(top) => GestureOutcome::Preview { top },
                None => GestureOutcome::Idle,
            };
        }

        // The pointer went away without a release
        self.cancel(session)
    }

    fn cancel(&mut self, session: &mut DragSession) -> GestureOutcome {
        self.accumulated_y = 0.0;
        match session.cancel() {
            Some(top) => GestureOutcome::Cancelled { top },
            None => GestureOutcome::Idle,
        }
    }
}
