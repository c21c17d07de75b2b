//! Caller-side event list.
//! Holds the authoritative events a host feeds to the layout engine and
//! merges rescheduled events back in after a drag.

use chrono::NaiveDate;

use crate::models::event::Event;

/// Color given to a rescheduled event that arrives without one.
pub const TRANSPARENT_COLOR: &str = "transparent";

/// In-memory store of the events shown by a timetable.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events starting on `date`, in stored order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.day() == date)
            .cloned()
            .collect()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the stored event with the same id.
    ///
    /// A missing color becomes [`TRANSPARENT_COLOR`]. Returns `false` when no
    /// stored event has that id.
    pub fn apply_change(&mut self, mut updated: Event) -> bool {
        let Some(slot) = self.events.iter_mut().find(|event| event.id == updated.id) else {
            log::warn!("Ignoring change for unknown event '{}'", updated.id);
            return false;
        };

        if updated.color.is_none() {
            updated.color = Some(TRANSPARENT_COLOR.to_string());
        }
        log::debug!(
            "Event '{}' rescheduled to {} - {}",
            updated.id,
            updated.start.format("%H:%M"),
            updated.end.format("%H:%M")
        );
        *slot = updated;
        true
    }
}
