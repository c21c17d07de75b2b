// Event module
// Caller-owned timetable event

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

use crate::models::layout::TimeInterval;
use crate::utils::date::{minutes_between, MINUTES_PER_DAY};

/// Timetable event as supplied by the calling application.
///
/// The layout engine never mutates an `Event`; it only derives positioned
/// copies and, after a drag, a shifted clone.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Unique identifier (required, non-empty)
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Examples
    /// ```
    /// use rust_timetable::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("1", "Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar day the event belongs to (the day it starts on).
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Copy of this event moved by `minutes`, duration and other fields untouched.
    ///
    /// `None` when the shifted times fall outside the representable range.
    pub fn shifted_by_minutes(&self, minutes: i64) -> Option<Self> {
        let delta = Duration::try_minutes(minutes)?;
        Some(Self {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
            ..self.clone()
        })
    }

    /// Minutes-since-midnight interval for the event's own calendar day.
    ///
    /// Seconds are truncated. The end is measured from the start's midnight and
    /// capped at the end of that day, so an event finishing at the following
    /// midnight ends at minute 1440. Returns `None` when the truncated interval
    /// is empty.
    pub fn to_interval(&self) -> Option<TimeInterval> {
        let start_minute = self.start.hour() * 60 + self.start.minute();
        let midnight = self.day().and_hms_opt(0, 0, 0)?;
        let end_minute = minutes_between(midnight, self.end.naive_local())
            .clamp(0, MINUTES_PER_DAY as i64) as u32;

        if end_minute <= start_minute {
            return None;
        }

        Some(TimeInterval {
            id: self.id.clone(),
            start_minute,
            end_minute,
        })
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            color: None,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id,
            title,
            start,
            end,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
