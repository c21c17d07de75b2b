use thiserror::Error;

/// Invalid resolver inputs. Reported before any event is considered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid visible hours {start_hour}..{end_hour}: expected 0 <= start < end <= 24")]
    InvalidBounds { start_hour: u32, end_hour: u32 },
    #[error("slot duration must be at least one minute")]
    InvalidSlotDuration,
    #[error("invalid {name}: {value} (expected a positive pixel size)")]
    InvalidGeometry { name: &'static str, value: f32 },
}

/// Why an event was left out of a layout pass. The pass still succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutDiagnostic {
    /// End not after start once both are truncated to minutes of the start's day.
    #[error("event `{id}` spans no whole minute on its day and was skipped")]
    MalformedEvent { id: String },
    /// Another well-formed event with this id came earlier. Malformed events
    /// never claim an id.
    #[error("event id `{id}` appears more than once; only the first well-formed occurrence is laid out")]
    DuplicateId { id: String },
}

impl LayoutDiagnostic {
    pub fn event_id(&self) -> &str {
        match self {
            LayoutDiagnostic::MalformedEvent { id } | LayoutDiagnostic::DuplicateId { id } => id,
        }
    }
}
