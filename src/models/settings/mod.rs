// Settings module
// Engine and presentation configuration, stored as TOML

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::layout::LayoutOptions;

/// How lane widths are shared between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMode {
    /// One lane count for the whole day, taken from the busiest slot
    Global,
    /// Lane count sized separately for each connected group of overlapping events
    #[default]
    PerCluster,
}

/// Order in which events claim lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementOrder {
    /// Events claim lanes in the order the caller supplied them
    InputOrder,
    /// Earliest start first, longer events first on ties, then by id
    #[default]
    StartTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_hour: u32,
    pub end_hour: u32,
    /// Minutes per concurrency-counting slot
    pub slot_duration: u32,
    /// Minutes per drag snap step
    pub move_step_minutes: u32,
    pub hour_height: f32,
    pub hour_column_width: f32,
    pub default_scroll_hour: u32,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub column_mode: ColumnMode,
    pub placement: PlacementOrder,
    pub default_event_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            slot_duration: 15,
            move_step_minutes: 15,
            hour_height: 60.0,
            hour_column_width: 60.0,
            default_scroll_hour: 8,
            first_day_of_week: 1, // Monday
            column_mode: ColumnMode::default(),
            placement: PlacementOrder::default(),
            default_event_color: "#007AFF".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(format!(
                "Visible hours must satisfy 0 <= start < end <= 24 (got {}..{})",
                self.start_hour, self.end_hour
            ));
        }

        if self.slot_duration == 0 {
            return Err("Slot duration must be at least one minute".to_string());
        }

        if self.move_step_minutes == 0 {
            return Err("Move step must be at least one minute".to_string());
        }

        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err("Hour height must be a positive number of pixels".to_string());
        }

        if !(self.hour_column_width.is_finite() && self.hour_column_width >= 0.0) {
            return Err("Hour column width cannot be negative".to_string());
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6".to_string());
        }

        if !(self.start_hour..=self.end_hour).contains(&self.default_scroll_hour) {
            return Err(format!(
                "Default scroll hour {} is outside the visible hours",
                self.default_scroll_hour
            ));
        }

        Ok(())
    }

    /// Resolver inputs for a column area `columns_width` pixels wide.
    pub fn layout_options(
        &self,
        columns_width: f32,
        current_date: Option<NaiveDate>,
    ) -> LayoutOptions {
        LayoutOptions {
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            slot_duration: self.slot_duration,
            hour_height: self.hour_height,
            columns_width,
            current_date,
            column_mode: self.column_mode,
            placement: self.placement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_hours_rejected() {
        let settings = Settings {
            start_hour: 18,
            end_hour: 8,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("Visible hours"));
    }

    #[test]
    fn test_zero_move_step_rejected() {
        let settings = Settings {
            move_step_minutes: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_scroll_hour_must_be_visible() {
        let settings = Settings {
            start_hour: 8,
            end_hour: 18,
            default_scroll_hour: 20,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("scroll hour"));
    }

    #[test]
    fn test_layout_options_carry_settings() {
        let settings = Settings {
            start_hour: 8,
            end_hour: 18,
            column_mode: ColumnMode::Global,
            ..Settings::default()
        };
        let options = settings.layout_options(300.0, None);

        assert_eq!(options.start_hour, 8);
        assert_eq!(options.end_hour, 18);
        assert_eq!(options.columns_width, 300.0);
        assert_eq!(options.column_mode, ColumnMode::Global);
        assert_eq!(options.placement, PlacementOrder::StartTime);
    }
}
