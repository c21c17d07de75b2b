//! Vertical coordinate system of the day grid.
//!
//! Converts minutes since midnight to pixel offsets measured from the top of
//! the visible window, and builds the slot grid used to estimate concurrency.

use crate::models::layout::{TimeInterval, TimeSlot};

use super::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub start_hour: u32,
    pub end_hour: u32,
    pub hour_height: f32,
}

impl TimeGrid {
    pub fn new(start_hour: u32, end_hour: u32, hour_height: f32) -> Result<Self, LayoutError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(LayoutError::InvalidBounds {
                start_hour,
                end_hour,
            });
        }
        if !(hour_height.is_finite() && hour_height > 0.0) {
            return Err(LayoutError::InvalidGeometry {
                name: "hour height",
                value: hour_height,
            });
        }

        Ok(Self {
            start_hour,
            end_hour,
            hour_height,
        })
    }

    pub fn window_start_minute(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn window_end_minute(&self) -> u32 {
        self.end_hour * 60
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.hour_height / 60.0
    }

    /// Offset of `minute` from the top of the window. Negative above the window.
    pub fn top_for_minute(&self, minute: u32) -> f32 {
        let offset = minute as f32 - self.window_start_minute() as f32;
        offset / 60.0 * self.hour_height
    }

    pub fn height_for_minutes(&self, minutes: u32) -> f32 {
        minutes as f32 / 60.0 * self.hour_height
    }

    /// Scroll offset that brings `hour` to the top of the viewport.
    pub fn top_for_hour(&self, hour: u32) -> f32 {
        self.top_for_minute(hour * 60)
    }

    pub fn content_height(&self) -> f32 {
        (self.end_hour - self.start_hour) as f32 * self.hour_height
    }

    /// One "H:00" label per visible hour, with its top offset.
    pub fn hour_labels(&self) -> Vec<(f32, String)> {
        (self.start_hour..self.end_hour)
            .map(|hour| (self.top_for_hour(hour), format!("{}:00", hour)))
            .collect()
    }

    /// Slot grid over the visible window. A duration that does not divide the
    /// window evenly leaves a shorter final slot.
    pub fn slots(&self, slot_duration: u32) -> Result<Vec<TimeSlot>, LayoutError> {
        if slot_duration == 0 {
            return Err(LayoutError::InvalidSlotDuration);
        }

        let window_start = self.window_start_minute();
        let window_end = self.window_end_minute();
        let count = (window_end - window_start).div_ceil(slot_duration);

        if (window_end - window_start) % slot_duration != 0 {
            log::warn!(
                "Slot duration {} does not divide the {}-minute window; last slot truncated",
                slot_duration,
                window_end - window_start
            );
        }

        Ok((0..count)
            .map(|i| {
                let start_minute = window_start + i * slot_duration;
                TimeSlot {
                    start_minute,
                    end_minute: (start_minute + slot_duration).min(window_end),
                    top_pixel: self.top_for_minute(start_minute),
                }
            })
            .collect())
    }
}

/// Largest number of intervals touching any single slot, never below 1.
pub fn peak_concurrency<'a, I>(slots: &[TimeSlot], intervals: I) -> usize
where
    I: IntoIterator<Item = &'a TimeInterval>,
{
    let mut counts = vec![0usize; slots.len()];
    for interval in intervals {
        for (count, slot) in counts.iter_mut().zip(slots) {
            if interval.overlaps(slot.start_minute, slot.end_minute) {
                *count += 1;
            }
        }
    }
    counts.into_iter().max().unwrap_or(0).max(1)
}
