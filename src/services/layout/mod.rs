//! Overlap resolver for the day grid.
//!
//! Turns a list of events into positioned rectangles: vertical placement comes
//! from the event's clock times, horizontal placement from the lane it was
//! assigned so that no two overlapping events share horizontal space.
//!
//! The pass is pure. Invalid bounds fail the whole pass with a [`LayoutError`];
//! bad events are dropped and reported as [`LayoutDiagnostic`]s alongside the
//! events that were laid out.

mod columns;
mod error;
mod grid;

use std::collections::HashSet;

use chrono::NaiveDate;

pub use self::error::{LayoutDiagnostic, LayoutError};
pub use self::grid::{peak_concurrency, TimeGrid};

use crate::models::event::Event;
use crate::models::layout::{LayoutResult, PositionedEvent};
use crate::models::settings::{ColumnMode, PlacementOrder};
use crate::utils::date::week_dates;

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub start_hour: u32,
    pub end_hour: u32,
    /// Minutes per concurrency-counting slot
    pub slot_duration: u32,
    pub hour_height: f32,
    /// Horizontal space shared by the lanes
    pub columns_width: f32,
    /// When set, only events starting on this day are laid out
    pub current_date: Option<NaiveDate>,
    pub column_mode: ColumnMode,
    pub placement: PlacementOrder,
}

impl LayoutOptions {
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        slot_duration: u32,
        hour_height: f32,
        columns_width: f32,
    ) -> Self {
        Self {
            start_hour,
            end_hour,
            slot_duration,
            hour_height,
            columns_width,
            current_date: None,
            column_mode: ColumnMode::default(),
            placement: PlacementOrder::default(),
        }
    }

    /// Whole-day lane grid with arrival-order priority.
    pub fn legacy(mut self) -> Self {
        self.column_mode = ColumnMode::Global;
        self.placement = PlacementOrder::InputOrder;
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.current_date = Some(date);
        self
    }

    pub fn grid(&self) -> Result<TimeGrid, LayoutError> {
        TimeGrid::new(self.start_hour, self.end_hour, self.hour_height)
    }
}

/// Lay out `events` for one day.
pub fn layout(events: &[Event], options: &LayoutOptions) -> Result<LayoutResult, LayoutError> {
    let grid = options.grid()?;
    if !(options.columns_width.is_finite() && options.columns_width > 0.0) {
        return Err(LayoutError::InvalidGeometry {
            name: "columns width",
            value: options.columns_width,
        });
    }
    let slots = grid.slots(options.slot_duration)?;

    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();
    let mut intervals = Vec::with_capacity(events.len());

    for event in events {
        if options.current_date.is_some_and(|date| event.day() != date) {
            continue;
        }

        let Some(interval) = event.to_interval() else {
            log::warn!(
                "Skipping event '{}': {} - {} spans no whole minute on its day",
                event.id,
                event.start,
                event.end
            );
            diagnostics.push(LayoutDiagnostic::MalformedEvent {
                id: event.id.clone(),
            });
            continue;
        };

        if !seen.insert(event.id.as_str()) {
            log::warn!("Skipping event with duplicate id '{}'", event.id);
            diagnostics.push(LayoutDiagnostic::DuplicateId {
                id: event.id.clone(),
            });
            continue;
        }

        intervals.push(interval);
    }

    let order = columns::placement_order(&intervals, options.placement);
    let lanes = columns::assign_columns(&intervals, &order);
    let lanes_used = lanes.iter().max().map_or(0, |&lane| lane + 1);

    let divisors: Vec<usize> = match options.column_mode {
        ColumnMode::Global => {
            let peak = peak_concurrency(&slots, &intervals);
            if lanes_used > peak {
                log::debug!(
                    "Busiest slot holds {} events but {} lanes were needed; widening grid",
                    peak,
                    lanes_used
                );
            }
            vec![peak.max(lanes_used); intervals.len()]
        }
        ColumnMode::PerCluster => {
            let clusters = columns::overlap_clusters(&intervals);
            let cluster_count = clusters.iter().max().map_or(0, |&c| c + 1);
            let mut widths = vec![1usize; cluster_count];
            for (&cluster, &lane) in clusters.iter().zip(&lanes) {
                widths[cluster] = widths[cluster].max(lane + 1);
            }
            clusters.iter().map(|&cluster| widths[cluster]).collect()
        }
    };
    let max_overlaps = divisors.iter().copied().max().unwrap_or(1);

    let positioned: Vec<PositionedEvent> = intervals
        .iter()
        .zip(lanes)
        .zip(divisors)
        .map(|((interval, column), columns)| {
            let width = options.columns_width / columns as f32;
            PositionedEvent {
                id: interval.id.clone(),
                top: grid.top_for_minute(interval.start_minute),
                height: grid.height_for_minutes(interval.duration_minutes()),
                left: column as f32 * width,
                width,
                column,
                columns,
            }
        })
        .collect();

    log::debug!(
        "Laid out {} events across {} lanes ({} skipped)",
        positioned.len(),
        max_overlaps,
        diagnostics.len()
    );

    Ok(LayoutResult {
        events: positioned,
        diagnostics,
        max_overlaps,
    })
}

/// One day column of a week layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub layout: LayoutResult,
}

/// Lay out the seven days beginning at `week_start`, each day on its own.
///
/// `options.columns_width` is the width of a single day column and any
/// `current_date` in `options` is replaced per day.
pub fn layout_week(
    events: &[Event],
    week_start: NaiveDate,
    options: &LayoutOptions,
) -> Result<Vec<DayLayout>, LayoutError> {
    week_dates(week_start)
        .into_iter()
        .map(|date| {
            let day_options = options.on_date(date);
            Ok(DayLayout {
                date,
                layout: layout(events, &day_options)?,
            })
        })
        .collect()
}
