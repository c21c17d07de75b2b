//! Lane assignment and overlap clustering.

use std::cmp::Reverse;

use crate::models::layout::TimeInterval;
use crate::models::settings::PlacementOrder;

/// Indices into `intervals` in the order they claim lanes.
pub fn placement_order(intervals: &[TimeInterval], placement: PlacementOrder) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    if placement == PlacementOrder::StartTime {
        order.sort_by(|&a, &b| {
            let (a, b) = (&intervals[a], &intervals[b]);
            (a.start_minute, Reverse(a.end_minute), &a.id)
                .cmp(&(b.start_minute, Reverse(b.end_minute), &b.id))
        });
    }
    order
}

/// First-fit: each interval takes the lowest lane holding nothing it overlaps.
///
/// Returns the lane of every interval, indexed like `intervals`.
pub fn assign_columns(intervals: &[TimeInterval], order: &[usize]) -> Vec<usize> {
    let mut lanes: Vec<Vec<usize>> = Vec::new();
    let mut columns = vec![0; intervals.len()];

    for &index in order {
        let interval = &intervals[index];
        let free_lane = lanes.iter().position(|members| {
            members
                .iter()
                .all(|&placed| !intervals[placed].overlaps_interval(interval))
        });

        let lane = match free_lane {
            Some(lane) => lane,
            None => {
                lanes.push(Vec::new());
                lanes.len() - 1
            }
        };
        lanes[lane].push(index);
        columns[index] = lane;
    }

    columns
}

/// Connected groups of transitively overlapping intervals.
///
/// Returns a cluster number per interval, indexed like `intervals`. Clusters
/// are numbered in order of their earliest start.
pub fn overlap_clusters(intervals: &[TimeInterval]) -> Vec<usize> {
    let mut by_start: Vec<usize> = (0..intervals.len()).collect();
    by_start.sort_by_key(|&i| (intervals[i].start_minute, intervals[i].end_minute));

    let mut clusters = vec![0; intervals.len()];
    let mut current = 0;
    let mut reach: Option<u32> = None;

    for index in by_start {
        let interval = &intervals[index];
        reach = match reach {
            Some(end) if interval.start_minute < end => Some(end.max(interval.end_minute)),
            Some(_) => {
                current += 1;
                Some(interval.end_minute)
            }
            None => Some(interval.end_minute),
        };
        clusters[index] = current;
    }

    clusters
}
