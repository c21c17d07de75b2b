// Property-based tests for the overlap resolver and drag snapping
// Random days of events must never produce overlapping rectangles

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::collections::{HashMap, HashSet};

use chrono::Duration;
use fixtures::{at_minute, leap_day};
use proptest::prelude::*;
use rust_timetable::models::event::Event;
use rust_timetable::models::layout::TimeInterval;
use rust_timetable::services::drag::DragSession;
use rust_timetable::services::layout::{layout, LayoutDiagnostic, LayoutOptions};

// Divisible by every lane count eight events can produce
const WIDTH: f32 = 840.0;

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..1300, 1u32..=120), 1..=8).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, duration))| Event {
                id: format!("e{}", i),
                title: format!("Event {}", i),
                start: at_minute(start),
                end: at_minute(start + duration),
                color: None,
            })
            .collect()
    })
}

/// Days mixing well-formed events with backwards or empty ones, events running
/// past midnight and ids reused from a small pool.
fn arb_messy_events() -> impl Strategy<Value = Vec<Event>> {
    let entry = (0u32..4, 0u8..3, 60u32..1380, 0u32..=120);
    prop::collection::vec(entry, 1..=8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, kind, start, amount)| {
                let start_at = at_minute(start);
                let end = match kind {
                    // Well-formed, finishing before midnight
                    0 => at_minute((start + amount.max(1)).min(1439)),
                    // Ends at or before its start
                    1 => at_minute(start - amount.min(60)),
                    // Runs into the next day
                    _ => at_minute(amount) + Duration::days(1),
                };
                Event {
                    id: format!("e{}", id),
                    title: format!("Event {}", id),
                    start: start_at,
                    end,
                    color: None,
                }
            })
            .collect()
    })
}

fn overlap_in_time(a: &Event, b: &Event) -> bool {
    a.start < b.end && a.end > b.start
}

fn assert_no_visual_overlap(events: &[Event], options: &LayoutOptions) -> Result<(), TestCaseError> {
    let result = layout(events, options).unwrap();
    prop_assert_eq!(result.events.len(), events.len());

    for (i, a) in events.iter().enumerate() {
        for b in &events[i + 1..] {
            if !overlap_in_time(a, b) {
                continue;
            }
            let pa = result.get(&a.id).unwrap();
            let pb = result.get(&b.id).unwrap();
            prop_assert_ne!(pa.column, pb.column);
            prop_assert!(
                !pa.shares_horizontal_span(pb),
                "{:?} and {:?} share a horizontal span",
                pa,
                pb
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_per_cluster_never_overlaps(events in arb_events()) {
        assert_no_visual_overlap(&events, &LayoutOptions::new(0, 24, 15, 60.0, WIDTH))?;
    }

    #[test]
    fn prop_legacy_never_overlaps(events in arb_events()) {
        assert_no_visual_overlap(&events, &LayoutOptions::new(0, 24, 15, 60.0, WIDTH).legacy())?;
    }

    /// Every rectangle stays inside the columns area
    #[test]
    fn prop_rectangles_fit_the_columns_area(events in arb_events()) {
        let result = layout(&events, &LayoutOptions::new(0, 24, 15, 60.0, WIDTH)).unwrap();
        for positioned in &result.events {
            prop_assert!(positioned.column < positioned.columns);
            prop_assert!(positioned.left >= 0.0);
            prop_assert!(positioned.right() <= WIDTH);
            prop_assert!(positioned.columns <= result.max_overlaps);
        }
    }

    /// In global mode every event shares one width, so the distinct lefts are
    /// bounded by the lane count
    #[test]
    fn prop_global_lefts_bounded_by_lane_count(events in arb_events()) {
        let result = layout(&events, &LayoutOptions::new(0, 24, 15, 60.0, WIDTH).legacy()).unwrap();
        let mut lefts: Vec<f32> = result.events.iter().map(|e| e.left).collect();
        lefts.sort_by(|a, b| a.total_cmp(b));
        lefts.dedup();
        prop_assert!(lefts.len() <= result.max_overlaps);
        prop_assert!(result.events.iter().all(|e| e.width == WIDTH / result.max_overlaps as f32));
    }

    #[test]
    fn prop_layout_is_deterministic(events in arb_events()) {
        let options = LayoutOptions::new(0, 24, 15, 60.0, WIDTH);
        prop_assert_eq!(layout(&events, &options).unwrap(), layout(&events, &options).unwrap());
    }

    /// Snapped moves shift by whole steps and never stretch the event
    #[test]
    fn prop_drag_preserves_duration_and_quantizes(
        events in arb_events(),
        pick in any::<prop::sample::Index>(),
        delta in -600.0f32..600.0,
        step in prop::sample::select(vec![5u32, 10, 15, 30, 60]),
    ) {
        let result = layout(&events, &LayoutOptions::new(0, 24, 15, 60.0, WIDTH)).unwrap();
        let original = &events[pick.index(events.len())];

        let mut session = DragSession::new(step, 60.0);
        let origin = session.begin(original, &result).unwrap();
        let preview = session.update(delta).unwrap();
        let moved = session.end(delta).unwrap();

        let shift = (moved.start - original.start).num_minutes();
        prop_assert_eq!(shift % step as i64, 0);
        prop_assert_eq!(moved.duration(), original.duration());
        prop_assert_eq!(&moved.id, &original.id);
        // One minute is one pixel at 60px per hour
        prop_assert!((preview - origin - shift as f32).abs() < 1e-3);
        prop_assert!(!session.is_dragging());
    }

    #[test]
    fn prop_cancel_reproduces_layout(
        events in arb_events(),
        pick in any::<prop::sample::Index>(),
        delta in -600.0f32..600.0,
    ) {
        let options = LayoutOptions::new(0, 24, 15, 60.0, WIDTH);
        let before = layout(&events, &options).unwrap();
        let original = &events[pick.index(events.len())];

        let mut session = DragSession::default();
        let origin = session.begin(original, &before).unwrap();
        session.update(delta);
        prop_assert_eq!(session.cancel(), Some(origin));

        prop_assert_eq!(layout(&events, &options).unwrap(), before);
    }

    /// Every event is either laid out or reported, never both
    #[test]
    fn prop_every_event_is_placed_or_reported(events in arb_messy_events()) {
        let options = LayoutOptions::new(0, 24, 15, 60.0, WIDTH).on_date(leap_day());
        let result = layout(&events, &options).unwrap();

        let mut claimed: HashMap<String, TimeInterval> = HashMap::new();
        let mut malformed = 0;
        let mut duplicates = 0;
        for event in &events {
            match event.to_interval() {
                None => malformed += 1,
                Some(interval) => {
                    if claimed.contains_key(&event.id) {
                        duplicates += 1;
                    } else {
                        prop_assert!(interval.end_minute <= 1440);
                        claimed.insert(event.id.clone(), interval);
                    }
                }
            }
        }

        prop_assert_eq!(result.events.len() + result.diagnostics.len(), events.len());
        prop_assert_eq!(result.events.len(), claimed.len());
        let reported_malformed = result
            .diagnostics
            .iter()
            .filter(|d| matches!(d, LayoutDiagnostic::MalformedEvent { .. }))
            .count();
        prop_assert_eq!(reported_malformed, malformed);
        prop_assert_eq!(result.diagnostics.len() - reported_malformed, duplicates);

        let ids: HashSet<&str> = result.events.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(ids.len(), result.events.len());

        for (i, a) in result.events.iter().enumerate() {
            for b in &result.events[i + 1..] {
                if claimed[&a.id].overlaps_interval(&claimed[&b.id]) {
                    prop_assert!(
                        !a.shares_horizontal_span(b),
                        "{:?} and {:?} share a horizontal span",
                        a,
                        b
                    );
                }
            }
        }
    }
}
