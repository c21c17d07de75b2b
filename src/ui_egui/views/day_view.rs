use chrono::NaiveDate;
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::utils::{event_color, format_time_range};
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::drag::DragSession;
use crate::services::layout::{layout, TimeGrid};
use crate::ui_egui::drag::{GestureAdapter, GestureOutcome};

/// Space kept free to the right of the event columns.
const RIGHT_GUTTER: f32 = 20.0;

/// Interactions reported by one frame of the day view.
#[derive(Default)]
pub struct DayViewResult {
    /// Event that was clicked
    pub pressed: Option<Event>,
    /// Event rescheduled by a completed drag
    pub changed: Option<Event>,
}

pub struct DayView;

impl DayView {
    /// Scroll offset for the settings' default scroll hour.
    pub fn initial_scroll_offset(settings: &Settings) -> f32 {
        TimeGrid::new(settings.start_hour, settings.end_hour, settings.hour_height)
            .map(|grid| grid.top_for_hour(settings.default_scroll_hour))
            .unwrap_or(0.0)
    }

    pub fn show(
        ui: &mut egui::Ui,
        events: &[Event],
        settings: &Settings,
        current_date: NaiveDate,
        session: &mut DragSession,
        gestures: &mut GestureAdapter,
    ) -> DayViewResult {
        let mut result = DayViewResult::default();

        let columns_width =
            (ui.available_width() - settings.hour_column_width - RIGHT_GUTTER).max(1.0);
        let options = settings.layout_options(columns_width, Some(current_date));

        let (grid, day_layout) = match options.grid().and_then(|grid| {
            layout(events, &options).map(|day_layout| (grid, day_layout))
        }) {
            Ok(pair) => pair,
            Err(err) => {
                ui.colored_label(Color32::RED, format!("Cannot lay out the day: {}", err));
                return result;
            }
        };

        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), grid.content_height()),
            Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let line_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
        let columns_left = rect.left() + settings.hour_column_width;

        for (top, label) in grid.hour_labels() {
            let y = rect.top() + top;
            painter.text(
                Pos2::new(columns_left - 5.0, y + 2.0),
                Align2::RIGHT_TOP,
                label,
                FontId::proportional(14.0),
                text_color,
            );
            painter.hline(
                columns_left..=columns_left + columns_width,
                y,
                Stroke::new(1.0, line_color),
            );
        }

        let mut changed = None;
        let mut sink = |updated: &Event| changed = Some(updated.clone());

        for positioned in &day_layout.events {
            let Some(event) = events.iter().find(|e| e.id == positioned.id) else {
                continue;
            };

            let top = if session.active_event_id() == Some(positioned.id.as_str()) {
                session.preview_top().unwrap_or(positioned.top)
            } else {
                positioned.top
            };
            let event_rect = Rect::from_min_size(
                Pos2::new(columns_left + positioned.left, rect.top() + top),
                Vec2::new(positioned.width, positioned.height),
            );

            let response = ui
                .interact(
                    event_rect,
                    ui.id().with(("timetable_event", &positioned.id)),
                    Sense::click_and_drag(),
                )
                .on_hover_cursor(CursorIcon::Grab);

            if response.clicked() {
                result.pressed = Some(event.clone());
            }

            let drawn_rect = match gestures.handle(
                ui.ctx(),
                &response,
                event,
                &day_layout,
                session,
                &mut sink,
            ) {
                GestureOutcome::Preview { top } | GestureOutcome::Cancelled { top } => {
                    event_rect.translate(Vec2::new(0.0, rect.top() + top - event_rect.top()))
                }
                _ => event_rect,
            };

            Self::paint_event(&painter, drawn_rect, event, settings);
        }

        result.changed = changed;
        result
    }

    fn paint_event(painter: &egui::Painter, rect: Rect, event: &Event, settings: &Settings) {
        let fill = event_color(event, &settings.default_event_color);
        painter.rect_filled(rect.shrink(1.0), 4.0, fill);

        let text_painter = painter.with_clip_rect(rect.shrink(2.0));
        text_painter.text(
            Pos2::new(rect.center().x, rect.top() + 4.0),
            Align2::CENTER_TOP,
            &event.title,
            FontId::proportional(12.0),
            Color32::WHITE,
        );
        if rect.height() >= 36.0 {
            text_painter.text(
                Pos2::new(rect.center().x, rect.top() + 20.0),
                Align2::CENTER_TOP,
                format_time_range(event),
                FontId::proportional(10.0),
                Color32::WHITE,
            );
        }
    }
}
