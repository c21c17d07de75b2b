mod navigation;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::drag::DragSession;
use crate::services::event::EventStore;
use crate::ui_egui::drag::GestureAdapter;
use crate::ui_egui::views::DayView;

pub struct TimetableApp {
    /// Authoritative event list; the views only ever read from it
    store: EventStore,
    settings: Settings,
    current_date: NaiveDate,
    session: DragSession,
    gestures: GestureAdapter,
    /// Default scroll hour is applied on the first frame only
    scroll_pending: bool,
    last_pressed: Option<Event>,
}

impl TimetableApp {
    pub fn new(store: EventStore, settings: Settings, current_date: NaiveDate) -> Self {
        Self {
            session: DragSession::from_settings(&settings),
            store,
            settings,
            current_date,
            gestures: GestureAdapter::new(),
            scroll_pending: true,
            last_pressed: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    fn render_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("timetable_navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀ Previous").clicked() {
                    self.navigate_previous();
                }
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        if ui.button("Next ▶").clicked() {
                            self.navigate_next();
                        }
                        if ui.button("Today").clicked() {
                            self.jump_to_today();
                        }
                        ui.centered_and_justified(|ui| {
                            ui.heading(self.current_date.format("%a %b %d %Y").to_string());
                        });
                    },
                );
            });
        });
    }

    fn render_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("timetable_status").show(ctx, |ui| {
            let text = match &self.last_pressed {
                Some(event) => format!(
                    "{}  {} - {}",
                    event.title,
                    event.start.format("%H:%M"),
                    event.end.format("%H:%M")
                ),
                None => format!("{} events", self.store.events_on(self.current_date).len()),
            };
            ui.label(text);
        });
    }
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_navigation(ctx);
        self.render_status(ctx);

        let events = self.store.events_on(self.current_date);
        let mut scroll_area = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .drag_to_scroll(false);
        if self.scroll_pending {
            scroll_area = scroll_area.vertical_scroll_offset(DayView::initial_scroll_offset(&self.settings));
            self.scroll_pending = false;
        }

        let result = egui::CentralPanel::default()
            .show(ctx, |ui| {
                scroll_area
                    .show(ui, |ui| {
                        DayView::show(
                            ui,
                            &events,
                            &self.settings,
                            self.current_date,
                            &mut self.session,
                            &mut self.gestures,
                        )
                    })
                    .inner
            })
            .inner;

        if let Some(event) = result.pressed {
            log::info!("Event pressed: '{}'", event.title);
            self.last_pressed = Some(event);
        }
        if let Some(updated) = result.changed {
            self.store.apply_change(updated);
        }
    }
}
