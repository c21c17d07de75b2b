// Rust Timetable Application
// Demo host for the day timetable

use chrono::{DateTime, Local, NaiveDate};
use rust_timetable::models::event::Event;
use rust_timetable::models::settings::Settings;
use rust_timetable::services::event::EventStore;
use rust_timetable::services::settings::SettingsService;
use rust_timetable::ui_egui::TimetableApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Timetable");

    let settings = load_settings_or_default();
    let today = Local::now().date_naive();
    let store = EventStore::new(sample_events(today));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Timetable",
        options,
        Box::new(move |_cc| Ok(Box::new(TimetableApp::new(store, settings, today)))),
    )
}

fn load_settings_or_default() -> Settings {
    match SettingsService::default_location().and_then(|service| service.get()) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

fn sample_events(day: NaiveDate) -> Vec<Event> {
    let at = |hour: u32, minute: u32| -> Option<DateTime<Local>> {
        day.and_hms_opt(hour, minute, 0)?
            .and_local_timezone(Local)
            .single()
    };

    let seeds = [
        ("1", "Réunion", (12, 0), (18, 0), "#FF5733"),
        ("2", "Cours de React Native", (12, 0), (13, 15), "#33B5FF"),
        ("3", "Rouge", (13, 15), (14, 0), "#FF0000"),
        ("4", "Vert", (13, 15), (14, 0), "green"),
        ("5", "Orange", (20, 0), (22, 0), "orange"),
    ];

    seeds
        .into_iter()
        .filter_map(|(id, title, start, end, color)| {
            let built = Event::builder()
                .id(id)
                .title(title)
                .start(at(start.0, start.1)?)
                .end(at(end.0, end.1)?)
                .color(color)
                .build();
            match built {
                Ok(event) => Some(event),
                Err(e) => {
                    log::warn!("Skipping sample event '{}': {}", title, e);
                    None
                }
            }
        })
        .collect()
}
