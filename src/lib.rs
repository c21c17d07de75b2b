// Rust Timetable Library
// Day timetable layout engine, drag-to-reschedule session and egui host adapter

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
