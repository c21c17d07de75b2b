//! Pure helpers shared by the timetable views.

use egui::Color32;

use crate::models::event::Event;

/// Parse an event color.
///
/// Accepts "#RRGGBB", "#RGB", "transparent" and a handful of CSS color names.
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or unknown
pub fn parse_color(color: &str) -> Option<Color32> {
    let color = color.trim();
    if color.is_empty() {
        return None;
    }

    match color.to_ascii_lowercase().as_str() {
        "transparent" => return Some(Color32::TRANSPARENT),
        "red" => return Some(Color32::from_rgb(255, 0, 0)),
        "green" => return Some(Color32::from_rgb(0, 128, 0)),
        "blue" => return Some(Color32::from_rgb(0, 0, 255)),
        "orange" => return Some(Color32::from_rgb(255, 165, 0)),
        "purple" => return Some(Color32::from_rgb(128, 0, 128)),
        _ => {}
    }

    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Fill color for an event, falling back to `default_color`.
pub fn event_color(event: &Event, default_color: &str) -> Color32 {
    event
        .color
        .as_deref()
        .and_then(parse_color)
        .or_else(|| parse_color(default_color))
        .unwrap_or(Color32::from_rgb(0, 122, 255))
}

/// "HH:MM - HH:MM" label for an event.
pub fn format_time_range(event: &Event) -> String {
    format!(
        "{} - {}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    )
}
