use super::TimetableApp;
use chrono::{Duration, Local};

impl TimetableApp {
    pub(super) fn navigate_previous(&mut self) {
        self.change_day(self.current_date - Duration::days(1));
    }

    pub(super) fn navigate_next(&mut self) {
        self.change_day(self.current_date + Duration::days(1));
    }

    pub(super) fn jump_to_today(&mut self) {
        self.change_day(Local::now().date_naive());
    }

    fn change_day(&mut self, date: chrono::NaiveDate) {
        // Drags never span a day change
        if self.session.cancel().is_some() {
            log::debug!("Cancelled drag while changing day");
        }
        self.current_date = date;
        self.last_pressed = None;
        self.scroll_pending = true;
    }
}
