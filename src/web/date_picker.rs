use chrono::NaiveDate;

/// Popover calendar state for the holiday date field.
///
/// Dates before `min_date` render disabled. That is a UI affordance only;
/// `HolidayForm::submit` re-checks the chosen date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    open: bool,
    min_date: NaiveDate,
}

impl DatePicker {
    pub fn new(min_date: NaiveDate) -> Self {
        Self {
            open: false,
            min_date,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date < self.min_date
    }

    /// Handle a calendar click: disabled dates are ignored, a valid one
    /// closes the popover and is returned for the form to bind.
    pub fn select(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        if self.is_disabled(date) {
            return None;
        }

        self.open = false;
        Some(date)
    }
}
