use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::domain::ports::Clock;
use crate::models::{Holiday, HolidayType, Lob, Loc, NewHoliday, Notification, Selection};
use crate::services::{HolidayService, NotificationCenter};
use crate::web::DatePicker;

/// Editable state of the holiday creation form
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayFields {
    pub date: Option<NaiveDate>,
    pub name: String,
    pub description: String,
    pub holiday_type: HolidayType,
    pub lob: Selection,
    pub loc: Selection,
    pub picker: DatePicker,
}

impl HolidayFields {
    fn defaults(opened_on: NaiveDate) -> Self {
        Self {
            date: opened_on.checked_add_days(Days::new(1)),
            name: String::new(),
            description: String::new(),
            holiday_type: HolidayType::National,
            lob: Selection::All,
            loc: Selection::All,
            picker: DatePicker::new(opened_on),
        }
    }
}

/// First failed check for a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    DateRequired,
    NameRequired,
    InvalidDate,
}

impl ValidationError {
    fn notification(self) -> Notification {
        match self {
            ValidationError::DateRequired => Notification::date_required(),
            ValidationError::NameRequired => Notification::name_required(),
            ValidationError::InvalidDate => Notification::invalid_date(),
        }
    }
}

/// Result of a submit attempt, after its notification has been emitted
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Holiday),
    Rejected(ValidationError),
    Failed(String),
    /// A create request is already in flight; nothing was sent.
    AlreadyPending,
}

/// The holiday creation form: field state, the validation gate, and the
/// submit flow against the holiday service.
pub struct HolidayForm {
    service: HolidayService,
    notifications: Arc<NotificationCenter>,
    /// "Today" snapshot taken once at mount; every past-date check and
    /// the reset baseline derive from it.
    opened_on: NaiveDate,
    fields: RwLock<HolidayFields>,
    in_flight: AtomicBool,
}

impl HolidayForm {
    /// Mount the form with its defaults: tomorrow's date, National type,
    /// no scoping, picker closed.
    pub fn mount(
        service: HolidayService,
        notifications: Arc<NotificationCenter>,
        clock: &dyn Clock,
    ) -> Self {
        let opened_on = clock.today();
        debug!("Holiday form mounted, today snapshot {}", opened_on);

        Self {
            service,
            notifications,
            opened_on,
            fields: RwLock::new(HolidayFields::defaults(opened_on)),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    /// Snapshot of the current field state for rendering.
    pub fn fields(&self) -> HolidayFields {
        self.fields.read().unwrap().clone()
    }

    /// True while a create request is pending; the shell disables the
    /// submit control off this.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Reference lists for the two scoping selects, fetched concurrently
    /// and cached across mounts.
    pub async fn reference_data(&self) -> (Arc<Vec<Lob>>, Arc<Vec<Loc>>) {
        tokio::join!(self.service.lobs(), self.service.locs())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.fields.write().unwrap().name = name.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.fields.write().unwrap().description = description.into();
    }

    pub fn set_holiday_type(&self, holiday_type: HolidayType) {
        self.fields.write().unwrap().holiday_type = holiday_type;
    }

    pub fn set_lob(&self, lob: Selection) {
        self.fields.write().unwrap().lob = lob;
    }

    pub fn set_loc(&self, loc: Selection) {
        self.fields.write().unwrap().loc = loc;
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.fields.write().unwrap().date = Some(date);
    }

    pub fn clear_date(&self) {
        self.fields.write().unwrap().date = None;
    }

    pub fn open_picker(&self) {
        self.fields.write().unwrap().picker.open();
    }

    pub fn close_picker(&self) {
        self.fields.write().unwrap().picker.close();
    }

    /// Route a calendar click through the picker; disabled dates are
    /// ignored, a valid one binds the date field and closes the popover.
    pub fn pick_date(&self, date: NaiveDate) {
        let mut fields = self.fields.write().unwrap();
        if let Some(chosen) = fields.picker.select(date) {
            fields.date = Some(chosen);
        }
    }

    /// The submit-gating checks, in their fixed order: date present,
    /// name non-empty after trimming, date not before the mount snapshot.
    fn validate(
        fields: &HolidayFields,
        opened_on: NaiveDate,
    ) -> Result<NewHoliday, ValidationError> {
        let date = fields.date.ok_or(ValidationError::DateRequired)?;

        let name = fields.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        if date < opened_on {
            return Err(ValidationError::InvalidDate);
        }

        let description = fields.description.trim();

        Ok(NewHoliday {
            name: name.to_string(),
            date,
            description: (!description.is_empty()).then(|| description.to_string()),
            holiday_type: fields.holiday_type,
            lob_id: fields.lob.to_field(),
            loc_id: fields.loc.to_field(),
        })
    }

    /// Validate and submit.
    ///
    /// Emits exactly one notification per attempt (none for
    /// `AlreadyPending`): destructive for the first failed check or a
    /// failed request, success after a create. A successful create resets
    /// every field to its mount default; a failure preserves them for
    /// correction and resubmit.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::AlreadyPending;
        }

        let outcome = self.submit_gated().await;
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn submit_gated(&self) -> SubmitOutcome {
        let payload = {
            let fields = self.fields.read().unwrap();
            match Self::validate(&fields, self.opened_on) {
                Ok(payload) => payload,
                Err(error) => {
                    self.notifications.push(error.notification());
                    return SubmitOutcome::Rejected(error);
                }
            }
        };

        match self.service.create_holiday(&payload).await {
            Ok(created) => {
                *self.fields.write().unwrap() = HolidayFields::defaults(self.opened_on);
                self.notifications
                    .push(Notification::holiday_created(&created.name));
                SubmitOutcome::Created(created)
            }
            Err(error) => {
                let message = error.to_string();
                self.notifications
                    .push(Notification::holiday_failed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
