use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use holidesk::domain::ports::HolidayApi;
use holidesk::error::{ApiError, ApiResult};
use holidesk::models::{Holiday, Lob, Loc, NewHoliday};
use tokio::sync::Notify;

type Canned<T> = Result<T, (u16, String)>;

fn canned<T: Clone>(result: &Canned<T>) -> ApiResult<T> {
    match result {
        Ok(value) => Ok(value.clone()),
        Err((status, message)) => Err(ApiError::Api {
            status: *status,
            message: message.clone(),
        }),
    }
}

/// Scripted backend with call counters and captured create payloads.
pub struct MockHolidayApi {
    lobs: Canned<Vec<Lob>>,
    locs: Canned<Vec<Loc>>,
    holidays: Canned<Vec<Holiday>>,
    create: Canned<()>,
    /// When set, `create_holiday` parks until the gate is notified so a
    /// test can observe the in-flight state.
    gate: Option<Arc<Notify>>,
    pub lob_calls: AtomicUsize,
    pub loc_calls: AtomicUsize,
    pub holiday_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub submitted: Mutex<Vec<NewHoliday>>,
}

impl MockHolidayApi {
    pub fn new() -> Self {
        Self {
            lobs: Ok(Vec::new()),
            locs: Ok(Vec::new()),
            holidays: Ok(Vec::new()),
            create: Ok(()),
            gate: None,
            lob_calls: AtomicUsize::new(0),
            loc_calls: AtomicUsize::new(0),
            holiday_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_references(lobs: Vec<Lob>, locs: Vec<Loc>) -> Self {
        let mut mock = Self::new();
        mock.lobs = Ok(lobs);
        mock.locs = Ok(locs);
        mock
    }

    pub fn with_holidays(mut self, holidays: Vec<Holiday>) -> Self {
        self.holidays = Ok(holidays);
        self
    }

    pub fn fail_lobs(mut self, status: u16, message: &str) -> Self {
        self.lobs = Err((status, message.to_string()));
        self
    }

    pub fn fail_locs(mut self, status: u16, message: &str) -> Self {
        self.locs = Err((status, message.to_string()));
        self
    }

    pub fn reject_create(mut self, status: u16, message: &str) -> Self {
        self.create = Err((status, message.to_string()));
        self
    }

    pub fn gate_create(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl HolidayApi for MockHolidayApi {
    async fn list_lobs(&self) -> ApiResult<Vec<Lob>> {
        self.lob_calls.fetch_add(1, Ordering::SeqCst);
        canned(&self.lobs)
    }

    async fn list_locs(&self) -> ApiResult<Vec<Loc>> {
        self.loc_calls.fetch_add(1, Ordering::SeqCst);
        canned(&self.locs)
    }

    async fn list_holidays(&self) -> ApiResult<Vec<Holiday>> {
        self.holiday_calls.fetch_add(1, Ordering::SeqCst);
        canned(&self.holidays)
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> ApiResult<Holiday> {
        let id = self.create_calls.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.submitted.lock().unwrap().push(holiday.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        canned(&self.create)?;

        Ok(Holiday {
            id,
            name: holiday.name.clone(),
            date: holiday.date,
            description: holiday.description.clone(),
            holiday_type: holiday.holiday_type,
            lob_id: holiday.lob_id,
            loc_id: holiday.loc_id,
        })
    }
}
