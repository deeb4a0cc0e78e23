#![allow(dead_code)]
pub mod mock_api;

pub use mock_api::*;

use std::sync::Arc;

use chrono::NaiveDate;
use holidesk::cache::QueryCache;
use holidesk::domain::ports::Clock;
use holidesk::models::{Lob, Loc};
use holidesk::services::{HolidayService, NotificationCenter};
use holidesk::web::HolidayForm;

/// Deterministic clock so the mount-time "today" is stable in tests.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn tomorrow() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
}

pub fn yesterday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
}

pub fn sample_lobs() -> Vec<Lob> {
    vec![
        Lob {
            id: 1,
            name: "Retail Banking".to_string(),
        },
        Lob {
            id: 2,
            name: "Cards".to_string(),
        },
    ]
}

pub fn sample_locs() -> Vec<Loc> {
    vec![
        Loc {
            id: 10,
            name: "Mumbai".to_string(),
        },
        Loc {
            id: 11,
            name: "Pune".to_string(),
        },
    ]
}

/// A mounted holiday form page with handles on every collaborator.
pub struct TestPage {
    pub form: Arc<HolidayForm>,
    pub service: HolidayService,
    pub cache: Arc<QueryCache>,
    pub api: Arc<MockHolidayApi>,
    pub notifications: Arc<NotificationCenter>,
}

/// Install a log subscriber once so degraded paths are visible under
/// `RUST_LOG` when a test fails.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn mount_page(api: MockHolidayApi) -> TestPage {
    init_tracing();

    let api = Arc::new(api);
    let cache = QueryCache::new();
    let notifications = Arc::new(NotificationCenter::new());
    let service = HolidayService::new(api.clone(), cache.clone());
    let form = Arc::new(HolidayForm::mount(
        service.clone(),
        notifications.clone(),
        &FixedClock(today()),
    ));

    TestPage {
        form,
        service,
        cache,
        api,
        notifications,
    }
}
