pub mod holiday_service;
pub mod notification_service;

pub use holiday_service::*;
pub use notification_service::*;
