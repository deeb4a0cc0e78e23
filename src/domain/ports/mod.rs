pub mod clock;
pub mod holiday_api;

pub use clock::*;
pub use holiday_api::*;
