pub mod date_picker;
pub mod holiday_form;

pub use date_picker::*;
pub use holiday_form::*;
