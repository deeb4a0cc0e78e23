pub mod holiday;
pub mod notification;
pub mod reference;

pub use holiday::*;
pub use notification::*;
pub use reference::*;
