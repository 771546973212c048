//! Header banner entities and the daily visibility window.

pub mod clock;
pub mod model;

pub use clock::{ClockTime, minute_of_day};
pub use model::{BannerState, HeaderBanner, NewBanner};
