//! PostgreSQL implementations of the store traits.

pub mod banner;
pub mod notification;
pub mod report;
pub mod user;

pub use banner::BannerRepository;
pub use notification::NotificationRepository;
pub use report::ReportRepository;
pub use user::UserRepository;
