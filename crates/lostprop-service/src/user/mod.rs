//! Account and profile services.

pub mod account;
pub mod service;

pub use account::{AccountService, AuthSession, LoginInput, RegisterInput};
pub use service::UserService;
