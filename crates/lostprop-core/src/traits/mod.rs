//! Core traits defined in `lostprop-core` and implemented by other crates.

pub mod notifier;

pub use notifier::ChangeNotifier;
