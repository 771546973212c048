//! Shared value types.

pub mod pagination;
pub mod topic;

pub use pagination::{PageRequest, PageResponse};
pub use topic::Topic;
