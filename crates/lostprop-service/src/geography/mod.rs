//! Indonesian administrative-region lookups for the report form.

pub mod client;

pub use client::{Region, RegionClient};
