//! SubSum-rs library: application logic for the subset-sum calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
pub mod version;
