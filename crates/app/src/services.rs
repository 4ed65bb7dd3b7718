//! Application services — use-cases exposed to front-ends.

pub mod home_service;

pub use home_service::HomeService;
