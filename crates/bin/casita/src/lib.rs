//! Library surface of the casita binary — configuration and the menu loop
//! are exposed here so integration tests can drive them directly.

pub mod config;
pub mod menu;
