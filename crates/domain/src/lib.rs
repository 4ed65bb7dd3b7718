//! # casita-domain
//!
//! Pure domain model for the casita home console.
//!
//! ## Responsibilities
//! - Define **Devices** (named appliances with an on/off state and a fixed kind)
//! - Define the **Roster** (the single owning container for all devices)
//! - Define the **Registry** (live-instance tally across the process)
//! - Define the **Schedule** (one pending device action per hour of day)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod registry;
pub mod roster;
pub mod schedule;
