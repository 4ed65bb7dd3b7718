//! # casita-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`DeviceStore` port** that persistence adapters implement
//! - Provide the **`HomeService`** use-cases behind the interactive menu
//!   (switching, scheduling, persistence, inspection)
//! - Provide the **clock simulator** that sweeps the schedule over a day
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `casita-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
