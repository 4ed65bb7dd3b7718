//! Device — a named appliance with an on/off state and a fixed kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::{DeviceRegistry, RegistryGuard};

/// The closed set of appliance kinds. No new kinds appear at runtime;
/// the tag string of each variant doubles as its persisted type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Light,
    Fan,
    AirConditioner,
    Heater,
    SmartPlug,
    #[serde(rename = "TV")]
    Tv,
}

impl DeviceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Light,
        Self::Fan,
        Self::AirConditioner,
        Self::Heater,
        Self::SmartPlug,
        Self::Tv,
    ];

    /// The fixed tag string used for display and persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::AirConditioner => "AirConditioner",
            Self::Heater => "Heater",
            Self::SmartPlug => "SmartPlug",
            Self::Tv => "TV",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type tag does not name one of the six kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for DeviceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" => Ok(Self::Light),
            "Fan" => Ok(Self::Fan),
            "AirConditioner" => Ok(Self::AirConditioner),
            "Heater" => Ok(Self::Heater),
            "SmartPlug" => Ok(Self::SmartPlug),
            "TV" => Ok(Self::Tv),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// An appliance instance. The name is immutable after construction and is
/// the join key for scheduling and persistence lookups.
///
/// Devices are not `Clone`: every live instance is counted by the
/// [`DeviceRegistry`] it was built from, and the count drops when the
/// instance does.
#[derive(Debug)]
pub struct Device {
    name: String,
    kind: DeviceKind,
    is_on: bool,
    _guard: RegistryGuard,
}

impl Device {
    /// Build a device in the off state, registering it as live.
    #[must_use]
    pub fn new(kind: DeviceKind, name: impl Into<String>, registry: &DeviceRegistry) -> Self {
        Self {
            name: name.into(),
            kind,
            is_on: false,
            _guard: registry.register(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    /// Silent state overwrite, used when reconstructing from persisted data.
    pub fn set_status(&mut self, on: bool) {
        self.is_on = on;
    }

    /// Read-only view of the internal fields, for trusted callers that
    /// want to display them without going through the usual accessors.
    #[must_use]
    pub fn inspect(&self) -> DeviceSnapshot<'_> {
        DeviceSnapshot {
            name: &self.name,
            kind: self.kind,
            is_on: self.is_on,
        }
    }
}

/// Value equality: two devices are the same appliance when both name and
/// kind match. State does not participate.
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Device {}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {}",
            self.name,
            if self.is_on { "ON" } else { "OFF" }
        )
    }
}

/// Read-only snapshot of a device's internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSnapshot<'a> {
    pub name: &'a str,
    pub kind: DeviceKind,
    pub is_on: bool,
}
