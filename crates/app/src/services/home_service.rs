//! Home service — the use-cases behind the interactive menu.

use casita_domain::device::{Device, DeviceSnapshot};
use casita_domain::error::{HomeError, NotFoundError};
use casita_domain::registry::DeviceRegistry;
use casita_domain::roster::DeviceRoster;
use casita_domain::schedule::{Schedule, ScheduleEntry};

use crate::clock::{self, ClockTick};
use crate::ports::DeviceStore;

/// Owns the roster, the schedule, and a registry handle, and drives them
/// through the persistence port. One instance lives for the whole run.
pub struct HomeService<S> {
    roster: DeviceRoster,
    schedule: Schedule,
    registry: DeviceRegistry,
    store: S,
}

impl<S: DeviceStore> HomeService<S> {
    /// Create a service around an initial roster.
    pub fn new(roster: DeviceRoster, registry: DeviceRegistry, store: S) -> Self {
        Self {
            roster,
            schedule: Schedule::new(),
            registry,
            store,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &DeviceRoster {
        &self.roster
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn device_mut(&mut self, index: usize) -> Result<&mut Device, HomeError> {
        self.roster.get_mut(index).ok_or_else(|| {
            NotFoundError {
                entity: "device",
                key: index.to_string(),
            }
            .into()
        })
    }

    /// Switch a device on by roster index and return its status line.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when `index` is out of range.
    #[tracing::instrument(skip(self))]
    pub fn turn_on(&mut self, index: usize) -> Result<String, HomeError> {
        let device = self.device_mut(index)?;
        device.turn_on();
        tracing::info!(device = %device.name(), "turned on");
        Ok(device.to_string())
    }

    /// Switch a device off by roster index and return its status line.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when `index` is out of range.
    #[tracing::instrument(skip(self))]
    pub fn turn_off(&mut self, index: usize) -> Result<String, HomeError> {
        let device = self.device_mut(index)?;
        device.turn_off();
        tracing::info!(device = %device.name(), "turned off");
        Ok(device.to_string())
    }

    /// One `"<name> is ON|OFF"` line per device, in roster order.
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        self.roster.iter().map(ToString::to_string).collect()
    }

    /// Schedule the device at `index` to switch at `hour`, overwriting any
    /// entry already present for that hour. Returns the device name.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when `index` is out of range.
    pub fn schedule_device(
        &mut self,
        hour: u8,
        index: usize,
        turn_on: bool,
    ) -> Result<String, HomeError> {
        let name = self
            .roster
            .get(index)
            .ok_or_else(|| NotFoundError {
                entity: "device",
                key: index.to_string(),
            })?
            .name()
            .to_string();
        self.schedule.set(
            hour,
            ScheduleEntry {
                device: name.clone(),
                turn_on,
            },
        );
        tracing::info!(device = %name, hour, turn_on, "scheduled");
        Ok(name)
    }

    /// Run the 0..=24 clock sweep, reporting each tick to `observe`.
    pub fn run_clock(&mut self, observe: impl FnMut(&ClockTick)) {
        clock::run(&mut self.roster, &self.schedule, observe);
    }

    /// Persist the roster through the store.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Storage`] propagated from the store.
    #[tracing::instrument(skip(self))]
    pub fn save(&self) -> Result<(), HomeError> {
        self.store.save(&self.roster)
    }

    /// Replace the roster with the persisted devices. Returns how many
    /// were loaded. On failure to open the source the roster is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Storage`] propagated from the store.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self) -> Result<usize, HomeError> {
        self.store.load(&mut self.roster, &self.registry)
    }

    /// Live device count across the process, including instances outside
    /// this service built from the same registry.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.registry.count()
    }

    /// Read-only snapshot of a device's internal fields.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when `index` is out of range.
    pub fn inspect(&self, index: usize) -> Result<DeviceSnapshot<'_>, HomeError> {
        self.roster
            .get(index)
            .map(Device::inspect)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "device",
                    key: index.to_string(),
                }
                .into()
            })
    }
}
