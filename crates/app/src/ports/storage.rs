//! Storage port — how the application persists and restores the roster.

use casita_domain::error::HomeError;
use casita_domain::registry::DeviceRegistry;
use casita_domain::roster::DeviceRoster;

/// Persists the device roster and reconstructs it later.
pub trait DeviceStore {
    /// Write the whole roster, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Storage`] when the destination cannot be
    /// opened or written.
    fn save(&self, roster: &DeviceRoster) -> Result<(), HomeError>;

    /// Replace the roster with the persisted devices, registering each new
    /// instance with `registry`. Returns the number of devices loaded.
    ///
    /// The roster must be left untouched when the source cannot be opened.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Storage`] when the source cannot be opened
    /// or read.
    fn load(
        &self,
        roster: &mut DeviceRoster,
        registry: &DeviceRegistry,
    ) -> Result<usize, HomeError>;
}

impl<T: DeviceStore + ?Sized> DeviceStore for &T {
    fn save(&self, roster: &DeviceRoster) -> Result<(), HomeError> {
        (**self).save(roster)
    }

    fn load(
        &self,
        roster: &mut DeviceRoster,
        registry: &DeviceRegistry,
    ) -> Result<usize, HomeError> {
        (**self).load(roster, registry)
    }
}
