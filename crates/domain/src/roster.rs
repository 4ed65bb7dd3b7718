//! Roster — the single owning container for all devices.
//!
//! Every device instance lives in exactly one roster. Other components hold
//! indices or short-lived references; nothing else ever takes ownership.

use crate::device::Device;

/// Ordered, owning collection of devices. Order is significant: it drives
/// the numbering in the interactive selector and the record order on disk.
#[derive(Debug, Default)]
pub struct DeviceRoster {
    devices: Vec<Device>,
}

impl DeviceRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, device: Device) {
        self.devices.push(device);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Device> {
        self.devices.get_mut(index)
    }

    /// First device with the given name, scanning in roster order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name() == name)
    }

    /// Mutable variant of [`find_by_name`](Self::find_by_name).
    #[must_use]
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// Drop every device, releasing their registry guards.
    pub fn clear(&mut self) {
        self.devices.clear();
    }
}

impl<'a> IntoIterator for &'a DeviceRoster {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;
    use crate::registry::DeviceRegistry;

    fn sample_roster(registry: &DeviceRegistry) -> DeviceRoster {
        let mut roster = DeviceRoster::new();
        roster.push(Device::new(DeviceKind::Light, "Bedroom Light", registry));
        roster.push(Device::new(DeviceKind::Fan, "Ceiling Fan", registry));
        roster.push(Device::new(DeviceKind::Tv, "Smart TV", registry));
        roster
    }

    #[test]
    fn should_preserve_insertion_order() {
        let registry = DeviceRegistry::new();
        let roster = sample_roster(&registry);
        let names: Vec<_> = roster.iter().map(Device::name).collect();
        assert_eq!(names, ["Bedroom Light", "Ceiling Fan", "Smart TV"]);
    }

    #[test]
    fn should_find_first_device_by_name() {
        let registry = DeviceRegistry::new();
        let mut roster = sample_roster(&registry);
        // Duplicate name with a different kind; the scan stops at the first.
        roster.push(Device::new(DeviceKind::Heater, "Ceiling Fan", &registry));
        let found = roster.find_by_name("Ceiling Fan").unwrap();
        assert_eq!(found.kind(), DeviceKind::Fan);
    }

    #[test]
    fn should_return_none_for_unknown_name() {
        let registry = DeviceRegistry::new();
        let roster = sample_roster(&registry);
        assert!(roster.find_by_name("Garage Door").is_none());
    }

    #[test]
    fn should_release_registry_guards_on_clear() {
        let registry = DeviceRegistry::new();
        let mut roster = sample_roster(&registry);
        assert_eq!(registry.count(), 3);
        roster.clear();
        assert!(roster.is_empty());
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn should_access_devices_by_index() {
        let registry = DeviceRegistry::new();
        let mut roster = sample_roster(&registry);
        assert_eq!(roster.get(1).unwrap().name(), "Ceiling Fan");
        roster.get_mut(1).unwrap().turn_on();
        assert!(roster.get(1).unwrap().is_on());
        assert!(roster.get(3).is_none());
    }
}
