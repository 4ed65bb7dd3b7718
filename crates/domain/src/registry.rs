//! Registry — a live tally of device instances across the process.
//!
//! The registry is an explicit, cloneable handle rather than hidden global
//! state: the composition root creates one at startup and threads it through
//! every construction site, so tests can each own an isolated count.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counter of currently-live devices.
///
/// Cloning the handle shares the underlying count. The counter is atomic so
/// the handle stays sound if a host ever embeds it in a threaded context.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    live: Arc<AtomicUsize>,
}

impl DeviceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of devices built from this registry that are still alive.
    #[must_use]
    pub fn count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Record one construction. The returned guard records the matching
    /// destruction when it is dropped.
    #[must_use]
    pub fn register(&self) -> RegistryGuard {
        self.live.fetch_add(1, Ordering::SeqCst);
        RegistryGuard {
            live: Arc::clone(&self.live),
        }
    }
}

/// Decrements the live count on drop. Held by every [`Device`](crate::device::Device).
#[derive(Debug)]
pub struct RegistryGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for RegistryGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_zero() {
        let registry = DeviceRegistry::new();
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn should_count_live_guards() {
        let registry = DeviceRegistry::new();
        let a = registry.register();
        let b = registry.register();
        assert_eq!(registry.count(), 2);
        drop(a);
        assert_eq!(registry.count(), 1);
        drop(b);
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn should_share_count_between_cloned_handles() {
        let registry = DeviceRegistry::new();
        let other = registry.clone();
        let _guard = registry.register();
        assert_eq!(other.count(), 1);
    }

    #[test]
    fn should_isolate_counts_between_separate_registries() {
        let a = DeviceRegistry::new();
        let b = DeviceRegistry::new();
        let _guard = a.register();
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 0);
    }
}
