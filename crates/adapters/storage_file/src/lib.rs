//! # casita-adapter-storage-file
//!
//! Flat-file persistence adapter implementing the [`DeviceStore`] port with
//! the line-oriented `<name>,<type>,<status>` format.
//!
//! ## Dependency rule
//! Depends on `casita-app` (port traits) and `casita-domain` only.

mod codec;
mod error;

pub use error::StorageError;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use casita_app::ports::DeviceStore;
use casita_domain::device::Device;
use casita_domain::error::HomeError;
use casita_domain::registry::DeviceRegistry;
use casita_domain::roster::DeviceRoster;

/// Persists the roster to a single plain-text file, one record per line.
#[derive(Debug)]
pub struct FileDeviceStore {
    path: PathBuf,
}

impl FileDeviceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeviceStore for FileDeviceStore {
    fn save(&self, roster: &DeviceRoster) -> Result<(), HomeError> {
        let file = File::create(&self.path).map_err(StorageError::from)?;
        let mut out = BufWriter::new(file);
        for device in roster {
            writeln!(out, "{}", codec::encode(device)).map_err(StorageError::from)?;
        }
        out.flush().map_err(StorageError::from)?;
        tracing::info!(path = %self.path.display(), devices = roster.len(), "saved roster");
        Ok(())
    }

    fn load(
        &self,
        roster: &mut DeviceRoster,
        registry: &DeviceRegistry,
    ) -> Result<usize, HomeError> {
        // Open before touching the roster so an unreadable file leaves the
        // current devices intact.
        let file = File::open(&self.path).map_err(StorageError::from)?;

        roster.clear();
        let mut loaded = 0;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(StorageError::from)?;
            if let Some((name, kind, on)) = codec::decode(&line) {
                let mut device = Device::new(kind, name, registry);
                device.set_status(on);
                roster.push(device);
                loaded += 1;
            } else if !line.is_empty() {
                tracing::warn!(record = %line, "skipping record with unknown device kind");
            }
        }
        tracing::info!(path = %self.path.display(), devices = loaded, "loaded roster");
        Ok(loaded)
    }
}
