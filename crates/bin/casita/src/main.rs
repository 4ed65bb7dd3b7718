//! # casita — interactive smart-home console
//!
//! Composition root that wires the storage adapter to the home service and
//! runs the menu loop over stdin/stdout.
//!
//! ## Responsibilities
//! - Load configuration (`casita.toml`, env vars)
//! - Initialize tracing
//! - Build the initial roster and registry
//! - Construct the file store and the home service
//! - Run the interactive menu until exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use casita::config::Config;
use casita::menu::Menu;
use casita_adapter_storage_file::FileDeviceStore;
use casita_app::services::HomeService;
use casita_domain::device::Device;
use casita_domain::registry::DeviceRegistry;
use casita_domain::roster::DeviceRoster;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter =
        EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = DeviceRegistry::new();
    let mut roster = DeviceRoster::new();
    for device in &config.devices {
        roster.push(Device::new(device.kind, device.name.clone(), &registry));
    }

    let store = FileDeviceStore::new(&config.storage.path);
    let mut service = HomeService::new(roster, registry, store);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), std::io::stderr());
    menu.run(&mut service).context("console loop failed")?;

    Ok(())
}
