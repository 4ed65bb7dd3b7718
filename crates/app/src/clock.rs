//! Clock simulator — a deterministic sweep over hours 0 through 24.
//!
//! This is not a real-time clock. The sweep visits every hour in order,
//! applies any scheduled action whose hour matches, and reports each tick
//! to an observer so front-ends can render the passage of time.

use casita_domain::roster::DeviceRoster;
use casita_domain::schedule::Schedule;

/// Last hour visited by the sweep. One past the last schedulable hour;
/// hour 24 is still reported even though entries are normally made for 0–23.
pub const FINAL_HOUR: u8 = 24;

/// One step of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTick {
    pub hour: u8,
    /// The scheduled action applied at this hour, if any matched a device.
    pub applied: Option<AppliedAction>,
}

/// A schedule entry that found its target device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedAction {
    pub device: String,
    pub turned_on: bool,
}

/// Sweep hours `0..=24`, applying each scheduled action to the first device
/// in the roster whose name matches. Entries naming no known device are
/// skipped without error.
pub fn run(
    roster: &mut DeviceRoster,
    schedule: &Schedule,
    mut observe: impl FnMut(&ClockTick),
) {
    for hour in 0..=FINAL_HOUR {
        let applied = schedule.get(hour).and_then(|entry| {
            let device = roster.find_by_name_mut(&entry.device)?;
            if entry.turn_on {
                device.turn_on();
            } else {
                device.turn_off();
            }
            tracing::info!(
                device = %entry.device,
                hour,
                turn_on = entry.turn_on,
                "applied scheduled action"
            );
            Some(AppliedAction {
                device: entry.device.clone(),
                turned_on: entry.turn_on,
            })
        });
        observe(&ClockTick { hour, applied });
    }
}
