//! Line codec for the `<name>,<type>,<status>` record format.
//!
//! One record per line, comma-separated, status rendered as `1`/`0`.
//! No header, no escaping, no version marker. Decoding is deliberately
//! tolerant: missing fields read as empty and only an unrecognized type
//! tag disqualifies a record.

use casita_domain::device::{Device, DeviceKind};

pub(crate) fn encode(device: &Device) -> String {
    format!(
        "{},{},{}",
        device.name(),
        device.kind(),
        u8::from(device.is_on())
    )
}

/// Decode one line into (name, kind, status). Returns `None` when the type
/// field names no known kind — including blank and short lines, whose
/// missing fields decode as empty strings.
pub(crate) fn decode(line: &str) -> Option<(String, DeviceKind, bool)> {
    let mut fields = line.splitn(3, ',');
    let name = fields.next().unwrap_or_default();
    let tag = fields.next().unwrap_or_default();
    let status = fields.next().unwrap_or_default();

    let kind = tag.parse::<DeviceKind>().ok()?;
    Some((name.to_string(), kind, status.trim() == "1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_domain::registry::DeviceRegistry;

    #[test]
    fn should_encode_name_tag_and_status_flag() {
        let registry = DeviceRegistry::new();
        let mut device = Device::new(DeviceKind::AirConditioner, "Living Room AC", &registry);
        assert_eq!(encode(&device), "Living Room AC,AirConditioner,0");
        device.turn_on();
        assert_eq!(encode(&device), "Living Room AC,AirConditioner,1");
    }

    #[test]
    fn should_decode_well_formed_record() {
        assert_eq!(
            decode("Bedroom Light,Light,1"),
            Some(("Bedroom Light".to_string(), DeviceKind::Light, true))
        );
        assert_eq!(
            decode("Smart TV,TV,0"),
            Some(("Smart TV".to_string(), DeviceKind::Tv, false))
        );
    }

    #[test]
    fn should_reject_unknown_type_tag() {
        assert_eq!(decode("Toast,Toaster,1"), None);
    }

    #[test]
    fn should_reject_blank_line() {
        assert_eq!(decode(""), None);
    }

    #[test]
    fn should_reject_line_with_name_only() {
        // No comma at all: the whole line reads as the name, the tag is
        // empty, and no kind matches.
        assert_eq!(decode("Bedroom Light"), None);
    }

    #[test]
    fn should_default_status_to_off_for_missing_field() {
        assert_eq!(
            decode("Ceiling Fan,Fan"),
            Some(("Ceiling Fan".to_string(), DeviceKind::Fan, false))
        );
    }

    #[test]
    fn should_default_status_to_off_for_garbage_field() {
        assert_eq!(
            decode("Ceiling Fan,Fan,banana"),
            Some(("Ceiling Fan".to_string(), DeviceKind::Fan, false))
        );
    }

    #[test]
    fn should_accept_empty_name() {
        assert_eq!(
            decode(",Heater,1"),
            Some((String::new(), DeviceKind::Heater, true))
        );
    }
}
