use std::net::Ipv4Addr;

use crate::models::Manufacturer;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },
    /// The address does not fit the manufacturer's format.
    #[error("{reason}")]
    InvalidAddress { reason: &'static str },
    /// The channel exceeds the device's declared channel count.
    #[error("Channel {channel} is out of range; device has {channels} channel(s)")]
    ChannelOutOfRange { channel: u16, channels: u16 },
}

/// Fields checked before a device definition is sent to the hub.
#[derive(Debug, Clone, Copy)]
pub struct DeviceDraft<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub mfg: Manufacturer,
    pub address: &'a str,
    pub channel: u16,
    pub channels: u16,
}

/// Validates a device definition, returning the first failure encountered.
///
/// The check order is fixed so rejection messages are deterministic:
/// required fields (name, then location), then the manufacturer's address
/// rules, then the channel range for multi-channel manufacturers.
pub fn validate_device(draft: &DeviceDraft<'_>) -> Result<(), ValidationError> {
    if draft.name.is_empty() {
        return Err(ValidationError::MissingField { field: "Name" });
    }
    if draft.location.is_empty() {
        return Err(ValidationError::MissingField { field: "Location" });
    }

    match draft.mfg {
        Manufacturer::X10 => validate_x10_address(draft.address)?,
        Manufacturer::TPLink => validate_tplink_address(draft.address)?,
        Manufacturer::Meross => validate_meross_address(draft.address)?,
    }

    // X10 modules are single-channel; the hub ignores the field for them
    if !matches!(draft.mfg, Manufacturer::X10) && draft.channel >= draft.channels {
        return Err(ValidationError::ChannelOutOfRange {
            channel: draft.channel,
            channels: draft.channels,
        });
    }

    Ok(())
}

/// An X10 address is a house-device code, A1-A16 through L1-L16.
/// Case-insensitive on the wire, so the check runs on the lowercased form.
fn validate_x10_address(address: &str) -> Result<(), ValidationError> {
    let address = address.to_lowercase();

    if address.len() < 2 || address.len() > 3 {
        return Err(ValidationError::InvalidAddress {
            reason: "Invalid address: must be 2 or 3 characters",
        });
    }
    if !address.starts_with(|c| ('a'..='l').contains(&c)) {
        return Err(ValidationError::InvalidAddress {
            reason: "Invalid address: First character must be a-l",
        });
    }

    match address[1..].parse::<u32>() {
        Ok(code) if (1..=16).contains(&code) => Ok(()),
        _ => Err(ValidationError::InvalidAddress {
            reason: "Invalid address: Must be (A-L)(1-16)",
        }),
    }
}

/// TPLink devices are addressed by IPv4 in older firmware and by MAC after
/// newer discovery versions, so either shape is accepted.
fn validate_tplink_address(address: &str) -> Result<(), ValidationError> {
    if address.parse::<Ipv4Addr>().is_ok() || is_mac_address(address) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAddress {
            reason: "Invalid IP or MAC address",
        })
    }
}

/// A Meross UUID looks like a GUID without hyphens but fails a real GUID
/// test, so the check is empirical: exactly 32 lowercase hex digits.
fn validate_meross_address(address: &str) -> Result<(), ValidationError> {
    if address.len() != 32 {
        return Err(ValidationError::InvalidAddress {
            reason: "Wrong length UUID for Meross device",
        });
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(ValidationError::InvalidAddress {
            reason: "Invalid UUID for Meross device",
        });
    }

    Ok(())
}

/// Six hex octets separated by colons or hyphens, 17 characters total.
fn is_mac_address(address: &str) -> bool {
    if address.len() != 17 {
        return false;
    }

    address.bytes().enumerate().all(|(i, byte)| {
        if i % 3 == 2 {
            byte == b':' || byte == b'-'
        } else {
            byte.is_ascii_hexdigit()
        }
    })
}
