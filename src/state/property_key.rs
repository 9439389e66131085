// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property identity.

use std::fmt;

/// Identity of a property: its id and the zone it belongs to.
///
/// Zone 0 addresses device-wide properties.
///
/// # Examples
///
/// ```
/// use ariston_lib::state::PropertyKey;
/// use ariston_lib::types::ThermostatProperty;
///
/// let key = PropertyKey::new(ThermostatProperty::ZoneMode, 2);
/// assert_eq!(key.id(), "ZoneMode");
/// assert_eq!(key.zone(), 2);
/// assert_eq!(key.to_string(), "ZoneMode@2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    id: String,
    zone: u32,
}

impl PropertyKey {
    /// Creates a new property key.
    #[must_use]
    pub fn new(id: impl AsRef<str>, zone: u32) -> Self {
        Self {
            id: id.as_ref().to_string(),
            zone,
        }
    }

    /// Creates a key for a device-wide property.
    #[must_use]
    pub fn device(id: impl AsRef<str>) -> Self {
        Self::new(id, 0)
    }

    /// Returns the property id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the zone number.
    #[must_use]
    pub fn zone(&self) -> u32 {
        self.zone
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceProperty;

    #[test]
    fn device_key_is_zone_zero() {
        let key = PropertyKey::device(DeviceProperty::PlantMode);
        assert_eq!(key, PropertyKey::new("PlantMode", 0));
    }

    #[test]
    fn zone_is_part_of_identity() {
        assert_ne!(
            PropertyKey::new("ZoneMode", 1),
            PropertyKey::new("ZoneMode", 2)
        );
    }
}
