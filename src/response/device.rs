// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list parsing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::DeviceAttribute;

/// One plant of the account, as returned by the device list endpoints.
///
/// The lite and detailed lists share the same identifying keys; any other key
/// is kept in [`extra`](Self::extra).
///
/// # Examples
///
/// ```
/// use ariston_lib::response::DeviceSummary;
/// use ariston_lib::types::DeviceAttribute;
///
/// let json = r#"{"gwId": "F0AD4E0590BD", "plantName": "Home", "gwLink": true}"#;
/// let device: DeviceSummary = serde_json::from_str(json).unwrap();
///
/// assert_eq!(device.gw_id, "F0AD4E0590BD");
/// assert_eq!(device.plant_name.as_deref(), Some("Home"));
/// assert_eq!(
///     device.attribute(DeviceAttribute::GwLink),
///     Some(serde_json::Value::Bool(true))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    /// Gateway identifier, used in every device-scoped path.
    pub gw_id: String,

    /// User-visible plant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_name: Option<String>,

    /// Gateway serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_serial: Option<String>,

    /// Gateway firmware version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_fw_ver: Option<String>,

    /// Every other key, as reported.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeviceSummary {
    /// Creates a summary for the given gateway id.
    #[must_use]
    pub fn new(gw_id: impl Into<String>) -> Self {
        Self {
            gw_id: gw_id.into(),
            ..Self::default()
        }
    }

    /// Sets the plant name.
    #[must_use]
    pub fn with_plant_name(mut self, name: impl Into<String>) -> Self {
        self.plant_name = Some(name.into());
        self
    }

    /// Returns the value of a fixed metadata key.
    #[must_use]
    pub fn attribute(&self, attribute: DeviceAttribute) -> Option<Value> {
        let typed = match attribute {
            DeviceAttribute::GwId => Some(&self.gw_id),
            DeviceAttribute::PlantName => self.plant_name.as_ref(),
            DeviceAttribute::GwSerial => self.gw_serial.as_ref(),
            DeviceAttribute::GwFwVer => self.gw_fw_ver.as_ref(),
            DeviceAttribute::GwLink | DeviceAttribute::GwSysType => {
                return self.extra.get(attribute.as_str()).cloned();
            }
        };
        typed.map(|s| Value::String(s.clone()))
    }

    /// Returns a display label combining name and serial.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.plant_name.as_deref().unwrap_or(&self.gw_id);
        match &self.gw_serial {
            Some(serial) => format!("{name} - {serial}"),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_device_list() {
        let json = r#"[
            {"gwId": "A1", "plantName": "Home", "gwSerial": "S1", "gwFwVer": "2.1"},
            {"gwId": "B2", "gwSysType": 3}
        ]"#;
        let devices: Vec<DeviceSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].gw_fw_ver.as_deref(), Some("2.1"));
        assert_eq!(
            devices[1].attribute(DeviceAttribute::GwSysType),
            Some(Value::from(3))
        );
        assert!(devices[1].attribute(DeviceAttribute::PlantName).is_none());
    }

    #[test]
    fn label_uses_serial_when_known() {
        let mut device = DeviceSummary::new("A1").with_plant_name("Home");
        assert_eq!(device.label(), "Home");
        device.gw_serial = Some("S1".to_string());
        assert_eq!(device.label(), "Home - S1");
        assert_eq!(DeviceSummary::new("Z9").label(), "Z9");
    }
}
