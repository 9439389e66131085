// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device feature sets.
//!
//! The features endpoint reports the capabilities of a plant together with
//! its zone list. The whole document is sent back verbatim with every
//! property read and write, so unknown keys are preserved as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::DeviceFeature;

/// Capability flags and zone list of a device.
///
/// # Examples
///
/// ```
/// use ariston_lib::FeatureSet;
/// use ariston_lib::types::DeviceFeature;
///
/// let features: FeatureSet = serde_json::from_value(serde_json::json!({
///     "zones": [{"num": 1, "name": "Living"}],
///     "hasBoiler": true,
///     "hasSlp": false
/// })).unwrap();
///
/// assert!(features.is_available(DeviceFeature::HasBoiler));
/// assert!(!features.is_available(DeviceFeature::HasSlp));
/// assert_eq!(features.zone_numbers(), vec![1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Zones of the plant.
    #[serde(default)]
    pub zones: Vec<Zone>,

    /// Every other feature key, as reported.
    #[serde(flatten)]
    pub flags: Map<String, Value>,
}

impl FeatureSet {
    /// Creates a feature set from a zone list and no flags.
    #[must_use]
    pub fn with_zones(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            flags: Map::new(),
        }
    }

    /// Sets a flag, replacing any previous value.
    #[must_use]
    pub fn with_flag(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.flags.insert(key.as_ref().to_string(), value.into());
        self
    }

    /// Returns the raw value of a feature key.
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.flags.get(key.as_ref())
    }

    /// Returns `true` if the feature is present and truthy.
    ///
    /// Booleans are taken as-is, numbers are truthy when non-zero, strings and
    /// arrays when non-empty. The `zones` key is truthy when the plant has at
    /// least one zone.
    #[must_use]
    pub fn is_available(&self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        if key == DeviceFeature::Zones.as_str() {
            return !self.zones.is_empty();
        }
        match self.flags.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(_)) => true,
        }
    }

    /// Returns `true` if the plant has a hot water boiler.
    #[must_use]
    pub fn has_boiler(&self) -> bool {
        self.is_available(DeviceFeature::HasBoiler)
    }

    /// Returns `true` if the plant supports smart load profiles.
    #[must_use]
    pub fn has_slp(&self) -> bool {
        self.is_available(DeviceFeature::HasSlp)
    }

    /// Returns the zone numbers in reported order.
    #[must_use]
    pub fn zone_numbers(&self) -> Vec<u32> {
        self.zones.iter().map(|z| z.num).collect()
    }

    /// Returns the zone with the given number.
    #[must_use]
    pub fn zone(&self, num: u32) -> Option<&Zone> {
        self.zones.iter().find(|z| z.num == num)
    }
}

/// A numbered climate sub-area of a plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone number, starting at 1.
    pub num: u32,

    /// Zone name, when the plant supports names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the zone has a room sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_sens: Option<bool>,

    /// Whether geofencing may override the zone program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_deroga: Option<bool>,

    /// Every other zone key, as reported.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Zone {
    /// Creates a zone with the given number and no metadata.
    #[must_use]
    pub fn new(num: u32) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }

    /// Sets the zone name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = json!({
            "zones": [{"num": 1, "name": "Day", "roomSens": true, "isHidden": false}],
            "hasBoiler": true,
            "futureFlag": {"nested": 1}
        });
        let features: FeatureSet = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(features.zones[0].room_sens, Some(true));
        assert_eq!(serde_json::to_value(&features).unwrap(), raw);
    }

    #[test]
    fn missing_zones_defaults_to_empty() {
        let features: FeatureSet = serde_json::from_value(json!({"hasSlp": 1})).unwrap();
        assert!(features.zones.is_empty());
        assert!(features.has_slp());
        assert!(!features.is_available(DeviceFeature::Zones));
    }

    #[test]
    fn truthiness_rules() {
        let features = FeatureSet::default()
            .with_flag("zero", 0)
            .with_flag("empty", "")
            .with_flag("off", false)
            .with_flag("null", Value::Null)
            .with_flag("provider", "meteo");
        assert!(!features.is_available("zero"));
        assert!(!features.is_available("empty"));
        assert!(!features.is_available("off"));
        assert!(!features.is_available("null"));
        assert!(!features.is_available("absent"));
        assert!(features.is_available("provider"));
    }

    #[test]
    fn zone_lookup() {
        let features = FeatureSet::with_zones(vec![Zone::new(1), Zone::new(3).with_name("Night")]);
        assert_eq!(features.zone_numbers(), vec![1, 3]);
        assert_eq!(features.zone(3).and_then(|z| z.name.as_deref()), Some("Night"));
        assert!(features.zone(2).is_none());
    }
}
