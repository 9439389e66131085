// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property value parsing.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::features::FeatureSet;
use crate::state::PropertyKey;
use crate::types::{ItemValue, PropertyField};

/// One property of a device, as returned by `dataItems/{gw}/get`.
///
/// Only `id` and `zone` are guaranteed; every other field depends on the kind
/// of property. Discrete properties carry `options`/`optTexts`, numeric ones
/// carry `unit`, `min`, `max`, `step` and `decimals`, time-limited overrides
/// carry `expiresOn`.
///
/// # Examples
///
/// ```
/// use ariston_lib::response::PropertyValue;
/// use ariston_lib::types::ItemValue;
///
/// let json = r#"{"id": "ZoneComfortTemp", "zone": 1, "value": 21.5, "unit": "°C", "min": 10, "max": 30, "step": 0.5}"#;
/// let property: PropertyValue = serde_json::from_str(json).unwrap();
///
/// assert_eq!(property.value, Some(ItemValue::Float(21.5)));
/// assert_eq!(property.unit.as_deref(), Some("°C"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    /// Property identifier.
    pub id: String,

    /// Zone number, 0 for device-wide properties.
    #[serde(default)]
    pub zone: u32,

    /// Current value; `None` when the plant does not report it.
    #[serde(default)]
    pub value: Option<ItemValue>,

    /// Allowed discrete values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ItemValue>>,

    /// Labels matching [`options`](Self::options) one to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_texts: Option<Vec<String>>,

    /// Measurement unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Increment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,

    /// Displayed decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,

    /// Expiry of a time-limited override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
}

impl PropertyValue {
    /// Creates a property with a value and no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, zone: u32, value: impl Into<ItemValue>) -> Self {
        Self {
            id: id.into(),
            zone,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Returns the identity of this property.
    #[must_use]
    pub fn key(&self) -> PropertyKey {
        PropertyKey::new(&self.id, self.zone)
    }

    /// Returns a copy of this property carrying another value.
    ///
    /// Metadata is kept so that the copy can replace the original wholesale.
    #[must_use]
    pub fn with_value(&self, value: ItemValue) -> Self {
        Self {
            value: Some(value),
            ..self.clone()
        }
    }

    /// Returns the label of the current value, for discrete properties.
    #[must_use]
    pub fn value_text(&self) -> Option<&str> {
        let value = self.value.as_ref()?;
        let index = self
            .options
            .as_ref()?
            .iter()
            .position(|o| o == value || o.as_i64().is_some_and(|o| Some(o) == value.as_i64()))?;
        self.opt_texts.as_ref()?.get(index).map(String::as_str)
    }

    /// Returns the expiry of a time-limited override.
    ///
    /// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS` timestamps
    /// (interpreted as UTC).
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.expires_on.as_deref()?;
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
    }

    /// Returns a single field as JSON.
    ///
    /// `None` means the field is absent for this property.
    #[must_use]
    pub fn field(&self, field: PropertyField) -> Option<serde_json::Value> {
        match field {
            PropertyField::Value => self.value.as_ref().and_then(to_json),
            PropertyField::Options => self.options.as_ref().and_then(to_json),
            PropertyField::OptTexts => self.opt_texts.as_ref().and_then(to_json),
            PropertyField::Unit => self.unit.as_ref().and_then(to_json),
            PropertyField::Min => self.min.as_ref().and_then(to_json),
            PropertyField::Max => self.max.as_ref().and_then(to_json),
            PropertyField::Step => self.step.as_ref().and_then(to_json),
            PropertyField::Decimals => self.decimals.as_ref().and_then(to_json),
            PropertyField::Zone => to_json(&self.zone),
            PropertyField::ExpiresOn => self.expires_on.as_ref().and_then(to_json),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

/// Response of `dataItems/{gw}/get`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertiesResponse {
    /// The requested properties that the plant reported.
    #[serde(default)]
    pub items: Vec<PropertyValue>,

    /// The feature set, when echoed back by the server.
    #[serde(default)]
    pub features: Option<FeatureSet>,
}

impl PropertiesResponse {
    /// Indexes the items by identity.
    ///
    /// If the server reports the same identity twice, the last one wins.
    #[must_use]
    pub fn into_map(self) -> HashMap<PropertyKey, PropertyValue> {
        self.items.into_iter().map(|p| (p.key(), p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn discrete_value_text() {
        let property: PropertyValue = serde_json::from_value(json!({
            "id": "PlantMode",
            "zone": 0,
            "value": 1,
            "options": [0, 1, 5],
            "optTexts": ["Summer", "Winter", "Off"]
        }))
        .unwrap();
        assert_eq!(property.value_text(), Some("Winter"));

        let written = property.with_value(ItemValue::Float(5.0));
        assert_eq!(written.value_text(), Some("Off"));
    }

    #[test]
    fn null_value_is_none() {
        let property: PropertyValue =
            serde_json::from_value(json!({"id": "OutsideTemp", "value": null})).unwrap();
        assert_eq!(property.zone, 0);
        assert!(property.value.is_none());
        assert!(property.field(PropertyField::Value).is_none());
    }

    #[test]
    fn with_value_keeps_metadata() {
        let mut original = PropertyValue::new("ZoneComfortTemp", 1, 20.0);
        original.unit = Some("°C".to_string());
        let updated = original.with_value(ItemValue::Float(22.0));
        assert_eq!(updated.unit, original.unit);
        assert_eq!(updated.value, Some(ItemValue::Float(22.0)));
        assert_eq!(updated.key(), original.key());
    }

    #[test]
    fn expires_at_accepts_both_formats() {
        let mut property = PropertyValue::new("ZoneDeroga", 1, true);
        property.expires_on = Some("2024-03-01T10:00:00Z".to_string());
        assert!(property.expires_at().is_some());
        property.expires_on = Some("2024-03-01T10:00:00".to_string());
        assert!(property.expires_at().is_some());
        property.expires_on = Some("soon".to_string());
        assert!(property.expires_at().is_none());
    }

    #[test]
    fn duplicate_items_last_wins() {
        let response: PropertiesResponse = serde_json::from_value(json!({
            "items": [
                {"id": "DhwTemp", "zone": 0, "value": 40},
                {"id": "DhwTemp", "zone": 0, "value": 45},
                {"id": "ZoneMode", "zone": 1, "value": 3}
            ]
        }))
        .unwrap();
        let map = response.into_map();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map[&PropertyKey::new("DhwTemp", 0)].value,
            Some(ItemValue::Integer(45))
        );
    }

    #[test]
    fn field_lookup() {
        let mut property = PropertyValue::new("DhwTemp", 0, 45.0);
        property.max = Some(65.0);
        assert_eq!(property.field(PropertyField::Max), Some(json!(65.0)));
        assert_eq!(property.field(PropertyField::Zone), Some(json!(0)));
        assert!(property.field(PropertyField::Min).is_none());
    }
}
