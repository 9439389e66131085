// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property item derivation.

use serde::Serialize;

use crate::features::FeatureSet;
use crate::types::{DeviceProperty, ThermostatProperty};

/// One `{id, zn}` entry of a property read request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRequest {
    /// Property id.
    pub id: &'static str,
    /// Zone number.
    pub zn: u32,
}

/// Builds the items of a property read request.
///
/// Every [`DeviceProperty`] is requested at zone 0, then every
/// [`ThermostatProperty`] once per zone of the feature set, in zone order.
#[must_use]
pub fn request_items(features: &FeatureSet) -> Vec<ItemRequest> {
    let device = DeviceProperty::ALL.iter().map(|p| ItemRequest {
        id: p.as_str(),
        zn: 0,
    });
    let zones = features.zones.iter().flat_map(|zone| {
        ThermostatProperty::ALL.iter().map(move |p| ItemRequest {
            id: p.as_str(),
            zn: zone.num,
        })
    });
    device.chain(zones).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Zone;

    #[test]
    fn no_zones_yields_device_properties_only() {
        let items = request_items(&FeatureSet::default());
        assert_eq!(items.len(), DeviceProperty::ALL.len());
        assert!(items.iter().all(|i| i.zn == 0));
    }

    #[test]
    fn two_zones_yield_d_plus_two_t() {
        let features = FeatureSet::with_zones(vec![Zone::new(1), Zone::new(2)]);
        let items = request_items(&features);

        assert_eq!(items.len(), 12 + 2 * 7);
        assert_eq!(items.iter().filter(|i| i.zn == 1).count(), 7);
        assert_eq!(items.iter().filter(|i| i.zn == 2).count(), 7);
    }

    #[test]
    fn uses_reported_zone_numbers() {
        let features = FeatureSet::with_zones(vec![Zone::new(4)]);
        let items = request_items(&features);
        assert_eq!(
            items.last(),
            Some(&ItemRequest {
                id: "ZoneDeroga",
                zn: 4
            })
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let features = FeatureSet::with_zones(vec![Zone::new(1), Zone::new(2)]);
        assert_eq!(request_items(&features), request_items(&features.clone()));
    }

    #[test]
    fn serializes_as_id_and_zn() {
        let json = serde_json::to_value(ItemRequest {
            id: "PlantMode",
            zn: 0,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"id": "PlantMode", "zn": 0}));
    }
}
