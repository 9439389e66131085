// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use std::collections::{HashMap, HashSet};

use crate::features::FeatureSet;
use crate::response::{DeviceSummary, PropertyValue};
use crate::types::ItemValue;

use super::{PropertyChange, PropertyKey};

/// Cached mirror of one plant.
///
/// Properties are only ever replaced wholesale. A property with an in-flight
/// write is *pending*: [`merge`](Self::merge) leaves it untouched and only
/// [`commit_write`](Self::commit_write) or [`revert_write`](Self::revert_write)
/// resolve it.
///
/// Every write also takes a sequence number. A fetch started before a write
/// carries older data than the write, so
/// [`merge_since`](Self::merge_since) skips properties written after the
/// fetch began even once the write resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    attributes: DeviceSummary,
    features: FeatureSet,
    properties: HashMap<PropertyKey, PropertyValue>,
    pending: HashSet<PropertyKey>,
    write_seq: u64,
    written_at: HashMap<PropertyKey, u64>,
}

/// Result of merging a fetched property set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    /// Properties whose cached value changed, including removed ones.
    pub changes: Vec<PropertyChange>,
    /// Pending or recently written properties the merge left untouched.
    pub skipped: Vec<PropertyKey>,
}

impl DeviceState {
    /// Creates a state with no properties.
    #[must_use]
    pub fn new(attributes: DeviceSummary, features: FeatureSet) -> Self {
        Self {
            attributes,
            features,
            properties: HashMap::new(),
            pending: HashSet::new(),
            write_seq: 0,
            written_at: HashMap::new(),
        }
    }

    // ========== Metadata ==========

    /// Returns the device attributes.
    #[must_use]
    pub fn attributes(&self) -> &DeviceSummary {
        &self.attributes
    }

    /// Returns the feature set.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Replaces the feature set.
    pub fn set_features(&mut self, features: FeatureSet) {
        self.features = features;
    }

    // ========== Properties ==========

    /// Returns a cached property.
    #[must_use]
    pub fn property(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Returns the cached value of a property.
    #[must_use]
    pub fn value(&self, key: &PropertyKey) -> Option<&ItemValue> {
        self.properties.get(key).and_then(|p| p.value.as_ref())
    }

    /// Returns all cached properties.
    #[must_use]
    pub fn properties(&self) -> &HashMap<PropertyKey, PropertyValue> {
        &self.properties
    }

    /// Returns `true` if a write to the property is in flight.
    #[must_use]
    pub fn is_pending(&self, key: &PropertyKey) -> bool {
        self.pending.contains(key)
    }

    /// Returns the number of in-flight writes.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the sequence number of the latest write.
    ///
    /// Capture it before fetching and hand it to
    /// [`merge_since`](Self::merge_since).
    #[must_use]
    pub fn write_seq(&self) -> u64 {
        self.write_seq
    }

    /// Replaces the cached properties with a fetched set.
    ///
    /// Every non-pending property takes the fetched value, or disappears if
    /// the fetch did not report it. Pending properties keep their cached
    /// value.
    pub fn merge(&mut self, fetched: HashMap<PropertyKey, PropertyValue>) -> MergeOutcome {
        self.merge_since(fetched, self.write_seq)
    }

    /// Like [`merge`](Self::merge), for a fetch started at write sequence
    /// `since`.
    ///
    /// Properties written after `since` keep their cached value as well,
    /// since the fetched value predates the write.
    pub fn merge_since(
        &mut self,
        mut fetched: HashMap<PropertyKey, PropertyValue>,
        since: u64,
    ) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        let written = self
            .written_at
            .iter()
            .filter(|(_, seq)| **seq > since)
            .map(|(key, _)| key);
        let kept: HashSet<PropertyKey> = self.pending.iter().chain(written).cloned().collect();

        for key in &kept {
            fetched.remove(key);
            if let Some(current) = self.properties.get(key) {
                fetched.insert(key.clone(), current.clone());
            }
            outcome.skipped.push(key.clone());
        }

        for (key, new) in &fetched {
            if kept.contains(key) {
                continue;
            }
            if self.properties.get(key) != Some(new) {
                outcome
                    .changes
                    .push(PropertyChange::new(key.clone(), new.value.clone()));
            }
        }
        for key in self.properties.keys() {
            if !fetched.contains_key(key) {
                outcome.changes.push(PropertyChange::new(key.clone(), None));
            }
        }

        self.properties = fetched;
        outcome
    }

    // ========== Writes ==========

    /// Starts an optimistic write.
    ///
    /// Marks the property pending, installs a copy carrying `value`, and
    /// returns the replaced property so the caller can revert to it.
    /// Returns `None` if the property is not cached or already pending.
    pub fn begin_write(&mut self, key: &PropertyKey, value: ItemValue) -> Option<PropertyValue> {
        if self.pending.contains(key) {
            return None;
        }
        let previous = self.properties.get(key)?.clone();
        self.properties
            .insert(key.clone(), previous.with_value(value));
        self.pending.insert(key.clone());
        self.write_seq += 1;
        self.written_at.insert(key.clone(), self.write_seq);
        Some(previous)
    }

    /// Resolves a successful write, keeping the optimistic value.
    pub fn commit_write(&mut self, key: &PropertyKey) {
        self.pending.remove(key);
    }

    /// Resolves a failed write, restoring the property captured by
    /// [`begin_write`](Self::begin_write).
    pub fn revert_write(&mut self, previous: PropertyValue) {
        let key = previous.key();
        self.pending.remove(&key);
        self.properties.insert(key, previous);
    }

    /// Releases a pending mark without touching the cached value.
    pub(crate) fn release(&mut self, key: &PropertyKey) {
        self.pending.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(props: &[PropertyValue]) -> DeviceState {
        let mut state = DeviceState::new(DeviceSummary::new("GW"), FeatureSet::default());
        state.merge(props.iter().map(|p| (p.key(), p.clone())).collect());
        state
    }

    fn fetched(props: &[PropertyValue]) -> HashMap<PropertyKey, PropertyValue> {
        props.iter().map(|p| (p.key(), p.clone())).collect()
    }

    #[test]
    fn merge_replaces_and_reports_changes() {
        let mut state = state_with(&[
            PropertyValue::new("DhwTemp", 0, 40.0),
            PropertyValue::new("OutsideTemp", 0, 5.0),
        ]);

        let outcome = state.merge(fetched(&[
            PropertyValue::new("DhwTemp", 0, 45.0),
            PropertyValue::new("OutsideTemp", 0, 5.0),
        ]));

        assert_eq!(
            outcome.changes,
            vec![PropertyChange::new(
                PropertyKey::device("DhwTemp"),
                Some(ItemValue::Float(45.0))
            )]
        );
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn merge_drops_unreported_properties() {
        let mut state = state_with(&[PropertyValue::new("Holiday", 0, false)]);
        let outcome = state.merge(HashMap::new());

        assert!(state.property(&PropertyKey::device("Holiday")).is_none());
        assert_eq!(
            outcome.changes,
            vec![PropertyChange::new(PropertyKey::device("Holiday"), None)]
        );
    }

    #[test]
    fn merge_leaves_pending_property_untouched() {
        let key = PropertyKey::new("ZoneComfortTemp", 1);
        let mut state = state_with(&[PropertyValue::new("ZoneComfortTemp", 1, 20.0)]);
        state.begin_write(&key, ItemValue::Float(22.0)).unwrap();

        let outcome = state.merge(fetched(&[PropertyValue::new("ZoneComfortTemp", 1, 20.0)]));

        assert_eq!(state.value(&key), Some(&ItemValue::Float(22.0)));
        assert_eq!(outcome.skipped, vec![key.clone()]);
        assert!(outcome.changes.is_empty());
        assert!(state.is_pending(&key));
    }

    #[test]
    fn pending_property_survives_missing_fetch() {
        let key = PropertyKey::new("ZoneMode", 1);
        let mut state = state_with(&[PropertyValue::new("ZoneMode", 1, 3)]);
        state.begin_write(&key, ItemValue::Integer(1)).unwrap();

        state.merge(HashMap::new());

        assert_eq!(state.value(&key), Some(&ItemValue::Integer(1)));
    }

    #[test]
    fn merge_since_skips_property_written_after_fetch_began() {
        let key = PropertyKey::device("DhwTemp");
        let mut state = state_with(&[
            PropertyValue::new("DhwTemp", 0, 45.0),
            PropertyValue::new("OutsideTemp", 0, 5.0),
        ]);
        let since = state.write_seq();

        state.begin_write(&key, ItemValue::Float(55.0)).unwrap();
        state.commit_write(&key);

        let outcome = state.merge_since(
            fetched(&[
                PropertyValue::new("DhwTemp", 0, 45.0),
                PropertyValue::new("OutsideTemp", 0, 6.0),
            ]),
            since,
        );

        assert_eq!(state.value(&key), Some(&ItemValue::Float(55.0)));
        assert_eq!(outcome.skipped, vec![key.clone()]);
        assert_eq!(
            outcome.changes,
            vec![PropertyChange::new(
                PropertyKey::device("OutsideTemp"),
                Some(ItemValue::Float(6.0))
            )]
        );

        // A fetch started after the write applies normally
        let outcome = state.merge_since(
            fetched(&[PropertyValue::new("DhwTemp", 0, 50.0)]),
            state.write_seq(),
        );
        assert_eq!(state.value(&key), Some(&ItemValue::Float(50.0)));
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn begin_write_requires_cached_property() {
        let mut state = state_with(&[]);
        assert!(
            state
                .begin_write(&PropertyKey::device("DhwTemp"), ItemValue::Float(50.0))
                .is_none()
        );
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn begin_write_rejects_second_pending_write() {
        let key = PropertyKey::device("DhwTemp");
        let mut state = state_with(&[PropertyValue::new("DhwTemp", 0, 40.0)]);
        assert!(state.begin_write(&key, ItemValue::Float(50.0)).is_some());
        assert!(state.begin_write(&key, ItemValue::Float(55.0)).is_none());
    }

    #[test]
    fn commit_keeps_new_value() {
        let key = PropertyKey::device("DhwTemp");
        let mut state = state_with(&[PropertyValue::new("DhwTemp", 0, 40.0)]);
        let previous = state.begin_write(&key, ItemValue::Float(50.0)).unwrap();

        assert_eq!(previous.value, Some(ItemValue::Float(40.0)));
        state.commit_write(&key);

        assert_eq!(state.value(&key), Some(&ItemValue::Float(50.0)));
        assert!(!state.is_pending(&key));
    }

    #[test]
    fn revert_restores_previous_value() {
        let key = PropertyKey::device("DhwTemp");
        let mut state = state_with(&[PropertyValue::new("DhwTemp", 0, 40.0)]);
        let previous = state.begin_write(&key, ItemValue::Float(50.0)).unwrap();

        state.revert_write(previous);

        assert_eq!(state.value(&key), Some(&ItemValue::Float(40.0)));
        assert!(!state.is_pending(&key));
    }
}
