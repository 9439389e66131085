// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy and consumption data tracking.

use serde_json::Value;

use crate::response::ConsumptionsSettings;

/// Energy data refreshed on the slow cadence.
///
/// The account and sequence documents are kept as reported; their layout
/// varies between plant types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyState {
    /// Energy account report.
    pub account: Option<Value>,
    /// Consumption sequences (heating, and hot water when a boiler exists).
    pub sequences: Option<Value>,
    /// Tariff settings.
    pub settings: Option<ConsumptionsSettings>,
}

impl EnergyState {
    /// Returns `true` if any energy document has been received.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.account.is_some() || self.sequences.is_some() || self.settings.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_data() {
        assert!(!EnergyState::default().has_data());
    }

    #[test]
    fn settings_alone_count_as_data() {
        let state = EnergyState {
            settings: Some(ConsumptionsSettings::default()),
            ..EnergyState::default()
        };
        assert!(state.has_data());
    }
}
