// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint paths, relative to the API base URL.

use crate::types::UnitSystem;

pub(crate) const LOGIN: &str = "accounts/login";

const REMOTE: &str = "remote";
const PLANTS: &str = "plants";
const LITE: &str = "lite";
const DATA_ITEMS: &str = "dataItems";
const PLANT_DATA: &str = "plantData";
const REPORTS: &str = "reports";
const TIME_PROGS: &str = "timeProgs";

fn gw(gw_id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(gw_id)
}

pub(crate) fn plants() -> String {
    format!("{REMOTE}/{PLANTS}")
}

pub(crate) fn plants_lite() -> String {
    format!("{REMOTE}/{PLANTS}/{LITE}")
}

pub(crate) fn features(gw_id: &str) -> String {
    format!("{REMOTE}/{PLANTS}/{}/features", gw(gw_id))
}

pub(crate) fn get_properties(gw_id: &str, umsys: UnitSystem) -> String {
    format!("{REMOTE}/{DATA_ITEMS}/{}/get?umsys={umsys}", gw(gw_id))
}

pub(crate) fn set_properties(gw_id: &str, umsys: UnitSystem) -> String {
    format!("{REMOTE}/{DATA_ITEMS}/{}/set?umsys={umsys}", gw(gw_id))
}

pub(crate) fn energy_account(gw_id: &str) -> String {
    format!("{REMOTE}/{REPORTS}/{}/energyAccount", gw(gw_id))
}

pub(crate) fn consumptions_sequences(gw_id: &str, has_boiler: bool, has_slp: bool) -> String {
    let usages = if has_boiler { "Ch%2CDhw" } else { "Ch" };
    // The service expects capitalized booleans here.
    let has_slp = if has_slp { "True" } else { "False" };
    format!(
        "{REMOTE}/{REPORTS}/{}/consSequencesApi8?usages={usages}&hasSlp={has_slp}",
        gw(gw_id)
    )
}

pub(crate) fn get_consumptions_settings(gw_id: &str) -> String {
    format!("{REMOTE}/{PLANTS}/{}/getConsumptionsSettings", gw(gw_id))
}

pub(crate) fn set_consumptions_settings(gw_id: &str) -> String {
    format!("{REMOTE}/{PLANTS}/{}/consumptionsSettings", gw(gw_id))
}

pub(crate) fn time_programs(gw_id: &str, zone: u32, umsys: UnitSystem) -> String {
    format!("{REMOTE}/{TIME_PROGS}/{}/ChZn{zone}?umsys={umsys}", gw(gw_id))
}

pub(crate) fn holiday(gw_id: &str) -> String {
    format!("{REMOTE}/{PLANT_DATA}/{}/holiday", gw(gw_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_list_paths() {
        assert_eq!(plants(), "remote/plants");
        assert_eq!(plants_lite(), "remote/plants/lite");
    }

    #[test]
    fn property_paths_carry_unit_system() {
        assert_eq!(
            get_properties("GW1", UnitSystem::Metric),
            "remote/dataItems/GW1/get?umsys=si"
        );
        assert_eq!(
            set_properties("GW1", UnitSystem::Imperial),
            "remote/dataItems/GW1/set?umsys=us"
        );
    }

    #[test]
    fn consumption_sequence_usages() {
        assert_eq!(
            consumptions_sequences("GW1", true, false),
            "remote/reports/GW1/consSequencesApi8?usages=Ch%2CDhw&hasSlp=False"
        );
        assert_eq!(
            consumptions_sequences("GW1", false, true),
            "remote/reports/GW1/consSequencesApi8?usages=Ch&hasSlp=True"
        );
    }

    #[test]
    fn time_program_path() {
        assert_eq!(
            time_programs("GW1", 2, UnitSystem::Metric),
            "remote/timeProgs/GW1/ChZn2?umsys=si"
        );
    }

    #[test]
    fn gateway_id_is_encoded() {
        assert_eq!(features("a/b"), "remote/plants/a%2Fb/features");
        assert_eq!(holiday("GW1"), "remote/plantData/GW1/holiday");
    }
}
