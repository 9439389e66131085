// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Consumption settings parsing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::{Currency, GasEnergyUnit, GasType};

/// Tariff settings used by the remote service to compute costs.
///
/// The same document is read from `getConsumptionsSettings` and written back
/// to `consumptionsSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionsSettings {
    /// Currency code, see [`Currency`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<i64>,

    /// Gas type code, see [`GasType`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_type: Option<i64>,

    /// Gas energy unit code, see [`GasEnergyUnit`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_energy_unit: Option<i64>,

    /// Electricity cost per unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elec_cost: Option<f64>,

    /// Gas cost per unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_cost: Option<f64>,

    /// Every other key, as reported.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConsumptionsSettings {
    /// Returns the typed currency.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the code is unknown.
    pub fn currency(&self) -> Result<Option<Currency>, ValueError> {
        self.currency.map(Currency::try_from).transpose()
    }

    /// Returns the typed gas type.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the code is unknown.
    pub fn gas_type(&self) -> Result<Option<GasType>, ValueError> {
        self.gas_type.map(GasType::try_from).transpose()
    }

    /// Returns the typed gas energy unit.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the code is unknown.
    pub fn gas_energy_unit(&self) -> Result<Option<GasEnergyUnit>, ValueError> {
        self.gas_energy_unit.map(GasEnergyUnit::try_from).transpose()
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency.code());
        self
    }

    /// Sets the gas cost.
    #[must_use]
    pub fn with_gas_cost(mut self, cost: f64) -> Self {
        self.gas_cost = Some(cost);
        self
    }

    /// Sets the electricity cost.
    #[must_use]
    pub fn with_elec_cost(mut self, cost: f64) -> Self {
        self.elec_cost = Some(cost);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_settings() {
        let json = r#"{"currency": 2, "gasType": 0, "gasEnergyUnit": 5, "elecCost": 0.25, "gasCost": 0.9, "extraField": "x"}"#;
        let settings: ConsumptionsSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.currency(), Ok(Some(Currency::Eur)));
        assert_eq!(settings.gas_type(), Ok(Some(GasType::NaturalGas)));
        assert_eq!(settings.gas_energy_unit(), Ok(Some(GasEnergyUnit::CubeMeter)));
        assert_eq!(settings.extra.get("extraField"), Some(&Value::from("x")));
    }

    #[test]
    fn unknown_currency_code() {
        let settings = ConsumptionsSettings {
            currency: Some(99),
            ..ConsumptionsSettings::default()
        };
        assert!(settings.currency().is_err());
    }

    #[test]
    fn builder_serializes_camel_case() {
        let settings = ConsumptionsSettings::default()
            .with_currency(Currency::Gbp)
            .with_gas_cost(1.5);
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json, serde_json::json!({"currency": 19, "gasCost": 1.5}));
    }
}
