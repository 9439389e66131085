// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key catalogs of the Ariston NET API.

string_catalog! {
    /// Device-wide properties, always requested at zone 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ariston_lib::types::DeviceProperty;
    ///
    /// assert_eq!(DeviceProperty::PlantMode.as_str(), "PlantMode");
    /// assert_eq!(DeviceProperty::ALL.len(), 12);
    /// ```
    DeviceProperty {
        /// Operating mode of the whole plant, see [`PlantMode`](super::PlantMode).
        PlantMode => "PlantMode",
        /// Whether the burner is currently lit.
        IsFlameOn => "IsFlameOn",
        /// Holiday mode switch.
        Holiday => "Holiday",
        /// Outside temperature from the external probe or weather provider.
        OutsideTemp => "OutsideTemp",
        /// Pressure of the heating circuit.
        HeatingCircuitPressure => "HeatingCircuitPressure",
        /// Central heating flow setpoint.
        ChFlowSetpointTemp => "ChFlowSetpointTemp",
        /// Domestic hot water temperature.
        DhwTemp => "DhwTemp",
        /// Domestic hot water mode, see [`DhwMode`](super::DhwMode).
        DhwMode => "DhwMode",
        /// Automatic thermoregulation switch.
        AutomaticThermoregulation => "AutomaticThermoregulation",
        /// Anti-legionella cycle switch.
        AntilegionellaOnOff => "AntilegionellaOnOff",
        /// Anti-legionella cycle temperature.
        AntilegionellaTemp => "AntilegionellaTemp",
        /// Anti-legionella cycle frequency.
        AntilegionellaFreq => "AntilegionellaFreq",
    }
}

string_catalog! {
    /// Per-zone properties, requested once for every zone of the device.
    ThermostatProperty {
        /// Temperature measured in the zone.
        ZoneMeasuredTemp => "ZoneMeasuredTemp",
        /// Temperature currently targeted in the zone.
        ZoneDesiredTemp => "ZoneDesiredTemp",
        /// Comfort setpoint.
        ZoneComfortTemp => "ZoneComfortTemp",
        /// Zone mode, see [`ZoneMode`](super::ZoneMode).
        ZoneMode => "ZoneMode",
        /// Whether the zone currently requests heat.
        ZoneHeatRequest => "ZoneHeatRequest",
        /// Economy setpoint.
        ZoneEconomyTemp => "ZoneEconomyTemp",
        /// Time-limited override of the zone program.
        ZoneDeroga => "ZoneDeroga",
    }
}

string_catalog! {
    /// Keys of the consumption settings document.
    ConsumptionProperty {
        /// Currency, see [`Currency`](super::Currency).
        Currency => "currency",
        /// Gas type, see [`GasType`](super::GasType).
        GasType => "gasType",
        /// Gas energy unit, see [`GasEnergyUnit`](super::GasEnergyUnit).
        GasEnergyUnit => "gasEnergyUnit",
        /// Electricity cost per unit.
        ElecCost => "elecCost",
        /// Gas cost per unit.
        GasCost => "gasCost",
    }
}

string_catalog! {
    /// Capability flags returned by the features endpoint.
    DeviceFeature {
        /// Automatic thermoregulation available.
        AutoThermoReg => "autoThermoReg",
        /// Building management system active.
        BmsActive => "bmsActive",
        /// Buffer time program available.
        BufferTimeProgAvailable => "bufferTimeProgAvailable",
        /// Cascade system.
        CascadeSys => "cascadeSys",
        /// Conventional boiler.
        ConvBoiler => "convBoiler",
        /// Domestic hot water boiler present.
        DhwBoilerPresent => "dhwBoilerPresent",
        /// Domestic hot water hidden in the app.
        DhwHidden => "dhwHidden",
        /// Domestic hot water mode can be changed.
        DhwModeChangeable => "dhwModeChangeable",
        /// Domestic hot water programs supported.
        DhwProgSupported => "dhwProgSupported",
        /// Separate heating and cooling setpoints.
        DistinctHeatCoolSetpoints => "distinctHeatCoolSetpoints",
        /// Extended time programs.
        ExtendedTimeProg => "extendedTimeProg",
        /// Boiler present.
        HasBoiler => "hasBoiler",
        /// EM20 energy manager present.
        HasEm20 => "hasEm20",
        /// Fireplace present.
        HasFireplace => "hasFireplace",
        /// Energy metering available.
        HasMetering => "hasMetering",
        /// Smart load profile available.
        HasSlp => "hasSlp",
        /// Two cooling temperatures.
        HasTwoCoolingTemp => "hasTwoCoolingTemp",
        /// Mechanical ventilation present.
        HasVmc => "hasVmc",
        /// Zones carry names.
        HasZoneNames => "hasZoneNames",
        /// Heat pump cascade configuration.
        HpCascadeConfig => "hpCascadeConfig",
        /// Heat pump cascade system.
        HpCascadeSys => "hpCascadeSys",
        /// Heat pump system.
        HpSys => "hpSys",
        /// High voltage input off.
        HvInputOff => "hvInputOff",
        /// Hybrid system.
        HybridSys => "hybridSys",
        /// Evo 2 device.
        IsEvo2 => "isEvo2",
        /// Mechanical ventilation R2.
        IsVmcR2 => "isVmcR2",
        /// Pilot supported.
        PilotSupported => "pilotSupported",
        /// Pre-heating supported.
        PreHeatingSupported => "preHeatingSupported",
        /// Solar system.
        Solar => "solar",
        /// Virtual zones.
        VirtualZones => "virtualZones",
        /// Zone list.
        Zones => "zones",
        /// Weather provider configured.
        WeatherProvider => "weatherProvider",
    }
}

string_catalog! {
    /// Fixed metadata keys of a device summary.
    DeviceAttribute {
        /// Gateway firmware version.
        GwFwVer => "gwFwVer",
        /// Gateway identifier.
        GwId => "gwId",
        /// Gateway link state.
        GwLink => "gwLink",
        /// Gateway serial number.
        GwSerial => "gwSerial",
        /// Gateway system type.
        GwSysType => "gwSysType",
        /// User-visible plant name.
        PlantName => "plantName",
    }
}

string_catalog! {
    /// Keys of a zone definition.
    ZoneAttribute {
        /// Zone number.
        Num => "num",
        /// Zone name.
        Name => "name",
        /// Room sensor present.
        RoomSens => "roomSens",
        /// Geofence override.
        GeofenceDeroga => "geofenceDeroga",
    }
}

string_catalog! {
    /// Fields of a property value.
    PropertyField {
        /// Current value.
        Value => "value",
        /// Allowed discrete values.
        Options => "options",
        /// Labels for the allowed discrete values.
        OptTexts => "optTexts",
        /// Measurement unit.
        Unit => "unit",
        /// Lower bound.
        Min => "min",
        /// Upper bound.
        Max => "max",
        /// Increment.
        Step => "step",
        /// Displayed decimals.
        Decimals => "decimals",
        /// Zone the property belongs to.
        Zone => "zone",
        /// Expiry of a time-limited override.
        ExpiresOn => "expiresOn",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(DeviceProperty::ALL.len(), 12);
        assert_eq!(ThermostatProperty::ALL.len(), 7);
        assert_eq!(ConsumptionProperty::ALL.len(), 5);
    }

    #[test]
    fn wire_names_are_unique() {
        let mut names: Vec<_> = DeviceFeature::ALL.iter().map(DeviceFeature::as_str).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn from_str_round_trips_wire_name() {
        assert_eq!(
            ThermostatProperty::from_str("ZoneDeroga"),
            Ok(ThermostatProperty::ZoneDeroga)
        );
        assert!(ThermostatProperty::from_str("zonederoga").is_err());
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(DeviceFeature::HasSlp.to_string(), "hasSlp");
        assert_eq!(PropertyField::OptTexts.as_ref(), "optTexts");
    }
}
