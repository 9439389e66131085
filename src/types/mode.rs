// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric enumerations carried in property values.

code_enum! {
    /// Operating mode of the whole plant.
    ///
    /// # Examples
    ///
    /// ```
    /// use ariston_lib::types::PlantMode;
    ///
    /// assert_eq!(PlantMode::try_from(1), Ok(PlantMode::Winter));
    /// assert_eq!(PlantMode::Off.code(), 5);
    /// assert!(PlantMode::try_from(9).is_err());
    /// ```
    PlantMode {
        /// Mode not reported.
        Undefined = -1,
        /// Hot water only.
        Summer = 0,
        /// Heating and hot water.
        Winter = 1,
        /// Heating only.
        HeatingOnly = 2,
        /// Cooling and hot water.
        Cooling = 3,
        /// Cooling only.
        CoolingOnly = 4,
        /// Plant off.
        Off = 5,
    }
}

code_enum! {
    /// Mode of a single zone.
    ZoneMode {
        /// Mode not reported.
        Undefined = -1,
        /// Zone off.
        Off = 0,
        /// Manual setpoint.
        Manual = 1,
        /// Alternate manual setpoint.
        Manual2 = 2,
        /// Follows the time program.
        TimeProgram = 3,
    }
}

code_enum! {
    /// Domestic hot water mode.
    DhwMode {
        /// Hot water disabled.
        Disabled = 0,
        /// Follows a time program.
        TimeBased = 1,
        /// Always active.
        AlwaysActive = 2,
        /// Peak/off-peak tariff driven.
        HcHp = 3,
        /// Peak/off-peak tariff driven, 40 degrees.
        HcHp40 = 4,
        /// Green mode.
        Green = 5,
    }
}

code_enum! {
    /// Weather reported by the provider.
    Weather {
        /// No weather data.
        Unavailable = 0,
        /// Clear sky.
        Clear = 1,
        /// Variable.
        Variable = 2,
        /// Cloudy.
        Cloudy = 3,
        /// Rain.
        Rainy = 4,
        /// Rainstorm.
        Rainstorm = 5,
        /// Snow.
        Snow = 6,
        /// Fog.
        Fog = 7,
        /// Wind.
        Windy = 8,
        /// Clear sky at night.
        ClearByNight = 129,
        /// Variable at night.
        VariableByNight = 130,
    }
}

code_enum! {
    /// Unit used to report gas energy.
    GasEnergyUnit {
        /// Kilowatt hours.
        Kwh = 0,
        /// Gigajoules.
        GigaJoule = 1,
        /// Therms.
        Therm = 2,
        /// Million BTU.
        MegaBtu = 3,
        /// Standard cubic meters.
        Smc = 4,
        /// Cubic meters.
        CubeMeter = 5,
    }
}

code_enum! {
    /// Gas supplied to the plant.
    GasType {
        /// Natural gas.
        NaturalGas = 0,
        /// Liquefied petroleum gas.
        Lpg = 1,
        /// Propane-air mix.
        AirPropaned = 2,
        /// GPO.
        Gpo = 3,
        /// Propane.
        Propane = 4,
    }
}

code_enum! {
    /// Currency of the consumption costs.
    Currency {
        /// Argentine peso.
        Ars = 1,
        /// Euro.
        Eur = 2,
        /// Belarusian ruble.
        Byn = 3,
        /// Chinese yuan.
        Cny = 4,
        /// Croatian kuna.
        Hrk = 5,
        /// Czech koruna.
        Czk = 6,
        /// Danish krone.
        Dkk = 7,
        /// Hong Kong dollar.
        Hkd = 8,
        /// Hungarian forint.
        Huf = 9,
        /// Iranian rial.
        Irr = 10,
        /// Kazakhstani tenge.
        Kzt = 11,
        /// Swiss franc.
        Chf = 12,
        /// Macanese pataca.
        Mop = 13,
        /// Polish zloty.
        Plz = 14,
        /// Romanian leu.
        Ron = 15,
        /// Russian ruble.
        Rub = 16,
        /// Turkish lira.
        Try = 17,
        /// Ukrainian hryvnia.
        Uah = 18,
        /// Pound sterling.
        Gbp = 19,
        /// US dollar.
        Usd = 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use crate::types::ItemValue;

    #[test]
    fn plant_mode_codes() {
        assert_eq!(PlantMode::try_from(-1), Ok(PlantMode::Undefined));
        assert_eq!(PlantMode::try_from(4), Ok(PlantMode::CoolingOnly));
        assert_eq!(i64::from(PlantMode::HeatingOnly), 2);
    }

    #[test]
    fn weather_night_codes() {
        assert_eq!(Weather::try_from(129), Ok(Weather::ClearByNight));
        assert_eq!(Weather::VariableByNight.code(), 130);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            ZoneMode::try_from(7),
            Err(ValueError::UnknownVariant {
                kind: "ZoneMode",
                value: 7
            })
        );
    }

    #[test]
    fn mode_converts_to_item_value() {
        assert_eq!(ItemValue::from(DhwMode::Green), ItemValue::Integer(5));
    }
}
