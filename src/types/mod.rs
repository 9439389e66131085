// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and static catalogs for Ariston NET devices.
//!
//! The remote service addresses everything by string keys. This module turns
//! those key tables into closed enums so that request bodies can be derived
//! without reflection and lookups are checked at compile time.
//!
//! # Types
//!
//! - [`DeviceProperty`] / [`ThermostatProperty`] - Property ids requested on every refresh
//! - [`ConsumptionProperty`] - Keys of the consumption settings document
//! - [`DeviceFeature`] - Capability flags reported by the features endpoint
//! - [`DeviceAttribute`] / [`ZoneAttribute`] - Fixed metadata keys
//! - [`PropertyField`] - The individual fields of a property value
//! - [`PlantMode`], [`ZoneMode`], [`DhwMode`], [`Weather`], [`GasEnergyUnit`],
//!   [`GasType`], [`Currency`] - Numeric codes carried in property values
//! - [`ItemValue`] - The raw value of a property (number, text or flag)
//! - [`UnitSystem`] - The `umsys` query parameter

/// Declares a closed enum over the string keys used on the wire.
macro_rules! string_catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every key of the catalog, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the key as used by the remote service.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.iter().copied().find(|k| k.as_str() == s).ok_or(())
            }
        }
    };
}

/// Declares an enum over the numeric codes carried in property values.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the numeric code used by the remote service.
            #[must_use]
            pub const fn code(&self) -> i64 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = crate::error::ValueError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(crate::error::ValueError::UnknownVariant {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl From<$name> for crate::types::ItemValue {
            fn from(value: $name) -> Self {
                crate::types::ItemValue::from(value.code())
            }
        }
    };
}

mod catalog;
mod mode;
mod value;

pub use catalog::{
    ConsumptionProperty, DeviceAttribute, DeviceFeature, DeviceProperty, PropertyField,
    ThermostatProperty, ZoneAttribute,
};
pub use mode::{Currency, DhwMode, GasEnergyUnit, GasType, PlantMode, Weather, ZoneMode};
pub use value::{ItemValue, UnitSystem};
