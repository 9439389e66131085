// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw property values and the unit system selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value carried by a property.
///
/// The remote service mixes numbers (temperatures, enum codes, switches
/// encoded as `0`/`1`), booleans and free text in the same `value` field.
///
/// # Examples
///
/// ```
/// use ariston_lib::types::ItemValue;
///
/// let temp: ItemValue = serde_json::from_str("21.5").unwrap();
/// assert_eq!(temp.as_f64(), Some(21.5));
///
/// // Integers keep their form on the wire
/// let mode: ItemValue = serde_json::from_str("1").unwrap();
/// assert_eq!(mode, ItemValue::Integer(1));
/// assert_eq!(serde_json::to_string(&mode).unwrap(), "1");
///
/// let switch = ItemValue::from(true);
/// assert_eq!(switch.as_f64(), Some(1.0));
/// assert_eq!(switch.as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    /// A boolean flag.
    Bool(bool),
    /// A whole number, such as an enum code.
    Integer(i64),
    /// A number with a fractional part.
    Float(f64),
    /// A text value.
    Text(String),
}

impl ItemValue {
    /// Returns the value as a number.
    ///
    /// Booleans map to `0.0`/`1.0`; text is parsed if it holds a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Returns the value as an integer code, if it is a whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => self
                .as_f64()
                .filter(|n| n.fract() == 0.0)
                .map(|n| n as i64),
        }
    }

    /// Returns the value as a switch state.
    ///
    /// Numbers are considered on when non-zero.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Integer(n) => Some(*n != 0),
            Self::Float(n) => Some(*n != 0.0),
            Self::Text(_) => None,
        }
    }

    /// Returns the value as text, if it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for ItemValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ItemValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for ItemValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unit system used by the remote service to format values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// International system (Celsius, bar, kWh).
    #[default]
    Metric,
    /// US customary units (Fahrenheit, psi).
    Imperial,
}

impl UnitSystem {
    /// Returns the `umsys` query parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "si",
            Self::Imperial => "us",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
