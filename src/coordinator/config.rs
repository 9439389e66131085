// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinator configuration.

use std::time::Duration;

use crate::types::UnitSystem;

/// Configuration of a [`DeviceCoordinator`](super::DeviceCoordinator).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use ariston_lib::CoordinatorConfig;
/// use ariston_lib::types::UnitSystem;
///
/// let config = CoordinatorConfig::new()
///     .with_scan_interval(Duration::from_secs(120))
///     .with_unit_system(UnitSystem::Imperial)
///     .with_extra_energy_features(true);
///
/// assert_eq!(config.scan_interval, Duration::from_secs(120));
/// assert_eq!(config.energy_scan_interval, CoordinatorConfig::DEFAULT_ENERGY_SCAN_INTERVAL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Interval between property refreshes.
    pub scan_interval: Duration,
    /// Interval between energy refreshes.
    pub energy_scan_interval: Duration,
    /// Locale of option texts, e.g. `en-US`.
    pub locale: String,
    /// Unit system of the returned values.
    pub unit_system: UnitSystem,
    /// Fetch the feature set on every refresh instead of only once.
    pub refresh_features: bool,
    /// Expose the energy-derived features.
    pub extra_energy_features: bool,
}

impl CoordinatorConfig {
    /// Default property refresh interval.
    pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(60);

    /// Default energy refresh interval.
    pub const DEFAULT_ENERGY_SCAN_INTERVAL: Duration = Duration::from_secs(60 * 60);

    /// Default locale.
    pub const DEFAULT_LOCALE: &'static str = "en-US";

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scan_interval: Self::DEFAULT_SCAN_INTERVAL,
            energy_scan_interval: Self::DEFAULT_ENERGY_SCAN_INTERVAL,
            locale: Self::DEFAULT_LOCALE.to_string(),
            unit_system: UnitSystem::default(),
            refresh_features: false,
            extra_energy_features: false,
        }
    }

    /// Sets the property refresh interval.
    #[must_use]
    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = interval;
        self
    }

    /// Sets the energy refresh interval.
    #[must_use]
    pub fn with_energy_scan_interval(mut self, interval: Duration) -> Self {
        self.energy_scan_interval = interval;
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the unit system.
    #[must_use]
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Re-fetches the feature set on every refresh.
    #[must_use]
    pub fn with_refresh_features(mut self, enabled: bool) -> Self {
        self.refresh_features = enabled;
        self
    }

    /// Enables the energy-derived features.
    #[must_use]
    pub fn with_extra_energy_features(mut self, enabled: bool) -> Self {
        self.extra_energy_features = enabled;
        self
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.scan_interval, Duration::from_secs(60));
        assert_eq!(config.energy_scan_interval, Duration::from_secs(3600));
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.unit_system, UnitSystem::Metric);
        assert!(!config.refresh_features);
        assert!(!config.extra_energy_features);
    }

    #[test]
    fn builder_chain() {
        let config = CoordinatorConfig::new()
            .with_energy_scan_interval(Duration::from_secs(600))
            .with_locale("it-IT")
            .with_refresh_features(true);
        assert_eq!(config.energy_scan_interval, Duration::from_secs(600));
        assert_eq!(config.locale, "it-IT");
        assert!(config.refresh_features);
    }
}
