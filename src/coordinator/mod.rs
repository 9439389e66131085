// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state coordinator.
//!
//! A [`DeviceCoordinator`] owns the cached state of one plant. It refreshes
//! the state on two cadences (properties and energy reports), answers reads
//! from the cache and performs optimistic writes:
//!
//! 1. The new value is applied to the cache and the property is marked
//!    pending, so a concurrent refresh cannot overwrite it.
//! 2. The write is sent with the previously cached value as `prevValue`.
//! 3. On success the new value stays; on failure the previous property is
//!    restored and the error is returned.
//!
//! Writes to the same property are serialized; writes to different
//! properties run concurrently.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ariston_lib::{AristonApi, CoordinatorConfig, DeviceCoordinator};
//! use ariston_lib::types::DeviceProperty;
//!
//! # async fn example() -> ariston_lib::Result<()> {
//! let api = Arc::new(AristonApi::http("me@example.com", "secret")?);
//! api.connect().await?;
//!
//! let device = api.list_devices().await?.unwrap_or_default().remove(0);
//! let coordinator = Arc::new(DeviceCoordinator::new(api, device, CoordinatorConfig::new()));
//!
//! coordinator.refresh().await?;
//! coordinator
//!     .set_property_by_id(DeviceProperty::DhwTemp.as_str(), 0, 50.0)
//!     .await?;
//!
//! let polling = coordinator.spawn_polling();
//! # drop(polling);
//! # Ok(())
//! # }
//! ```

mod config;
mod polling;

pub use config::CoordinatorConfig;
pub use polling::PollingHandle;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::api::AristonApi;
use crate::error::{Error, Result, ValueError};
use crate::event::{CoordinatorEvent, EventBus};
use crate::features::{FeatureSet, Zone};
use crate::protocol::Transport;
use crate::response::{ConsumptionsSettings, DeviceSummary, PropertyValue};
use crate::state::{DeviceState, EnergyState, PropertyChange, PropertyKey};
use crate::types::{ItemValue, PropertyField};

type WriteLock = Arc<tokio::sync::Mutex<()>>;

/// Coordinator of one plant.
pub struct DeviceCoordinator<T: Transport> {
    api: Arc<AristonApi<T>>,
    attributes: DeviceSummary,
    config: CoordinatorConfig,
    state: RwLock<Option<DeviceState>>,
    energy: RwLock<EnergyState>,
    write_locks: Mutex<HashMap<PropertyKey, WriteLock>>,
    events: EventBus,
}

impl<T: Transport> std::fmt::Debug for DeviceCoordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceCoordinator")
            .field("gw_id", &self.attributes.gw_id)
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> DeviceCoordinator<T> {
    /// Creates a coordinator for the given plant.
    ///
    /// The state stays empty until the first successful
    /// [`refresh`](Self::refresh).
    #[must_use]
    pub fn new(
        api: Arc<AristonApi<T>>,
        attributes: DeviceSummary,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            api,
            attributes,
            config,
            state: RwLock::new(None),
            energy: RwLock::new(EnergyState::default()),
            write_locks: Mutex::new(HashMap::new()),
            events: EventBus::new(),
        }
    }

    /// Returns the API client.
    #[must_use]
    pub fn api(&self) -> &Arc<AristonApi<T>> {
        &self.api
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Subscribes to coordinator events.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<CoordinatorEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Returns the device attributes.
    #[must_use]
    pub fn attributes(&self) -> &DeviceSummary {
        &self.attributes
    }

    /// Returns the gateway id.
    #[must_use]
    pub fn gateway_id(&self) -> &str {
        &self.attributes.gw_id
    }

    /// Returns the plant name.
    #[must_use]
    pub fn plant_name(&self) -> Option<&str> {
        self.attributes.plant_name.as_deref()
    }

    /// Returns the gateway serial number.
    #[must_use]
    pub fn serial_number(&self) -> Option<&str> {
        self.attributes.gw_serial.as_deref()
    }

    /// Returns the gateway firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> Option<&str> {
        self.attributes.gw_fw_ver.as_deref()
    }

    // =========================================================================
    // Cached state
    // =========================================================================

    /// Returns `true` once a refresh succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.read().is_some()
    }

    /// Returns a point-in-time copy of the device state.
    #[must_use]
    pub fn state(&self) -> Option<DeviceState> {
        self.state.read().clone()
    }

    /// Returns a point-in-time copy of the energy reports.
    #[must_use]
    pub fn energy(&self) -> EnergyState {
        self.energy.read().clone()
    }

    /// Returns the cached feature set.
    #[must_use]
    pub fn features(&self) -> Option<FeatureSet> {
        self.state.read().as_ref().map(|s| s.features().clone())
    }

    /// Returns the zones of the plant.
    #[must_use]
    pub fn zones(&self) -> Vec<Zone> {
        self.state
            .read()
            .as_ref()
            .map(|s| s.features().zones.clone())
            .unwrap_or_default()
    }

    /// Returns the zone numbers of the plant.
    #[must_use]
    pub fn zone_numbers(&self) -> Vec<u32> {
        self.state
            .read()
            .as_ref()
            .map(|s| s.features().zone_numbers())
            .unwrap_or_default()
    }

    /// Returns a cached property.
    #[must_use]
    pub fn get_property_by_id(&self, id: &str, zone: u32) -> Option<PropertyValue> {
        let key = PropertyKey::new(id, zone);
        self.state
            .read()
            .as_ref()
            .and_then(|s| s.property(&key).cloned())
    }

    /// Returns the cached value of a property.
    #[must_use]
    pub fn get_value(&self, id: &str, zone: u32) -> Option<ItemValue> {
        let key = PropertyKey::new(id, zone);
        self.state
            .read()
            .as_ref()
            .and_then(|s| s.value(&key).cloned())
    }

    /// Returns one field of a cached property.
    #[must_use]
    pub fn get_item_by_id(&self, id: &str, zone: u32, field: PropertyField) -> Option<Value> {
        self.get_property_by_id(id, zone)
            .and_then(|p| p.field(field))
    }

    /// Returns the cached value of a property as a typed code.
    ///
    /// Returns `Ok(None)` if the property is not cached or its value is not a
    /// whole number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if the code is unknown to `E`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use ariston_lib::{DeviceCoordinator, HttpTransport};
    /// use ariston_lib::types::{DeviceProperty, PlantMode};
    ///
    /// # fn example(coordinator: &DeviceCoordinator<HttpTransport>) -> ariston_lib::Result<()> {
    /// let mode: Option<PlantMode> = coordinator.get_code(DeviceProperty::PlantMode.as_str(), 0)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_code<E>(&self, id: &str, zone: u32) -> Result<Option<E>>
    where
        E: TryFrom<i64, Error = ValueError>,
    {
        match self.get_value(id, zone).and_then(|v| v.as_i64()) {
            Some(code) => Ok(Some(E::try_from(code)?)),
            None => Ok(None),
        }
    }

    /// Returns `true` if the cached feature set has the feature.
    #[must_use]
    pub fn is_feature_available(&self, key: impl AsRef<str>) -> bool {
        self.state
            .read()
            .as_ref()
            .is_some_and(|s| s.features().is_available(key))
    }

    /// Returns `true` if every feature is available.
    ///
    /// With `extra_energy_feature`, the energy-derived features must also be
    /// enabled in the configuration and energy reports must have been
    /// received.
    #[must_use]
    pub fn are_features_available<I>(&self, keys: I, extra_energy_feature: bool) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if extra_energy_feature
            && !(self.config.extra_energy_features && self.energy.read().has_data())
        {
            return false;
        }
        let guard = self.state.read();
        keys.into_iter().all(|key| {
            guard
                .as_ref()
                .is_some_and(|s| s.features().is_available(key))
        })
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Fetches features and properties and merges them into the state.
    ///
    /// Publishes one [`CoordinatorEvent::Refreshed`] on success and one
    /// [`CoordinatorEvent::RefreshFailed`] on failure. A failure leaves the
    /// state unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if a fetch fails, or [`Error::DeviceNotFound`] if the
    /// service does not know the plant.
    pub async fn refresh(&self) -> Result<()> {
        match self.fetch_and_merge().await {
            Ok(changes) => {
                self.events.publish(CoordinatorEvent::Refreshed { changes });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(gw_id = %self.attributes.gw_id, error = %e, "Refresh failed");
                self.events.publish(CoordinatorEvent::refresh_failed(&e));
                Err(e)
            }
        }
    }

    async fn fetch_and_merge(&self) -> Result<Vec<PropertyChange>> {
        let gw_id = &self.attributes.gw_id;

        let cached = if self.config.refresh_features {
            None
        } else {
            self.features()
        };
        let features = match cached {
            Some(features) => features,
            None => self.fetch_features().await?,
        };

        // Writes acknowledged while the fetch is in flight must survive it
        let since = self
            .state
            .read()
            .as_ref()
            .map_or(0, DeviceState::write_seq);

        let fetched = self
            .api
            .get_properties(gw_id, &features, &self.config.locale, self.config.unit_system)
            .await?
            .ok_or(Error::DeviceNotFound)?;

        let mut guard = self.state.write();
        let state = guard
            .get_or_insert_with(|| DeviceState::new(self.attributes.clone(), features.clone()));
        state.set_features(features);
        let outcome = state.merge_since(fetched, since);

        tracing::debug!(
            gw_id = %gw_id,
            changed = outcome.changes.len(),
            skipped = outcome.skipped.len(),
            "Properties refreshed"
        );

        Ok(outcome.changes)
    }

    async fn fetch_features(&self) -> Result<FeatureSet> {
        self.api
            .get_features(&self.attributes.gw_id)
            .await?
            .ok_or(Error::DeviceNotFound)
    }

    /// Fetches the energy reports.
    ///
    /// Publishes one [`CoordinatorEvent::EnergyRefreshed`] on success and one
    /// [`CoordinatorEvent::RefreshFailed`] on failure. A failure leaves the
    /// energy state unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if a fetch fails.
    pub async fn refresh_energy(&self) -> Result<()> {
        match self.fetch_energy().await {
            Ok(energy) => {
                *self.energy.write() = energy;
                self.events.publish(CoordinatorEvent::EnergyRefreshed);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(gw_id = %self.attributes.gw_id, error = %e, "Energy refresh failed");
                self.events.publish(CoordinatorEvent::refresh_failed(&e));
                Err(e)
            }
        }
    }

    async fn fetch_energy(&self) -> Result<EnergyState> {
        let gw_id = &self.attributes.gw_id;
        let features = match self.features() {
            Some(features) => features,
            None => self.fetch_features().await?,
        };

        let account = self.api.get_energy_account(gw_id).await?;
        let sequences = self
            .api
            .get_consumptions_sequences(gw_id, features.has_boiler(), features.has_slp())
            .await?;
        let settings = self.api.get_consumptions_settings(gw_id).await?;

        tracing::debug!(gw_id = %gw_id, "Energy reports refreshed");

        Ok(EnergyState {
            account,
            sequences,
            settings,
        })
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Writes a property optimistically.
    ///
    /// The cached value changes immediately. If the remote write fails, the
    /// previous property is restored and the error returned. Both outcomes
    /// publish a [`CoordinatorEvent::PropertyChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before the first refresh,
    /// [`Error::UnknownProperty`] if the property is not cached, or the error
    /// of the remote write.
    pub async fn set_property_by_id(
        &self,
        id: &str,
        zone: u32,
        value: impl Into<ItemValue>,
    ) -> Result<()> {
        let key = PropertyKey::new(id, zone);
        let value = value.into();

        let lock = self.write_lock(&key);
        let _serialized = lock.lock().await;

        let (previous, features) = {
            let mut guard = self.state.write();
            let state = guard.as_mut().ok_or(Error::NotInitialized)?;
            let previous = state
                .begin_write(&key, value.clone())
                .ok_or_else(|| Error::UnknownProperty {
                    id: id.to_string(),
                    zone,
                })?;
            (previous, state.features().clone())
        };
        let pending = PendingWrite::new(&self.state, key.clone());

        tracing::debug!(gw_id = %self.attributes.gw_id, %key, ?value, "Writing property");

        let result = self
            .api
            .set_property(
                &self.attributes.gw_id,
                zone,
                &features,
                id,
                &value,
                previous.value.as_ref(),
                self.config.unit_system,
            )
            .await;

        match result {
            Ok(()) => {
                pending.resolve(|state, key| state.commit_write(key));
                self.events
                    .publish(CoordinatorEvent::PropertyChanged(PropertyChange::new(
                        key,
                        Some(value),
                    )));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(gw_id = %self.attributes.gw_id, %key, error = %e, "Write failed, reverting");
                let restored = previous.value.clone();
                pending.resolve(|state, _| state.revert_write(previous));
                self.events
                    .publish(CoordinatorEvent::PropertyChanged(PropertyChange::new(
                        key, restored,
                    )));
                Err(e)
            }
        }
    }

    fn write_lock(&self, key: &PropertyKey) -> WriteLock {
        Arc::clone(self.write_locks.lock().entry(key.clone()).or_default())
    }

    /// Sets the last day of the holiday, or clears it with `None`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_holiday(&self, end_date: Option<NaiveDate>) -> Result<()> {
        self.api.set_holiday(&self.attributes.gw_id, end_date).await
    }

    /// Stores the consumption tariff settings.
    ///
    /// The cached settings are replaced once the service accepts them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_consumptions_settings(&self, settings: ConsumptionsSettings) -> Result<()> {
        self.api
            .set_consumptions_settings(&self.attributes.gw_id, &settings)
            .await?;
        self.energy.write().settings = Some(settings);
        Ok(())
    }

    /// Fetches the heating time program of a zone.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_time_programs(&self, zone: u32) -> Result<Option<Value>> {
        self.api
            .get_time_programs(&self.attributes.gw_id, zone, self.config.unit_system)
            .await
    }
}

impl<T: Transport + 'static> DeviceCoordinator<T> {
    /// Starts refreshing properties and energy reports in the background.
    ///
    /// Both refreshes run once immediately, then on their configured
    /// intervals. Failures are logged and published; the next tick proceeds.
    #[must_use]
    pub fn spawn_polling(self: &Arc<Self>) -> PollingHandle {
        tracing::info!(
            gw_id = %self.attributes.gw_id,
            scan_interval = ?self.config.scan_interval,
            energy_scan_interval = ?self.config.energy_scan_interval,
            "Starting polling"
        );

        let properties = polling::spawn_interval(
            Arc::downgrade(self),
            self.config.scan_interval,
            |coordinator| async move {
                if let Err(e) = coordinator.refresh().await {
                    tracing::trace!(error = %e, "Property poll cycle failed");
                }
            },
        );
        let energy = polling::spawn_interval(
            Arc::downgrade(self),
            self.config.energy_scan_interval,
            |coordinator| async move {
                if let Err(e) = coordinator.refresh_energy().await {
                    tracing::trace!(error = %e, "Energy poll cycle failed");
                }
            },
        );

        PollingHandle::new(vec![properties, energy])
    }
}

/// Pending mark of an in-flight write.
///
/// Dropping it without [`resolve`](Self::resolve), for instance when the
/// write future is cancelled, releases the mark and keeps the cached value.
struct PendingWrite<'a> {
    state: &'a RwLock<Option<DeviceState>>,
    key: Option<PropertyKey>,
}

impl<'a> PendingWrite<'a> {
    fn new(state: &'a RwLock<Option<DeviceState>>, key: PropertyKey) -> Self {
        Self {
            state,
            key: Some(key),
        }
    }

    fn resolve(mut self, f: impl FnOnce(&mut DeviceState, &PropertyKey)) {
        if let Some(key) = self.key.take()
            && let Some(state) = self.state.write().as_mut()
        {
            f(state, &key);
        }
    }
}

impl Drop for PendingWrite<'_> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take()
            && let Some(state) = self.state.write().as_mut()
        {
            state.release(&key);
        }
    }
}
