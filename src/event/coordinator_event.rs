// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinator event types.

use crate::state::PropertyChange;

/// Events emitted by a device coordinator.
///
/// A refresh cycle emits exactly one event, whatever the number of changed
/// properties. A write emits one [`PropertyChanged`](Self::PropertyChanged),
/// carrying the new value on success or the restored value on failure.
///
/// # Examples
///
/// ```
/// use ariston_lib::event::CoordinatorEvent;
/// use ariston_lib::state::{PropertyChange, PropertyKey};
///
/// let event = CoordinatorEvent::Refreshed { changes: vec![] };
/// assert!(event.is_refresh());
///
/// let change = PropertyChange::new(PropertyKey::new("DhwTemp", 0), Some(50.0.into()));
/// assert!(!CoordinatorEvent::PropertyChanged(change).is_refresh());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorEvent {
    /// A property refresh completed.
    Refreshed {
        /// Properties whose cached value changed.
        changes: Vec<PropertyChange>,
    },

    /// A single property changed because of a write.
    PropertyChanged(PropertyChange),

    /// An energy refresh completed.
    EnergyRefreshed,

    /// A refresh failed; the cached state was left unchanged.
    RefreshFailed {
        /// Description of the failure.
        error: String,
    },
}

impl CoordinatorEvent {
    /// Returns `true` for a completed property or energy refresh.
    #[must_use]
    pub fn is_refresh(&self) -> bool {
        matches!(self, Self::Refreshed { .. } | Self::EnergyRefreshed)
    }

    /// Returns `true` for a failed refresh.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::RefreshFailed { .. })
    }

    /// Creates a failure event from an error.
    #[must_use]
    pub fn refresh_failed(error: impl std::fmt::Display) -> Self {
        Self::RefreshFailed {
            error: error.to_string(),
        }
    }
}
