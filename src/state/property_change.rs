// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property change notifications.

use crate::types::ItemValue;

use super::PropertyKey;

/// A cached property value that changed.
///
/// `value` is `None` when the property is no longer reported or has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChange {
    /// The property that changed.
    pub key: PropertyKey,
    /// The new cached value.
    pub value: Option<ItemValue>,
}

impl PropertyChange {
    /// Creates a new change.
    #[must_use]
    pub fn new(key: PropertyKey, value: Option<ItemValue>) -> Self {
        Self { key, value }
    }
}
