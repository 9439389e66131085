// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background refresh tasks.

use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shortest accepted polling period.
const MIN_PERIOD: Duration = Duration::from_millis(100);

/// Owns the polling tasks of a coordinator.
///
/// The tasks stop when [`stop`](Self::stop) is called, when the handle is
/// dropped, or when the coordinator itself is dropped.
#[derive(Debug)]
pub struct PollingHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl PollingHandle {
    pub(super) fn new(tasks: Vec<JoinHandle<()>>) -> Self {
        Self { tasks }
    }

    /// Returns `true` while at least one task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    /// Stops the polling tasks.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Runs `tick` on every period, first immediately.
///
/// The task only holds a weak reference to its target between ticks and
/// exits once the target is gone. A tick that overruns the period delays the
/// next one instead of bursting.
pub(super) fn spawn_interval<C, F, Fut>(
    target: Weak<C>,
    period: Duration,
    mut tick: F,
) -> JoinHandle<()>
where
    C: Send + Sync + 'static,
    F: FnMut(Arc<C>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period.max(MIN_PERIOD));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let Some(target) = target.upgrade() else {
                tracing::debug!("Polling target dropped, stopping");
                break;
            };
            tick(target).await;
        }
    })
}
