// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies one scheduled apply. Later schedules have larger generations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A value waiting to be applied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending<T> {
    /// When the value was scheduled.
    pub generation: Generation,
    /// The value to apply.
    pub value: T,
}

/// A single-slot queue for results that must be applied after the host's layout pass.
///
/// Scheduling a new value drops any value still waiting, so the host only ever applies the
/// most recent result and never applies results out of order.
#[derive(Clone, Debug)]
pub struct PendingApply<T> {
    slot: Option<Pending<T>>,
    next: u64,
    latest: Option<Generation>,
    superseded: u64,
}

impl<T> Default for PendingApply<T> {
    fn default() -> Self {
        Self {
            slot: None,
            next: 0,
            latest: None,
            superseded: 0,
        }
    }
}

impl<T> PendingApply<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `value`, replacing anything not yet taken.
    pub fn schedule(&mut self, value: T) -> Generation {
        let generation = Generation(self.next);
        self.next += 1;
        if let Some(stale) = self.slot.replace(Pending { generation, value }) {
            self.superseded += 1;
            tracing::debug!(
                stale = stale.generation.get(),
                current = generation.get(),
                "dropping superseded apply"
            );
        }
        self.latest = Some(generation);
        generation
    }

    /// Takes the waiting value, if any. Each value is handed out once.
    pub fn take(&mut self) -> Option<Pending<T>> {
        self.slot.take()
    }

    /// Returns `true` if a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// The most recently scheduled generation.
    pub fn latest(&self) -> Option<Generation> {
        self.latest
    }

    /// Returns `true` if nothing newer than `generation` has been scheduled.
    ///
    /// Hosts that hold on to a taken value can use this to discard it once a newer result
    /// exists.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest == Some(generation)
    }

    /// How many values were dropped before being taken.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}
