//! Shelf domain: queue of posters waiting to be stocked.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::content::MovieEntry;

/// Entries waiting for a poster card, stocked a few per frame.
#[derive(Resource, Debug, Default)]
pub struct ShelfStock {
    pending: VecDeque<MovieEntry>,
    stocked: usize,
}

impl ShelfStock {
    /// Replace the queue and restart slot numbering.
    pub fn refill(&mut self, entries: impl IntoIterator<Item = MovieEntry>) {
        self.pending = entries.into_iter().collect();
        self.stocked = 0;
    }

    /// Take up to `limit` entries with their shelf slots.
    pub fn next_batch(&mut self, limit: usize) -> Vec<(usize, MovieEntry)> {
        let count = limit.min(self.pending.len());
        let first_slot = self.stocked;
        let batch: Vec<(usize, MovieEntry)> = self
            .pending
            .drain(..count)
            .enumerate()
            .map(|(offset, entry)| (first_slot + offset, entry))
            .collect();
        self.stocked += batch.len();
        batch
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn stocked(&self) -> usize {
        self.stocked
    }
}
