//! Scheduler module - decides the new rightmost column each tick
//!
//! Exactly one column pattern is produced per tick, obstacle column or
//! blank, never both. Priority order: finish an in-progress multi-column
//! obstacle, then retry a deferred (pending) obstacle, then roll the spawn
//! ramp and either commit or defer the selected template.
//!
//! The two-phase commit exists because a template's own lead gap may demand
//! more clearance than the generic interval already waited for. Keeping the
//! rolled template pending until it becomes legal, instead of redrawing
//! every tick, avoids biasing the stream toward templates with small lead
//! gaps.

use crate::hurdles::{HurdleCatalog, HurdleId};
use crate::rng::SimpleRng;
use crate::types::MIN_HURDLE_INTERVAL;

/// Tick count the scheduler starts from, far past every spacing rule so the
/// first obstacle of a run is not artificially delayed.
const FRESH_FIELD_TICKS: u32 = 1000;

/// Spawn acceptance probability after `n` ticks past the minimum interval.
///
/// Geometric ramp: the first `n` terms of `0.5 * 1.5^-i` summed, then
/// divided by 1.5. Zero at `n = 0`, strictly increasing, approaching 1 as
/// the field stays empty - so obstacle density is bounded on both sides.
pub fn spawn_probability(n: u32) -> f64 {
    let mut sum = 0.0;
    let mut term = 0.5;
    for _ in 0..n {
        sum += term;
        term /= 1.5;
    }
    sum / 1.5
}

/// Obstacle placement state carried across ticks.
#[derive(Debug, Clone)]
pub struct HurdleScheduler {
    catalog: HurdleCatalog,
    rng: SimpleRng,
    /// Ticks since the last obstacle's first column.
    ticks_since_last: u32,
    /// Last obstacle placed; its trailing gap constrains the next one.
    last: Option<HurdleId>,
    /// Rolled but deferred by its own leading-gap requirement.
    pending: Option<HurdleId>,
}

impl HurdleScheduler {
    /// Create a scheduler over the standard catalog.
    pub fn new(seed: u32) -> Self {
        Self::with_catalog(HurdleCatalog::standard(), seed)
    }

    /// Create a scheduler over a custom catalog.
    pub fn with_catalog(catalog: HurdleCatalog, seed: u32) -> Self {
        Self {
            catalog,
            rng: SimpleRng::new(seed),
            ticks_since_last: FRESH_FIELD_TICKS,
            last: None,
            pending: None,
        }
    }

    /// Decide the column pattern for the new rightmost column this tick.
    pub fn next_column(&mut self) -> u8 {
        self.ticks_since_last = self.ticks_since_last.saturating_add(1);

        // An in-progress multi-column obstacle always finishes first.
        if let Some(id) = self.last {
            let columns = self.catalog.shape(id).columns;
            if (self.ticks_since_last as usize) < columns.len() {
                return columns[self.ticks_since_last as usize];
            }
        }

        // A previously rolled obstacle waits for its own clearance.
        if let Some(id) = self.pending {
            if self.is_legal(id) {
                self.pending = None;
                return self.commit(id);
            }
            return 0;
        }

        // The longer the field has been empty, the likelier a spawn.
        let n = self.ticks_since_last.saturating_sub(MIN_HURDLE_INTERVAL);
        if self.rng.next_f64() >= spawn_probability(n) {
            return 0;
        }

        let id = self.catalog.pick(&mut self.rng);
        if self.is_legal(id) {
            return self.commit(id);
        }
        self.pending = Some(id);
        0
    }

    fn is_legal(&self, id: HurdleId) -> bool {
        let trail = self
            .last
            .map(|last| self.catalog.shape(last).trail_gap)
            .unwrap_or(0);
        let lead = self.catalog.shape(id).lead_gap;
        self.ticks_since_last > MIN_HURDLE_INTERVAL + trail + lead
    }

    fn commit(&mut self, id: HurdleId) -> u8 {
        let first = self.catalog.shape(id).columns[0];
        self.last = Some(id);
        self.ticks_since_last = 0;
        first
    }

    pub fn catalog(&self) -> &HurdleCatalog {
        &self.catalog
    }

    /// Ticks since the last obstacle began (0 on the tick it was committed).
    pub fn ticks_since_last(&self) -> u32 {
        self.ticks_since_last
    }

    pub fn last(&self) -> Option<HurdleId> {
        self.last
    }

    pub fn pending(&self) -> Option<HurdleId> {
        self.pending
    }

    /// Current RNG state (lets a restart continue the stream).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
