//! Unordered pool of live embers.

use crate::core_types::ember::{Ember, EmberStatus};
use crate::core_types::units::Kelvin;
use rand::Rng;

/// The set of embers currently in flight.
///
/// Membership changes in exactly two ways: the simulation inserts freshly
/// spawned embers, and [`advance_all`](EmberPool::advance_all) drops the
/// ones that signal retirement. Order is meaningless.
#[derive(Debug, Default)]
pub struct EmberPool {
    embers: Vec<Ember>,
}

impl EmberPool {
    pub fn new() -> Self {
        EmberPool { embers: Vec::new() }
    }

    /// Add a freshly spawned ember.
    pub fn insert(&mut self, ember: Ember) {
        self.embers.push(ember);
    }

    /// Advance every ember one tick and drop the retired ones.
    ///
    /// Uses a retained/removed partition (`retain_mut`) so each ember is
    /// advanced exactly once per tick - no entry is skipped or processed
    /// twice when its neighbor retires mid-pass.
    pub fn advance_all(&mut self, now_ms: u64, flame_temperature: Kelvin, rng: &mut impl Rng) {
        self.embers
            .retain_mut(|ember| ember.advance(now_ms, flame_temperature, rng) == EmberStatus::Alive);
    }

    pub fn len(&self) -> usize {
        self.embers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ember> {
        self.embers.iter()
    }
}
