use serde::{Deserialize, Serialize};

use crate::unit::Unit;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// One plate denomination and how many pairs of it are on hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    unit: Unit,
    weight: f64,
    count: u32,
}

impl Plate {
    #[must_use]
    pub fn new(unit: Unit, weight: f64, count: u32) -> Self {
        Plate {
            unit,
            weight,
            count,
        }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Pairs owned, not single plates.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    #[must_use]
    pub fn has_weight(&self, weight: f64) -> bool {
        same_weight(self.weight, weight)
    }

    /// Every catalog plate for `unit`, lightest first, with no pairs owned.
    #[must_use]
    pub fn generate_inventory(unit: Unit) -> Vec<Plate> {
        unit.catalog()
            .iter()
            .map(|weight| Plate::new(unit, *weight, 0))
            .collect()
    }
}

pub(crate) fn same_weight(a: f64, b: f64) -> bool {
    (a - b).abs() < WEIGHT_TOLERANCE
}
