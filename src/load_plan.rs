use std::fmt::Display;

use itertools::Itertools;

use crate::plate::Plate;

#[derive(Clone, Copy, Debug)]
pub struct LoadPlanRequest<'a> {
    pub desired_total_weight: f64,
    pub barbell_weight: f64,
    pub inventory: &'a [Plate],
}

impl<'a> LoadPlanRequest<'a> {
    #[must_use]
    pub fn new(desired_total_weight: f64, barbell_weight: f64, inventory: &'a [Plate]) -> Self {
        LoadPlanRequest {
            desired_total_weight,
            barbell_weight,
            inventory,
        }
    }

    /// Weight each side of the bar has to carry. Non-positive when the bar
    /// alone meets the target.
    #[must_use]
    pub fn per_side_target(&self) -> f64 {
        (self.desired_total_weight - self.barbell_weight) / 2.0
    }
}

/// Pairs of one denomination to put on the bar, one plate per side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateLoad {
    weight: f64,
    pairs: u32,
}

impl PlateLoad {
    #[must_use]
    pub fn new(weight: f64, pairs: u32) -> Self {
        PlateLoad { weight, pairs }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn pairs(&self) -> u32 {
        self.pairs
    }

    #[must_use]
    pub fn per_side_weight(&self) -> f64 {
        self.weight * f64::from(self.pairs)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadPlan {
    entries: Vec<PlateLoad>,
    remainder_per_side: f64,
}

impl LoadPlan {
    /// Heaviest denomination first.
    #[must_use]
    pub fn entries(&self) -> &[PlateLoad] {
        &self.entries
    }

    /// Weight per side still missing. Zero or negative means nothing is
    /// missing; only a positive value is a shortfall.
    #[must_use]
    pub fn remainder_per_side(&self) -> f64 {
        self.remainder_per_side
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.remainder_per_side <= 0.0
    }

    #[must_use]
    pub fn shortfall_per_side(&self) -> f64 {
        self.remainder_per_side.max(0.0)
    }

    #[must_use]
    pub fn per_side_weight(&self) -> f64 {
        self.entries.iter().map(PlateLoad::per_side_weight).sum()
    }

    #[must_use]
    pub fn loaded_total(&self, barbell_weight: f64) -> f64 {
        barbell_weight + self.per_side_weight() * 2.0
    }
}

impl Display for LoadPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "bar only");
        }

        let loads = self
            .entries
            .iter()
            .map(|load| format!("{} x{}", load.weight, load.pairs))
            .join(", ");

        write!(f, "{loads} per side")
    }
}

/// Greedy per-side loading: heaviest plates first, each taken as often as
/// both the remaining weight and the owned pairs allow, never revisited.
///
/// This can leave a shortfall that another combination would have covered.
#[must_use]
pub fn plan(request: &LoadPlanRequest) -> LoadPlan {
    let mut remaining = request.per_side_target();
    let mut entries = Vec::new();

    let candidates = request
        .inventory
        .iter()
        .filter(|plate| plate.count() > 0)
        .sorted_by(|a, b| b.weight().total_cmp(&a.weight()));

    for plate in candidates {
        let pairs = pairs_to_load(plate, remaining);
        if pairs > 0 {
            remaining -= plate.weight() * f64::from(pairs);
            entries.push(PlateLoad::new(plate.weight(), pairs));
        }
    }

    tracing::debug!(
        desired = request.desired_total_weight,
        barbell = request.barbell_weight,
        remainder = remaining,
        "planned load"
    );

    LoadPlan {
        entries,
        remainder_per_side: remaining,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pairs_to_load(plate: &Plate, remaining: f64) -> u32 {
    if plate.weight() <= 0.0 || remaining < plate.weight() {
        return 0;
    }

    let fitting = (remaining / plate.weight()).floor() as u32;
    fitting.min(plate.count())
}
