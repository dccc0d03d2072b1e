use itertools::Itertools;

use crate::{
    plate::{Plate, same_weight},
    plate_error::PlateError,
    unit::Unit,
};

/// The plates available for one unit system, one record per catalog weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    unit: Unit,
    plates: Vec<Plate>,
}

impl Inventory {
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        Inventory {
            unit,
            plates: Plate::generate_inventory(unit),
        }
    }

    /// Wraps stored plates as-is; see [`Inventory::is_well_formed`].
    #[must_use]
    pub fn from_plates(unit: Unit, plates: Vec<Plate>) -> Self {
        Inventory { unit, plates }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn get(&self, weight: f64) -> Option<&Plate> {
        self.plates.iter().find(|plate| plate.has_weight(weight))
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in this inventory's unit.
    ///
    pub fn set_count(&mut self, weight: f64, count: u32) -> Result<(), PlateError> {
        self.get_mut(weight)?.set_count(count);
        Ok(())
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in this inventory's unit.
    ///
    pub fn increment(&mut self, weight: f64) -> Result<(), PlateError> {
        self.get_mut(weight)?.increment();
        Ok(())
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in this inventory's unit.
    ///
    pub fn decrement(&mut self, weight: f64) -> Result<(), PlateError> {
        self.get_mut(weight)?.decrement();
        Ok(())
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.plates.iter().map(Plate::count).sum()
    }

    /// True when every record belongs to this unit, sits in its catalog and no
    /// weight appears twice.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let in_catalog = self.plates.iter().all(|plate| {
            plate.unit() == self.unit
                && self
                    .unit
                    .catalog()
                    .iter()
                    .any(|weight| same_weight(*weight, plate.weight()))
        });

        let distinct = self
            .plates
            .iter()
            .map(Plate::weight)
            .sorted_by(f64::total_cmp)
            .tuple_windows()
            .all(|(a, b)| !same_weight(a, b));

        in_catalog && distinct
    }

    fn get_mut(&mut self, weight: f64) -> Result<&mut Plate, PlateError> {
        self.plates
            .iter_mut()
            .find(|plate| plate.has_weight(weight))
            .ok_or(PlateError::UnknownDenomination(weight, self.unit))
    }
}
