use crate::{
    input::{coerce_count, parse_weight},
    inventory::Inventory,
    load_plan::{self, LoadPlan, LoadPlanRequest},
    plate_error::PlateError,
    settings::{self, PersistedSettings, SCHEMA_VERSION, SettingsStore},
    unit::Unit,
};

/// Everything the user can edit, plus the plan derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    inventory: Inventory,
    barbell_weight: f64,
    desired_total_weight: f64,
}

impl Calculator {
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        Calculator {
            inventory: Inventory::new(unit),
            barbell_weight: unit.default_barbell_weight(),
            desired_total_weight: unit.default_desired_weight(),
        }
    }

    /// Restores the stored session, or starts fresh in pounds.
    #[must_use]
    pub fn restore(store: &dyn SettingsStore) -> Self {
        settings::load(store).map_or_else(|| Calculator::new(Unit::Pound), Calculator::from_settings)
    }

    /// Saves the session. A failed write is logged and otherwise ignored.
    pub fn persist(&self, store: &dyn SettingsStore) {
        if let Err(error) = settings::save(store, &self.to_settings()) {
            tracing::warn!("Failed to save settings: {}", error);
        }
    }

    #[must_use]
    pub fn from_settings(settings: PersistedSettings) -> Self {
        let unit = settings.unit();
        Calculator {
            inventory: Inventory::from_plates(unit, settings.inventory),
            barbell_weight: settings.barbell_weight,
            desired_total_weight: settings.desired_total_weight,
        }
    }

    #[must_use]
    pub fn to_settings(&self) -> PersistedSettings {
        PersistedSettings {
            schema_version: SCHEMA_VERSION,
            uses_pound_mode: self.unit().is_pound(),
            inventory: self.inventory.plates().to_vec(),
            barbell_weight: self.barbell_weight,
            desired_total_weight: self.desired_total_weight,
        }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.inventory.unit()
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn barbell_weight(&self) -> f64 {
        self.barbell_weight
    }

    #[must_use]
    pub fn desired_total_weight(&self) -> f64 {
        self.desired_total_weight
    }

    /// Switches unit system. Counts are not converted: the inventory is
    /// regenerated empty and both weights go back to the new unit's defaults.
    /// Selecting the current unit changes nothing.
    pub fn set_unit(&mut self, unit: Unit) {
        if unit == self.unit() {
            return;
        }
        tracing::debug!(from = %self.unit(), to = %unit, "switching unit");
        *self = Calculator::new(unit);
    }

    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit().toggled());
    }

    /// Ignores anything but a positive, finite weight.
    pub fn set_barbell_weight(&mut self, weight: f64) {
        if weight.is_finite() && weight > 0.0 {
            self.barbell_weight = weight;
        } else {
            tracing::debug!(value = weight, "ignoring barbell weight");
        }
    }

    /// Ignores non-finite weights. Anything below the bar is allowed.
    pub fn set_desired_total_weight(&mut self, weight: f64) {
        if weight.is_finite() {
            self.desired_total_weight = weight;
        } else {
            tracing::debug!(value = weight, "ignoring desired weight");
        }
    }

    /// Ignores text that is not a number.
    pub fn set_barbell_weight_input(&mut self, text: &str) {
        match parse_weight(text) {
            Some(weight) => self.set_barbell_weight(weight),
            None => tracing::debug!(input = text, "ignoring barbell weight input"),
        }
    }

    /// Ignores text that is not a number.
    pub fn set_desired_weight_input(&mut self, text: &str) {
        match parse_weight(text) {
            Some(weight) => self.set_desired_total_weight(weight),
            None => tracing::debug!(input = text, "ignoring desired weight input"),
        }
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in the current unit.
    ///
    pub fn set_count(&mut self, weight: f64, count: u32) -> Result<(), PlateError> {
        self.inventory.set_count(weight, count)
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in the current unit.
    ///
    pub fn set_count_input(&mut self, weight: f64, text: &str) -> Result<(), PlateError> {
        self.inventory.set_count(weight, coerce_count(text))
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in the current unit.
    ///
    pub fn add_pair(&mut self, weight: f64) -> Result<(), PlateError> {
        self.inventory.increment(weight)
    }

    ///
    /// # Errors
    /// If no plate of `weight` exists in the current unit.
    ///
    pub fn remove_pair(&mut self, weight: f64) -> Result<(), PlateError> {
        self.inventory.decrement(weight)
    }

    #[must_use]
    pub fn plan(&self) -> LoadPlan {
        load_plan::plan(&LoadPlanRequest::new(
            self.desired_total_weight,
            self.barbell_weight,
            self.inventory.plates(),
        ))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(Unit::Pound)
    }
}
