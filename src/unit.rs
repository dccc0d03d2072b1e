use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

const LB_TO_KG: f64 = 0.453_592;

const POUND_CATALOG: [f64; 7] = [1.25, 2.5, 5.0, 10.0, 25.0, 35.0, 45.0];
const KILOGRAM_CATALOG: [f64; 7] = [1.25, 2.5, 5.0, 10.0, 15.0, 20.0, 25.0];

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "LB")]
    Pound,
    #[serde(rename = "KG")]
    Kilogram,
}

impl Unit {
    /// Plate weights sold in this unit, lightest first.
    #[must_use]
    pub fn catalog(&self) -> &'static [f64] {
        match self {
            Unit::Pound => &POUND_CATALOG,
            Unit::Kilogram => &KILOGRAM_CATALOG,
        }
    }

    #[must_use]
    pub fn default_barbell_weight(&self) -> f64 {
        match self {
            Unit::Pound => 45.0,
            Unit::Kilogram => 20.0,
        }
    }

    #[must_use]
    pub fn default_desired_weight(&self) -> f64 {
        match self {
            Unit::Pound => 135.0,
            Unit::Kilogram => 75.0,
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Unit {
        match self {
            Unit::Pound => Unit::Kilogram,
            Unit::Kilogram => Unit::Pound,
        }
    }

    #[must_use]
    pub fn is_pound(&self) -> bool {
        *self == Unit::Pound
    }

    #[must_use]
    pub fn from_pound_mode(uses_pound_mode: bool) -> Unit {
        if uses_pound_mode {
            Unit::Pound
        } else {
            Unit::Kilogram
        }
    }

    /// Expresses `weight` (given in `self`) in `to`.
    #[must_use]
    pub fn convert(&self, weight: f64, to: Unit) -> f64 {
        match (self, to) {
            (Unit::Pound, Unit::Kilogram) => weight * LB_TO_KG,
            (Unit::Kilogram, Unit::Pound) => weight / LB_TO_KG,
            _ => weight,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Pound => write!(f, "lb"),
            Unit::Kilogram => write!(f, "kg"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pound),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Unit::Kilogram),
            _ => Err("Invalid unit.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_ascending_and_exact() {
        assert_eq!(
            Unit::Pound.catalog(),
            &[1.25, 2.5, 5.0, 10.0, 25.0, 35.0, 45.0]
        );
        assert_eq!(
            Unit::Kilogram.catalog(),
            &[1.25, 2.5, 5.0, 10.0, 15.0, 20.0, 25.0]
        );
        for unit in [Unit::Pound, Unit::Kilogram] {
            assert!(unit.catalog().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn defaults_per_unit() {
        assert_eq!(Unit::Pound.default_barbell_weight(), 45.0);
        assert_eq!(Unit::Pound.default_desired_weight(), 135.0);
        assert_eq!(Unit::Kilogram.default_barbell_weight(), 20.0);
        assert_eq!(Unit::Kilogram.default_desired_weight(), 75.0);
    }

    #[test]
    fn converts_between_units() {
        let kg = Unit::Pound.convert(100.0, Unit::Kilogram);
        assert!((kg - 45.3592).abs() < 1e-9);
        let lb = Unit::Kilogram.convert(kg, Unit::Pound);
        assert!((lb - 100.0).abs() < 1e-9);
        assert_eq!(Unit::Kilogram.convert(20.0, Unit::Kilogram), 20.0);
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("LBS".parse::<Unit>(), Ok(Unit::Pound));
        assert_eq!(" kg ".parse::<Unit>(), Ok(Unit::Kilogram));
        assert!("stone".parse::<Unit>().is_err());
    }

    #[test]
    fn serializes_as_short_codes() {
        assert_eq!(serde_json::to_string(&Unit::Pound).unwrap(), "\"LB\"");
        assert_eq!(
            serde_json::from_str::<Unit>("\"KG\"").unwrap(),
            Unit::Kilogram
        );
    }
}
