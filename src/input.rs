use std::str::FromStr;

/// A weight typed by the user, or `None` if it is not a finite number.
#[must_use]
pub fn parse_weight(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite())
}

/// Command-line barbell weight: a positive number.
///
/// # Errors
/// If `text` is not a positive, finite number.
///
pub fn barbell_weight_arg(text: &str) -> Result<f64, String> {
    parse_weight(text)
        .filter(|weight| *weight > 0.0)
        .ok_or_else(|| "Barbell weight must be a positive number".to_string())
}

/// Command-line target weight: any finite number.
///
/// # Errors
/// If `text` is not a finite number.
///
pub fn target_weight_arg(text: &str) -> Result<f64, String> {
    parse_weight(text).ok_or_else(|| "Target weight must be a number".to_string())
}

/// A pair count typed by the user. Anything that is not a non-negative
/// number becomes zero; fractions are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(text: &str) -> u32 {
    let text = text.trim();
    if let Ok(count) = text.parse::<u32>() {
        return count;
    }

    match parse_weight(text) {
        Some(count) if count > 0.0 => count.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// `WEIGHTxCOUNT` (or `WEIGHT=COUNT`): pairs owned of one denomination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u32,
}

impl FromStr for PlateCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, count) = s
            .split_once(['x', 'X', '='])
            .ok_or_else(|| "Expected WEIGHTxCOUNT".to_string())?;
        let weight = parse_weight(weight)
            .filter(|weight| *weight > 0.0)
            .ok_or_else(|| "Invalid weight".to_string())?;
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| "Invalid count".to_string())?;
        Ok(PlateCount { weight, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weights() {
        assert_eq!(parse_weight(" 132.5 "), Some(132.5));
        assert_eq!(parse_weight("-10"), Some(-10.0));
        assert_eq!(parse_weight("abc"), None);
        assert_eq!(parse_weight("NaN"), None);
        assert_eq!(parse_weight(""), None);
    }

    #[test]
    fn barbell_argument_must_be_positive() {
        assert_eq!(barbell_weight_arg("20"), Ok(20.0));
        assert!(barbell_weight_arg("0").is_err());
        assert!(barbell_weight_arg("-45").is_err());
        assert!(barbell_weight_arg("inf").is_err());
        assert!(barbell_weight_arg("bar").is_err());
    }

    #[test]
    fn target_argument_must_be_finite() {
        assert_eq!(target_weight_arg("-5"), Ok(-5.0));
        assert!(target_weight_arg("inf").is_err());
        assert!(target_weight_arg("NaN").is_err());
    }

    #[test]
    fn coerces_counts() {
        assert_eq!(coerce_count("3"), 3);
        assert_eq!(coerce_count("2.9"), 2);
        assert_eq!(coerce_count("-1"), 0);
        assert_eq!(coerce_count("lots"), 0);
        assert_eq!(coerce_count(""), 0);
    }

    #[test]
    fn parses_plate_counts() {
        assert_eq!(
            "45x2".parse::<PlateCount>(),
            Ok(PlateCount {
                weight: 45.0,
                count: 2
            })
        );
        assert_eq!(
            "1.25=4".parse::<PlateCount>(),
            Ok(PlateCount {
                weight: 1.25,
                count: 4
            })
        );
        assert!("45".parse::<PlateCount>().is_err());
        assert!("45x-1".parse::<PlateCount>().is_err());
        assert!("0x1".parse::<PlateCount>().is_err());
    }
}
