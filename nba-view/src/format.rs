//! Display-time formatting. Values are rounded only here, never in the
//! view-model itself.

use serde::Serialize;
use std::fmt;

/// Fraction in [0, 1] as a percentage with one decimal: `0.634` -> `63.4%`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Attempt or make count with one decimal.
pub fn format_count(value: f64) -> String {
    format!("{:.1}", value)
}

/// Expected points per shot with two decimals.
pub fn format_ev(value: f64) -> String {
    format!("{:.2}", value)
}

/// Signed figure with one decimal and an explicit `+` for gains.
pub fn format_signed(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    if value > 0.0 && rounded != "0.0" {
        format!("+{}", rounded)
    } else if rounded == "-0.0" {
        "0.0".to_string()
    } else {
        rounded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Increase,
    Decrease,
    NoChange,
}

/// Recommended adjustment to a zone's attempts, e.g. "Decrease by 5.0".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuggestedChange {
    pub direction: Direction,
    pub magnitude: f64,
}

impl SuggestedChange {
    /// Build from `optimal - current`.
    pub fn from_difference(difference: f64) -> Self {
        let magnitude = difference.abs();
        let direction = if format_count(magnitude) == "0.0" {
            Direction::NoChange
        } else if difference > 0.0 {
            Direction::Increase
        } else {
            Direction::Decrease
        };
        Self {
            direction,
            magnitude,
        }
    }

    pub fn is_increase(&self) -> bool {
        self.direction == Direction::Increase
    }
}

impl fmt::Display for SuggestedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Increase => write!(f, "Increase by {}", format_count(self.magnitude)),
            Direction::Decrease => write!(f, "Decrease by {}", format_count(self.magnitude)),
            Direction::NoChange => f.write_str("No change"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.634), "63.4%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }

    #[test]
    fn test_format_count_rounds_at_display() {
        assert_eq!(format_count(29.94), "29.9");
        assert_eq!(format_count(8.568), "8.6");
        assert_eq!(format_ev(1.26), "1.26");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(1.4), "+1.4");
        assert_eq!(format_signed(-2.52), "-2.5");
        assert_eq!(format_signed(-0.01), "0.0");
        assert_eq!(format_signed(0.0), "0.0");
    }

    #[test]
    fn test_suggested_change() {
        assert_eq!(SuggestedChange::from_difference(-5.0).to_string(), "Decrease by 5.0");
        assert_eq!(SuggestedChange::from_difference(3.04).to_string(), "Increase by 3.0");
        assert_eq!(SuggestedChange::from_difference(0.02).to_string(), "No change");
        assert!(SuggestedChange::from_difference(0.5).is_increase());
    }
}
