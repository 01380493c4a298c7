//! # Parameter Selections
//!
//! Closed enumerations for every user-selectable dimension. String keys from a
//! front end are parsed exactly once, here; everything downstream works with
//! the typed values and cannot hold an invalid key.
//!
//! | Dimension  | Keys                          |
//! |------------|-------------------------------|
//! | alpha      | `min`, `avg`, `max`           |
//! | porosity   | `min`, `mid`, `max`           |
//! | density    | `potable`, `sea_water`, `brine` |
//! | mode       | `S`, `Ss`, `Sw`               |
//! | thickness  | 1, 2, 4, 8, 15, 30 (metres)   |
//!
//! ## Example
//!
//! ```rust
//! use storativity_core::selections::{AlphaLevel, DensityCategory, Thickness};
//!
//! let alpha: AlphaLevel = "avg".parse().unwrap();
//! assert_eq!(alpha, AlphaLevel::Avg);
//!
//! assert_eq!(DensityCategory::SeaWater.density().0, 1.025);
//! assert!(Thickness::new(3.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::THICKNESS_OPTIONS_M;
use crate::errors::{CalcError, CalcResult};
use crate::units::{KgPerLiter, Meters};

/// Which column of the alpha table to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaLevel {
    Min,
    #[default]
    Avg,
    Max,
}

impl AlphaLevel {
    pub const ALL: [AlphaLevel; 3] = [AlphaLevel::Min, AlphaLevel::Avg, AlphaLevel::Max];

    /// Selection key, also the CSV column header
    pub fn key(&self) -> &'static str {
        match self {
            AlphaLevel::Min => "min",
            AlphaLevel::Avg => "avg",
            AlphaLevel::Max => "max",
        }
    }

    /// Column position within a table row
    pub fn column(&self) -> usize {
        match self {
            AlphaLevel::Min => 0,
            AlphaLevel::Avg => 1,
            AlphaLevel::Max => 2,
        }
    }

}

/// Which column of the porosity table to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PorosityLevel {
    Min,
    #[default]
    Mid,
    Max,
}

impl PorosityLevel {
    pub const ALL: [PorosityLevel; 3] = [PorosityLevel::Min, PorosityLevel::Mid, PorosityLevel::Max];

    /// Selection key, also the CSV column header
    pub fn key(&self) -> &'static str {
        match self {
            PorosityLevel::Min => "min",
            PorosityLevel::Mid => "mid",
            PorosityLevel::Max => "max",
        }
    }

    /// Label shown in the selector ("middle" rather than "mid")
    pub fn label(&self) -> &'static str {
        match self {
            PorosityLevel::Min => "min",
            PorosityLevel::Mid => "middle",
            PorosityLevel::Max => "max",
        }
    }

    /// Column position within a table row
    pub fn column(&self) -> usize {
        match self {
            PorosityLevel::Min => 0,
            PorosityLevel::Mid => 1,
            PorosityLevel::Max => 2,
        }
    }

}

/// Pore water type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityCategory {
    Potable,
    #[default]
    SeaWater,
    Brine,
}

impl DensityCategory {
    pub const ALL: [DensityCategory; 3] = [
        DensityCategory::Potable,
        DensityCategory::SeaWater,
        DensityCategory::Brine,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DensityCategory::Potable => "potable",
            DensityCategory::SeaWater => "sea_water",
            DensityCategory::Brine => "brine",
        }
    }

    /// Water density for this category
    pub fn density(&self) -> KgPerLiter {
        match self {
            DensityCategory::Potable => KgPerLiter(1.000),
            DensityCategory::SeaWater => KgPerLiter(1.025),
            DensityCategory::Brine => KgPerLiter(1.088),
        }
    }

    /// Selector label, e.g. "sea water (1.025)"
    pub fn label(&self) -> String {
        format!("{} ({:.3})", self.key().replace('_', " "), self.density().0)
    }

}

/// Quantity plotted on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotMode {
    /// Storativity
    #[default]
    S,
    /// Specific storage
    Ss,
    /// Storativity due to compressibility of water
    Sw,
}

impl PlotMode {
    pub const ALL: [PlotMode; 3] = [PlotMode::S, PlotMode::Ss, PlotMode::Sw];

    pub fn key(&self) -> &'static str {
        match self {
            PlotMode::S => "S",
            PlotMode::Ss => "Ss",
            PlotMode::Sw => "Sw",
        }
    }

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            PlotMode::S => "S, storativity",
            PlotMode::Ss => "Ss, specific storage",
            PlotMode::Sw => "Sw, storativity due to compressibility of water",
        }
    }

    /// Y-axis title for the chart
    pub fn axis_title(&self) -> &'static str {
        match self {
            PlotMode::S => "S (dimensionless)",
            PlotMode::Ss => "Ss (m\u{207B}\u{00B9})",
            PlotMode::Sw => "Sw (dimensionless)",
        }
    }

    /// Whether the plotted quantity depends on aquifer thickness
    pub fn uses_thickness(&self) -> bool {
        !matches!(self, PlotMode::Ss)
    }
}

/// Aquifer thickness, restricted to the offered values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Thickness(Meters);

impl Thickness {
    /// Validate a thickness in metres against [`THICKNESS_OPTIONS_M`]
    pub fn new(meters: f64) -> CalcResult<Self> {
        if THICKNESS_OPTIONS_M.contains(&meters) {
            Ok(Thickness(Meters(meters)))
        } else {
            Err(Self::rejected(meters.to_string()))
        }
    }

    fn rejected(value: String) -> CalcError {
        let allowed: Vec<String> = THICKNESS_OPTIONS_M.iter().map(|t| t.to_string()).collect();
        let allowed: Vec<&str> = allowed.iter().map(String::as_str).collect();
        CalcError::invalid_selection("thickness", value, &allowed)
    }

    /// Every accepted thickness, smallest first
    pub fn options() -> impl Iterator<Item = Thickness> {
        THICKNESS_OPTIONS_M.into_iter().map(|m| Thickness(Meters(m)))
    }

    pub fn value(&self) -> f64 {
        self.0 .0
    }

}

impl Default for Thickness {
    fn default() -> Self {
        Thickness(Meters(15.0))
    }
}

impl TryFrom<f64> for Thickness {
    type Error = CalcError;

    fn try_from(meters: f64) -> CalcResult<Self> {
        Thickness::new(meters)
    }
}

impl From<Thickness> for f64 {
    fn from(t: Thickness) -> f64 {
        t.value()
    }
}

fn keys<T: Copy>(all: &[T], key: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(key).collect()
}

// Keys match exactly; no case folding or aliases.
macro_rules! impl_selection_traits {
    ($($ty:ty => $dimension:literal),*) => {$(
        impl FromStr for $ty {
            type Err = CalcError;

            fn from_str(s: &str) -> CalcResult<Self> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.key() == s)
                    .ok_or_else(|| CalcError::invalid_selection($dimension, s, &keys(&<$ty>::ALL, <$ty>::key)))
            }
        }
    )*};
}

impl_selection_traits!(
    AlphaLevel => "alpha",
    PorosityLevel => "porosity",
    DensityCategory => "density",
    PlotMode => "mode"
);

impl FromStr for Thickness {
    type Err = CalcError;

    /// Plain number of metres, e.g. "15"
    fn from_str(s: &str) -> CalcResult<Self> {
        match s.parse::<f64>() {
            Ok(v) => Thickness::new(v),
            Err(_) => Err(Self::rejected(s.to_string())),
        }
    }
}

macro_rules! impl_key_display {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.key())
            }
        }
    )*};
}

impl_key_display!(AlphaLevel, PorosityLevel, DensityCategory, PlotMode);

impl std::fmt::Display for Thickness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_values_exact() {
        assert_eq!(DensityCategory::Potable.density().0, 1.000);
        assert_eq!(DensityCategory::SeaWater.density().0, 1.025);
        assert_eq!(DensityCategory::Brine.density().0, 1.088);
    }

    #[test]
    fn test_parse_keys() {
        for level in AlphaLevel::ALL {
            assert_eq!(level.key().parse::<AlphaLevel>().unwrap(), level);
        }
        for level in PorosityLevel::ALL {
            assert_eq!(level.key().parse::<PorosityLevel>().unwrap(), level);
        }
        for category in DensityCategory::ALL {
            assert_eq!(category.key().parse::<DensityCategory>().unwrap(), category);
        }
        for mode in PlotMode::ALL {
            assert_eq!(mode.key().parse::<PlotMode>().unwrap(), mode);
        }
        assert_eq!("15".parse::<Thickness>().unwrap().value(), 15.0);
    }

    #[test]
    fn test_aliases_and_case_variants_rejected() {
        for key in ["average", "MEAN", "minimum", "MAX", "Avg", " avg"] {
            assert!(key.parse::<AlphaLevel>().unwrap_err().is_selection_error(), "{key}");
        }
        for key in ["middle", "maximum", "MID"] {
            assert!(key.parse::<PorosityLevel>().unwrap_err().is_selection_error(), "{key}");
        }
        for key in ["sea", "fresh", "fresh_water", "sea water", "Brine"] {
            assert!(key.parse::<DensityCategory>().unwrap_err().is_selection_error(), "{key}");
        }
        for key in ["s", "sw", "SS", "storativity", "water_compressibility"] {
            assert!(key.parse::<PlotMode>().unwrap_err().is_selection_error(), "{key}");
        }
        assert!("30 m".parse::<Thickness>().unwrap_err().is_selection_error());
    }

    #[test]
    fn test_invalid_alpha_is_invalid_selection() {
        let err = "huge".parse::<AlphaLevel>().unwrap_err();
        match err {
            CalcError::InvalidSelection { dimension, value, allowed } => {
                assert_eq!(dimension, "alpha");
                assert_eq!(value, "huge");
                assert_eq!(allowed, vec!["min", "avg", "max"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_keys_per_dimension() {
        assert!("avg".parse::<PorosityLevel>().unwrap_err().is_selection_error());
        assert!("mud".parse::<DensityCategory>().unwrap_err().is_selection_error());
        assert!("Sa".parse::<PlotMode>().unwrap_err().is_selection_error());
        assert!("deep".parse::<Thickness>().unwrap_err().is_selection_error());
    }

    #[test]
    fn test_thickness_options() {
        let all: Vec<f64> = Thickness::options().map(|t| t.value()).collect();
        assert_eq!(all, vec![1.0, 2.0, 4.0, 8.0, 15.0, 30.0]);
        assert!(Thickness::new(3.0).is_err());
        assert!(Thickness::new(0.0).is_err());
        assert!(Thickness::new(-1.0).is_err());
        assert_eq!(Thickness::default().value(), 15.0);
    }

    #[test]
    fn test_thickness_serde_validates() {
        let t: Thickness = serde_json::from_str("8").unwrap();
        assert_eq!(t.value(), 8.0);
        assert_eq!(serde_json::to_string(&t).unwrap(), "8.0");
        assert!(serde_json::from_str::<Thickness>("9").is_err());
    }

    #[test]
    fn test_selection_serialization_keys() {
        assert_eq!(serde_json::to_string(&DensityCategory::SeaWater).unwrap(), "\"sea_water\"");
        assert_eq!(serde_json::to_string(&AlphaLevel::Avg).unwrap(), "\"avg\"");
        assert_eq!(serde_json::to_string(&PlotMode::Sw).unwrap(), "\"Sw\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(DensityCategory::SeaWater.label(), "sea water (1.025)");
        assert_eq!(DensityCategory::Potable.label(), "potable (1.000)");
        assert_eq!(PlotMode::Ss.axis_title(), "Ss (m⁻¹)");
        assert!(!PlotMode::Ss.uses_thickness());
    }
}
