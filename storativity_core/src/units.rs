//! # Unit Types
//!
//! Type-safe wrappers for the physical quantities that flow through the
//! storativity formulas. They are plain `f64` newtypes that serialize as bare
//! numbers.
//!
//! ## SI Units
//!
//! - Length: metres (m)
//! - Density: kilograms per litre (kg/L) for selection, kilograms per cubic metre (kg/m³) in formulas
//! - Compressibility: square metres per newton (m²/N)
//!
//! ## Example
//!
//! ```rust
//! use storativity_core::units::{KgPerCubicMeter, KgPerLiter};
//!
//! let sea_water = KgPerLiter(1.025);
//! let weight: KgPerCubicMeter = sea_water.into();
//! assert_eq!(weight.0, 1025.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Density Units
// ============================================================================

/// Density in kilograms per litre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerLiter(pub f64);

/// Density in kilograms per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCubicMeter(pub f64);

impl From<KgPerLiter> for KgPerCubicMeter {
    fn from(d: KgPerLiter) -> Self {
        KgPerCubicMeter(d.0 * 1000.0)
    }
}

// ============================================================================
// Compressibility Units
// ============================================================================

/// Compressibility in square metres per newton (equivalently 1/Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetersPerNewton(pub f64);

// ============================================================================
// Display
// ============================================================================

impl std::fmt::Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}

impl std::fmt::Display for KgPerLiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg/L", self.0)
    }
}

impl std::fmt::Display for KgPerCubicMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} kg/m³", self.0)
    }
}

impl std::fmt::Display for SquareMetersPerNewton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2E} m²/N", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_conversion() {
        let potable: KgPerCubicMeter = KgPerLiter(1.0).into();
        assert_eq!(potable.0, 1000.0);

        let brine: KgPerCubicMeter = KgPerLiter(1.088).into();
        assert_eq!(brine.0, 1088.0);

        let sea_water: KgPerCubicMeter = KgPerLiter(1.025).into();
        assert_eq!(sea_water.0, 1025.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(KgPerLiter(1.025).to_string(), "1.025 kg/L");
        assert_eq!(Meters(15.0).to_string(), "15 m");
        assert_eq!(SquareMetersPerNewton(4.4e-10).to_string(), "4.40E-10 m²/N");
    }

    #[test]
    fn test_serialization_is_bare_number() {
        let json = serde_json::to_string(&Meters(8.0)).unwrap();
        assert_eq!(json, "8.0");
    }
}
