//! # Aquifer Materials
//!
//! The five aquifer material classes and the fixed-length vectors that carry
//! one value per class. Every per-material quantity in this crate (alpha,
//! porosity, Ss, S, Sw) is a [`MaterialVector`], so the material ordering is
//! fixed by the type rather than by convention.
//!
//! ## Ordering
//!
//! Clay, Sand, Gravel, Jointed Rock, Sound Rock. This is the chart x-axis
//! order and the row order of both lookup tables.
//!
//! ## Example
//!
//! ```rust
//! use storativity_core::materials::{MaterialClass, MaterialVector};
//!
//! let porosity = MaterialVector::new([0.5, 0.38, 0.3, 0.175, 0.015]);
//! assert_eq!(porosity[MaterialClass::Gravel], 0.3);
//! assert_eq!(MaterialClass::ALL[3].display_name(), "Jointed Rock");
//! ```

pub mod tables;

pub use tables::{AlphaTable, PorosityTable, StorativityTables, TableDisplay};

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::constants::MATERIAL_COUNT;
use crate::errors::{CalcError, CalcResult};

/// Aquifer material classes, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialClass {
    Clay,
    Sand,
    Gravel,
    #[serde(rename = "Jointed Rock")]
    JointedRock,
    #[serde(rename = "Sound Rock")]
    SoundRock,
}

impl MaterialClass {
    /// All material classes in chart order
    pub const ALL: [MaterialClass; MATERIAL_COUNT] = [
        MaterialClass::Clay,
        MaterialClass::Sand,
        MaterialClass::Gravel,
        MaterialClass::JointedRock,
        MaterialClass::SoundRock,
    ];

    /// Position of this class in every [`MaterialVector`]
    pub fn index(&self) -> usize {
        match self {
            MaterialClass::Clay => 0,
            MaterialClass::Sand => 1,
            MaterialClass::Gravel => 2,
            MaterialClass::JointedRock => 3,
            MaterialClass::SoundRock => 4,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialClass::Clay => "Clay",
            MaterialClass::Sand => "Sand",
            MaterialClass::Gravel => "Gravel",
            MaterialClass::JointedRock => "Jointed Rock",
            MaterialClass::SoundRock => "Sound Rock",
        }
    }

    /// Parse from common string representations ("Jointed Rock", "jointed_rock", "JOINTED-ROCK")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "CLAY" => Ok(MaterialClass::Clay),
            "SAND" => Ok(MaterialClass::Sand),
            "GRAVEL" => Ok(MaterialClass::Gravel),
            "JOINTEDROCK" | "JOINTED" => Ok(MaterialClass::JointedRock),
            "SOUNDROCK" | "SOUND" => Ok(MaterialClass::SoundRock),
            _ => Err(CalcError::material_not_found(s.trim())),
        }
    }
}

impl std::fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One value per [`MaterialClass`], in chart order.
///
/// Serializes as a plain five-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialVector([f64; MATERIAL_COUNT]);

impl MaterialVector {
    /// Wrap values already in chart order
    pub const fn new(values: [f64; MATERIAL_COUNT]) -> Self {
        MaterialVector(values)
    }

    /// Build a vector by evaluating `f` for each material in chart order
    pub fn from_fn(mut f: impl FnMut(MaterialClass) -> f64) -> Self {
        let mut values = [0.0; MATERIAL_COUNT];
        for material in MaterialClass::ALL {
            values[material.index()] = f(material);
        }
        MaterialVector(values)
    }

    /// Always [`MATERIAL_COUNT`]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value for a single material
    pub fn get(&self, material: MaterialClass) -> f64 {
        self.0[material.index()]
    }

    /// Raw values in chart order
    pub fn values(&self) -> &[f64; MATERIAL_COUNT] {
        &self.0
    }

    /// Iterate `(material, value)` pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialClass, f64)> + '_ {
        MaterialClass::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Apply `f` to every value
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        MaterialVector(self.0.map(f))
    }

    /// Combine two vectors elementwise
    pub fn zip_with(&self, other: &MaterialVector, f: impl Fn(f64, f64) -> f64) -> Self {
        MaterialVector::from_fn(|m| f(self.get(m), other.get(m)))
    }

    /// Multiply every value by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

impl Index<MaterialClass> for MaterialVector {
    type Output = f64;

    fn index(&self, material: MaterialClass) -> &f64 {
        &self.0[material.index()]
    }
}

impl From<[f64; MATERIAL_COUNT]> for MaterialVector {
    fn from(values: [f64; MATERIAL_COUNT]) -> Self {
        MaterialVector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_order() {
        let names: Vec<_> = MaterialClass::ALL.iter().map(|m| m.display_name()).collect();
        assert_eq!(names, ["Clay", "Sand", "Gravel", "Jointed Rock", "Sound Rock"]);
        for (i, m) in MaterialClass::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(MaterialClass::from_str_flexible("Jointed Rock").unwrap(), MaterialClass::JointedRock);
        assert_eq!(MaterialClass::from_str_flexible("sound_rock").unwrap(), MaterialClass::SoundRock);
        assert_eq!(MaterialClass::from_str_flexible(" clay ").unwrap(), MaterialClass::Clay);
        assert!(matches!(
            MaterialClass::from_str_flexible("basalt"),
            Err(CalcError::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn test_vector_helpers() {
        let v = MaterialVector::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(v.len(), 5);
        assert_eq!(v[MaterialClass::SoundRock], 5.0);
        assert_eq!(v.scale(2.0).values(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(v.zip_with(&v, |a, b| a * b).get(MaterialClass::Gravel), 9.0);

        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(pairs[1], (MaterialClass::Sand, 2.0));
    }

    #[test]
    fn test_vector_serialization() {
        let v = MaterialVector::new([0.5, 0.38, 0.3, 0.175, 0.015]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.5,0.38,0.3,0.175,0.015]");
        let parsed: MaterialVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, parsed);
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&MaterialClass::JointedRock).unwrap();
        assert_eq!(json, "\"Jointed Rock\"");
    }
}
