//! # Storativity Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input selections (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function or calculator method mapping one to the other
//!
//! ## Available Calculations
//!
//! - [`storativity`] - S, Ss, Sw and Sa from material tables
//! - [`chart`] - Bar chart description and annotations for a result

pub mod chart;
pub mod storativity;

// Re-export commonly used types
pub use chart::{aquifer_compressibility_note, water_compressibility_note, BarChart, LogAxis};
pub use storativity::{
    specific_storage, storativity, storativity_aquifer_compressibility, storativity_water_compressibility,
    StorativityCalculator, StorativityInput, StorativityResult,
};
