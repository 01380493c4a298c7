//! # storativity_core - Groundwater Storativity Engine
//!
//! `storativity_core` computes how much water a confined aquifer releases from
//! storage for five material classes (clay, sand, gravel, jointed rock, sound
//! rock), given the aquifer's compressibility, porosity, pore-water density and
//! thickness. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable lookup tables
//! - **Closed selections**: Every choice is an enum; string keys are parsed once
//! - **Bit-exact**: Formulas evaluate in a fixed order so results are reproducible
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use storativity_core::{StorativityCalculator, StorativityInput, StorativityTables};
//!
//! // Tables are constructed once and never change
//! let calc = StorativityCalculator::new(StorativityTables::builtin().unwrap());
//!
//! let input = StorativityInput::from_keys("S", "avg", "mid", "sea_water", 15.0).unwrap();
//! let result = calc.calculate(&input);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - S, Ss, Sw, Sa and the chart description
//! - [`materials`] - Material classes, per-material vectors and lookup tables
//! - [`selections`] - Alpha, porosity, density, plot mode and thickness choices
//! - [`constants`] - Gravity, water compressibility and chart constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading lookup tables from disk

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod selections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BarChart, StorativityCalculator, StorativityInput, StorativityResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::load_tables;
pub use materials::{MaterialClass, MaterialVector, StorativityTables};
pub use selections::{AlphaLevel, DensityCategory, PlotMode, PorosityLevel, Thickness};
