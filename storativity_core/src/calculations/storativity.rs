//! # Storativity Calculation
//!
//! Storage coefficients of a confined aquifer for each material class.
//!
//! ## Formulas
//!
//! With water weight `ρg` (density in kg/m³ times g = 9.81 m/s²), matrix
//! compressibility `α`, porosity `n`, water compressibility `β` and aquifer
//! thickness `b`:
//!
//! | Quantity | Formula                 | Units         |
//! |----------|-------------------------|---------------|
//! | Ss       | `ρg (α + nβ)`           | m⁻¹           |
//! | S        | `Ss · b`                | dimensionless |
//! | Sw       | `ρg (nβ) · b`           | dimensionless |
//! | Sa       | `ρg β`                  | scalar        |
//!
//! Products are evaluated left to right exactly as written, so results are
//! reproducible bit-for-bit against the reference tables.
//!
//! ## Example
//!
//! ```rust
//! use storativity_core::calculations::{StorativityCalculator, StorativityInput};
//! use storativity_core::materials::{MaterialClass, StorativityTables};
//!
//! let calc = StorativityCalculator::new(StorativityTables::builtin().unwrap());
//! let input = StorativityInput::from_keys("S", "avg", "mid", "sea_water", 15.0).unwrap();
//!
//! let result = calc.calculate(&input);
//! assert_eq!(result.values.len(), 5);
//! assert!(result.values[MaterialClass::Clay] > result.values[MaterialClass::SoundRock]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{GRAVITY, WATER_COMPRESSIBILITY};
use crate::errors::CalcResult;
use crate::materials::{MaterialVector, StorativityTables};
use crate::selections::{AlphaLevel, DensityCategory, PlotMode, PorosityLevel, Thickness};
use crate::units::{KgPerCubicMeter, KgPerLiter, SquareMetersPerNewton};

/// Specific storage Ss [m⁻¹] per material.
pub fn specific_storage(alpha: &MaterialVector, porosity: &MaterialVector, density: KgPerLiter) -> MaterialVector {
    let weight = KgPerCubicMeter::from(density).0;
    alpha.zip_with(porosity, |a, n| weight * GRAVITY * (a + n * WATER_COMPRESSIBILITY))
}

/// Storativity S = Ss · b per material.
pub fn storativity(
    alpha: &MaterialVector,
    porosity: &MaterialVector,
    density: KgPerLiter,
    thickness: Thickness,
) -> MaterialVector {
    specific_storage(alpha, porosity, density).scale(thickness.value())
}

/// Storativity due to the compressibility of water alone, Sw.
///
/// Independent of alpha.
pub fn storativity_water_compressibility(
    porosity: &MaterialVector,
    density: KgPerLiter,
    thickness: Thickness,
) -> MaterialVector {
    let weight = KgPerCubicMeter::from(density).0;
    let b = thickness.value();
    porosity.map(|n| weight * GRAVITY * (n * WATER_COMPRESSIBILITY) * b)
}

/// Aquifer-compressibility annotation value, Sa = ρgβ.
///
/// Independent of material and thickness.
pub fn storativity_aquifer_compressibility(density: KgPerLiter) -> f64 {
    let weight = KgPerCubicMeter::from(density).0;
    weight * GRAVITY * WATER_COMPRESSIBILITY
}

/// Input parameters for one chart.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "S",
///   "alpha": "avg",
///   "porosity": "mid",
///   "density": "sea_water",
///   "thickness": 15.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StorativityInput {
    /// Quantity to plot
    pub mode: PlotMode,
    /// Alpha table column
    pub alpha: AlphaLevel,
    /// Porosity table column
    pub porosity: PorosityLevel,
    /// Pore water type
    pub density: DensityCategory,
    /// Aquifer thickness
    pub thickness: Thickness,
}

impl StorativityInput {
    /// Parse every selection from its string key.
    ///
    /// All keys are checked before anything is returned; the first invalid
    /// key yields `CalcError::InvalidSelection`.
    pub fn from_keys(mode: &str, alpha: &str, porosity: &str, density: &str, thickness_m: f64) -> CalcResult<Self> {
        Ok(StorativityInput {
            mode: mode.parse()?,
            alpha: alpha.parse()?,
            porosity: porosity.parse()?,
            density: density.parse()?,
            thickness: Thickness::new(thickness_m)?,
        })
    }
}

/// Results for one chart.
///
/// ## JSON Example
///
/// ```json
/// {
///   "input": { "mode": "Ss", "alpha": "avg", "porosity": "mid", "density": "potable", "thickness": 15.0 },
///   "values": [0.0009832, 9.974e-5, 1.11e-5, 9.886e-5, 1.046e-6],
///   "aquifer_compressibility": 4.3164e-6,
///   "water_compressibility": 4.4e-10
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorativityResult {
    /// Selections the values were computed from
    pub input: StorativityInput,
    /// One value per material in chart order
    pub values: MaterialVector,
    /// Sa = ρgβ for the selected density
    pub aquifer_compressibility: f64,
    /// β
    pub water_compressibility: SquareMetersPerNewton,
}

/// Lookups and formulas bound to one immutable set of tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorativityCalculator {
    tables: StorativityTables,
}

impl StorativityCalculator {
    pub fn new(tables: StorativityTables) -> Self {
        StorativityCalculator { tables }
    }

    pub fn tables(&self) -> &StorativityTables {
        &self.tables
    }

    /// Alpha column [m²/N]
    pub fn alpha(&self, level: AlphaLevel) -> MaterialVector {
        self.tables.alpha.column(level)
    }

    /// Porosity column
    pub fn porosity(&self, level: PorosityLevel) -> MaterialVector {
        self.tables.porosity.column(level)
    }

    /// Water density [kg/L]
    pub fn density(&self, category: DensityCategory) -> KgPerLiter {
        category.density()
    }

    /// Alpha column by string key (`min`, `avg`, `max`)
    pub fn alpha_for_key(&self, key: &str) -> CalcResult<MaterialVector> {
        Ok(self.alpha(key.parse()?))
    }

    /// Porosity column by string key (`min`, `mid`, `max`)
    pub fn porosity_for_key(&self, key: &str) -> CalcResult<MaterialVector> {
        Ok(self.porosity(key.parse()?))
    }

    /// Density by string key (`potable`, `sea_water`, `brine`)
    pub fn density_for_key(&self, key: &str) -> CalcResult<KgPerLiter> {
        Ok(self.density(key.parse()?))
    }

    /// Values plotted for `input.mode`
    pub fn evaluate(&self, input: &StorativityInput) -> MaterialVector {
        let alpha = self.alpha(input.alpha);
        let porosity = self.porosity(input.porosity);
        let density = self.density(input.density);

        match input.mode {
            PlotMode::S => storativity(&alpha, &porosity, density, input.thickness),
            PlotMode::Ss => specific_storage(&alpha, &porosity, density),
            PlotMode::Sw => storativity_water_compressibility(&porosity, density, input.thickness),
        }
    }

    /// Compute the chart values and the Sa annotation.
    pub fn calculate(&self, input: &StorativityInput) -> StorativityResult {
        trace!(
            mode = %input.mode,
            alpha = %input.alpha,
            porosity = %input.porosity,
            density = %input.density,
            thickness = input.thickness.value(),
            "calculating"
        );

        StorativityResult {
            input: *input,
            values: self.evaluate(input),
            aquifer_compressibility: storativity_aquifer_compressibility(self.density(input.density)),
            water_compressibility: SquareMetersPerNewton(WATER_COMPRESSIBILITY),
        }
    }
}
