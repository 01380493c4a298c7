//! # Chart Description
//!
//! Front-end independent description of the bar chart drawn from a
//! [`StorativityResult`]: one bar per material on a log-scale y-axis, plus the
//! two explanatory annotations shown beneath it.

use serde::{Deserialize, Serialize};

use super::storativity::StorativityResult;
use crate::constants::{LOG_AXIS_DECADES, WATER_COMPRESSIBILITY};
use crate::materials::{MaterialClass, MaterialVector};
use crate::units::SquareMetersPerNewton;

/// Log10 y-axis spanning whole decades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogAxis {
    /// Lowest decade (10^lower)
    pub lower: i32,
    /// Highest decade (10^upper)
    pub upper: i32,
}

impl Default for LogAxis {
    fn default() -> Self {
        LogAxis {
            lower: LOG_AXIS_DECADES.0,
            upper: LOG_AXIS_DECADES.1,
        }
    }
}

impl LogAxis {
    /// Position of `value` along the axis in [0, 1].
    ///
    /// Values at or below 10^lower (including zero) map to 0; values above
    /// 10^upper are clamped to 1.
    pub fn fraction(&self, value: f64) -> f64 {
        if value.is_nan() || value <= 0.0 {
            return 0.0;
        }
        let span = f64::from(self.upper - self.lower);
        ((value.log10() - f64::from(self.lower)) / span).clamp(0.0, 1.0)
    }

    /// Tick labels, one per decade from lower to upper
    pub fn ticks(&self) -> Vec<String> {
        (self.lower..=self.upper).map(|d| format!("1e{d}")).collect()
    }
}

/// A bar chart ready for any renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub values: MaterialVector,
    pub y_axis: LogAxis,
}

impl BarChart {
    pub fn from_result(result: &StorativityResult) -> Self {
        let input = &result.input;
        let mut title = format!(
            "{} | alpha {}, porosity {}, {}",
            input.mode.label(),
            input.alpha,
            input.porosity.label(),
            input.density.label()
        );
        if input.mode.uses_thickness() {
            title.push_str(&format!(", b = {}", input.thickness));
        }

        BarChart {
            title,
            x_title: "Material".to_string(),
            y_title: input.mode.axis_title().to_string(),
            categories: MaterialClass::ALL.iter().map(|m| m.display_name().to_string()).collect(),
            values: result.values,
            y_axis: LogAxis::default(),
        }
    }

    /// `(category, value, axis fraction)` for every bar, in chart order
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.categories
            .iter()
            .zip(self.values.values().iter())
            .map(|(c, &v)| (c.as_str(), v, self.y_axis.fraction(v)))
    }
}

/// Fixed note about beta shown under the chart.
pub fn water_compressibility_note() -> String {
    format!("Water Compressibility (beta) = {}.", SquareMetersPerNewton(WATER_COMPRESSIBILITY))
}

/// Note reporting Sa for the selected density.
pub fn aquifer_compressibility_note(result: &StorativityResult) -> String {
    format!(
        "Storativity due to compressibility of aquifer (Sa): {:e}",
        result.aquifer_compressibility
    )
}
