//! Physical and presentation constants.

/// Standard gravitational acceleration [m/s²].
pub const GRAVITY: f64 = 9.81;

/// Compressibility of water, beta [m²/N].
///
/// Written as a product so the value carries the same bits as the
/// published reference tables (`4.4000000000000003e-10`).
pub const WATER_COMPRESSIBILITY: f64 = 4.40 * 1e-10;

/// Number of material classes in every output vector.
pub const MATERIAL_COUNT: usize = 5;

/// Aquifer thicknesses offered to the user [m].
pub const THICKNESS_OPTIONS_M: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 15.0, 30.0];

/// Log10 range of the chart y-axis, (lower decade, upper decade).
pub const LOG_AXIS_DECADES: (i32, i32) = (-7, 0);
