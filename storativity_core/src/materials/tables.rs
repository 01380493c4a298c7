//! Material Property Tables
//!
//! Alpha (matrix compressibility) and porosity ranges for each material
//! class. Each table has a material column and three numeric columns
//! (alpha: min/avg/max, porosity: min/mid/max) and is read from CSV.
//!
//! The reference dataset ships inside the crate (`data/alpha.csv`,
//! `data/porosity.csv`) and is available through
//! [`StorativityTables::builtin`]. A front end can instead load its own copies
//! with [`crate::file_io::load_tables`].
//!
//! Tables are validated on load: every material exactly once, finite
//! values, non-decreasing columns, alpha > 0 and 0 < porosity <= 1. Rows may
//! appear in any order in the file.

use std::io::Read;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MaterialClass, MaterialVector};
use crate::constants::MATERIAL_COUNT;
use crate::errors::{CalcError, CalcResult};
use crate::selections::{AlphaLevel, PorosityLevel};

const ALPHA_CSV: &str = include_str!("../../data/alpha.csv");
const POROSITY_CSV: &str = include_str!("../../data/porosity.csv");

static BUILTIN: Lazy<CalcResult<StorativityTables>> =
    Lazy::new(|| StorativityTables::from_readers(ALPHA_CSV.as_bytes(), POROSITY_CSV.as_bytes()));

type Rows = [[f64; 3]; MATERIAL_COUNT];

/// Compressibility of the aquifer matrix, alpha [m²/N]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlphaTable {
    rows: Rows,
}

impl AlphaTable {
    pub const NAME: &'static str = "alpha";

    /// Parse from CSV with a header row (`Material,min,avg,max`)
    pub fn from_reader<R: Read>(reader: R) -> CalcResult<Self> {
        let layout = TableLayout {
            name: Self::NAME,
            columns: [&["min", "minimum"], &["avg", "average", "mean"], &["max", "maximum"]],
            check: |v| {
                if v > 0.0 {
                    Ok(())
                } else {
                    Err("compressibility must be positive")
                }
            },
        };
        Ok(AlphaTable { rows: layout.parse(reader)? })
    }

    /// Column for the given level, one value per material
    pub fn column(&self, level: AlphaLevel) -> MaterialVector {
        MaterialVector::from_fn(|m| self.rows[m.index()][level.column()])
    }

    /// (min, avg, max) for one material
    pub fn row(&self, material: MaterialClass) -> [f64; 3] {
        self.rows[material.index()]
    }

    pub fn display(&self) -> TableDisplay {
        TableDisplay::build(
            ["Material", "Alpha min (m²/N)", "Alpha avg (m²/N)", "Alpha max (m²/N)"],
            &self.rows,
            |v| format!("{:.1E}", v),
        )
    }
}

/// Porosity fraction of the aquifer volume (dimensionless)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PorosityTable {
    rows: Rows,
}

impl PorosityTable {
    pub const NAME: &'static str = "porosity";

    /// Parse from CSV with a header row (`Material,min,mid,max`)
    pub fn from_reader<R: Read>(reader: R) -> CalcResult<Self> {
        let layout = TableLayout {
            name: Self::NAME,
            columns: [&["min", "minimum"], &["mid", "middle"], &["max", "maximum"]],
            check: |v| {
                if v > 0.0 && v <= 1.0 {
                    Ok(())
                } else {
                    Err("porosity must be in (0, 1]")
                }
            },
        };
        Ok(PorosityTable { rows: layout.parse(reader)? })
    }

    /// Column for the given level, one value per material
    pub fn column(&self, level: PorosityLevel) -> MaterialVector {
        MaterialVector::from_fn(|m| self.rows[m.index()][level.column()])
    }

    /// (min, mid, max) for one material
    pub fn row(&self, material: MaterialClass) -> [f64; 3] {
        self.rows[material.index()]
    }

    pub fn display(&self) -> TableDisplay {
        TableDisplay::build(
            ["Material", "Porosity min", "Porosity mid", "Porosity max"],
            &self.rows,
            |v| v.to_string(),
        )
    }
}

/// The immutable lookup data a calculator is built from.
///
/// Construct once at startup and hand it to
/// [`StorativityCalculator::new`](crate::calculations::StorativityCalculator::new).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorativityTables {
    pub alpha: AlphaTable,
    pub porosity: PorosityTable,
}

impl StorativityTables {
    pub fn new(alpha: AlphaTable, porosity: PorosityTable) -> Self {
        StorativityTables { alpha, porosity }
    }

    /// Parse both tables from CSV sources
    pub fn from_readers<A: Read, P: Read>(alpha: A, porosity: P) -> CalcResult<Self> {
        Ok(StorativityTables {
            alpha: AlphaTable::from_reader(alpha)?,
            porosity: PorosityTable::from_reader(porosity)?,
        })
    }

    /// The reference dataset compiled into the crate.
    ///
    /// Parsed on first use and shared for the rest of the process.
    ///
    /// ```rust
    /// use storativity_core::materials::{MaterialClass, StorativityTables};
    ///
    /// let tables = StorativityTables::builtin().unwrap();
    /// assert_eq!(tables.porosity.row(MaterialClass::Clay), [0.45, 0.5, 0.55]);
    /// ```
    pub fn builtin() -> CalcResult<Self> {
        (*BUILTIN).clone()
    }
}

/// String rendering of a lookup table for read-only display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDisplay {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableDisplay {
    fn build(headers: [&str; 4], rows: &Rows, fmt: impl Fn(f64) -> String) -> Self {
        TableDisplay {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: MaterialClass::ALL
                .iter()
                .map(|m| {
                    let mut cells = vec![m.display_name().to_string()];
                    cells.extend(rows[m.index()].iter().map(|v| fmt(*v)));
                    cells
                })
                .collect(),
        }
    }

    /// Width of each column in characters
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

struct TableLayout {
    name: &'static str,
    columns: [&'static [&'static str]; 3],
    check: fn(f64) -> Result<(), &'static str>,
}

impl TableLayout {
    fn parse<R: Read>(&self, reader: R) -> CalcResult<Rows> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CalcError::table_error(self.name, format!("failed to read header row: {e}")))?
            .clone();

        let material_idx = find_column(&headers, &["material", "materials"]).unwrap_or(0);
        let mut value_idx = [0usize; 3];
        for (slot, names) in value_idx.iter_mut().zip(self.columns.iter()) {
            *slot = find_column(&headers, names)
                .ok_or_else(|| CalcError::table_error(self.name, format!("missing column '{}'", names[0])))?;
        }

        let mut rows: [Option<[f64; 3]>; MATERIAL_COUNT] = [None; MATERIAL_COUNT];

        for (row_idx, record) in csv_reader.records().enumerate() {
            let line = row_idx + 2;
            let record = record
                .map_err(|e| CalcError::table_error(self.name, format!("CSV parse error at line {line}: {e}")))?;

            let name = record
                .get(material_idx)
                .ok_or_else(|| CalcError::table_error(self.name, format!("missing material at line {line}")))?;
            let material = MaterialClass::from_str_flexible(name)?;

            let mut values = [0.0; 3];
            for (value, (&idx, names)) in values.iter_mut().zip(value_idx.iter().zip(self.columns.iter())) {
                let raw = record.get(idx).ok_or_else(|| {
                    CalcError::table_error(self.name, format!("missing '{}' value at line {line}", names[0]))
                })?;
                *value = raw.parse::<f64>().map_err(|_| {
                    CalcError::table_error(self.name, format!("invalid number '{raw}' at line {line}"))
                })?;
                if !value.is_finite() {
                    return Err(CalcError::table_error(self.name, format!("non-finite value at line {line}")));
                }
                (self.check)(*value).map_err(|reason| {
                    CalcError::table_error(self.name, format!("{material} '{}' = {raw}: {reason}", names[0]))
                })?;
            }

            if values[0] > values[1] || values[1] > values[2] {
                return Err(CalcError::table_error(
                    self.name,
                    format!("{material} values must be non-decreasing across columns"),
                ));
            }

            let slot = &mut rows[material.index()];
            if slot.is_some() {
                return Err(CalcError::table_error(self.name, format!("duplicate row for {material}")));
            }
            *slot = Some(values);
        }

        let mut out = [[0.0; 3]; MATERIAL_COUNT];
        for material in MaterialClass::ALL {
            out[material.index()] = rows[material.index()]
                .ok_or_else(|| CalcError::table_error(self.name, format!("missing row for {material}")))?;
        }

        debug!(table = self.name, "loaded {} material rows", MATERIAL_COUNT);
        Ok(out)
    }
}

/// Position of the first header matching any of `names`, ignoring case and
/// any trailing unit in parentheses.
fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let base = h.split('(').next().unwrap_or(h).trim();
        names.iter().any(|n| base.eq_ignore_ascii_case(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_alpha_columns() {
        let tables = StorativityTables::builtin().unwrap();
        assert_eq!(tables.alpha.column(AlphaLevel::Min).values(), &[1e-8, 1e-9, 1e-10, 1e-10, 1e-11]);
        assert_eq!(tables.alpha.column(AlphaLevel::Avg).values(), &[1e-7, 1e-8, 1e-9, 1e-8, 1e-10]);
        assert_eq!(tables.alpha.column(AlphaLevel::Max).values(), &[1e-6, 1e-7, 1e-8, 1e-8, 1e-9]);
    }

    #[test]
    fn test_builtin_porosity_columns() {
        let tables = StorativityTables::builtin().unwrap();
        assert_eq!(tables.porosity.column(PorosityLevel::Min).values(), &[0.45, 0.26, 0.25, 0.05, 0.0001]);
        assert_eq!(tables.porosity.column(PorosityLevel::Mid).values(), &[0.5, 0.38, 0.3, 0.175, 0.015]);
        assert_eq!(tables.porosity.column(PorosityLevel::Max).values(), &[0.55, 0.5, 0.35, 0.3, 0.03]);
    }

    #[test]
    fn test_rows_in_any_order_with_units_in_headers() {
        let csv = "Material,Max (m²/N),Min (m²/N),Avg (m²/N)\n\
                   sound_rock,1e-9,1e-11,1e-10\n\
                   Clay,1e-6,1e-8,1e-7\n\
                   Sand,1e-7,1e-9,1e-8\n\
                   Jointed Rock,1e-8,1e-10,1e-8\n\
                   Gravel,1e-8,1e-10,1e-9\n";
        let table = AlphaTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table, StorativityTables::builtin().unwrap().alpha);
    }

    #[test]
    fn test_missing_material_row() {
        let csv = "Material,min,mid,max\nClay,0.45,0.5,0.55\nSand,0.26,0.38,0.5\n";
        let err = PorosityTable::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.error_code(), "TABLE_ERROR");
        assert!(err.to_string().contains("missing row for Gravel"));
    }

    #[test]
    fn test_duplicate_material_row() {
        let csv = "Material,min,mid,max\nClay,0.45,0.5,0.55\nclay,0.45,0.5,0.55\n";
        let err = PorosityTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate row for Clay"));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Material,min,max\nClay,0.45,0.55\n";
        let err = PorosityTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing column 'mid'"));
    }

    #[test]
    fn test_rejects_non_physical_values() {
        let csv = "Material,min,mid,max\nClay,0.45,0.5,1.5\n";
        assert!(PorosityTable::from_reader(csv.as_bytes()).is_err());

        let csv = "Material,min,avg,max\nClay,-1e-8,1e-7,1e-6\n";
        assert!(AlphaTable::from_reader(csv.as_bytes()).is_err());

        let csv = "Material,min,avg,max\nClay,abc,1e-7,1e-6\n";
        let err = AlphaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid number 'abc' at line 2"));
    }

    #[test]
    fn test_rejects_decreasing_columns() {
        let csv = "Material,min,avg,max\nClay,1e-6,1e-7,1e-8\n";
        let err = AlphaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-decreasing"));
    }

    #[test]
    fn test_unknown_material() {
        let csv = "Material,min,avg,max\nBasalt,1e-8,1e-7,1e-6\n";
        let err = AlphaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_display_rows() {
        let tables = StorativityTables::builtin().unwrap();
        let alpha = tables.alpha.display();
        assert_eq!(alpha.headers.len(), 4);
        assert_eq!(alpha.rows.len(), 5);
        assert_eq!(alpha.rows[0], vec!["Clay", "1.0E-8", "1.0E-7", "1.0E-6"]);

        let porosity = tables.porosity.display();
        assert_eq!(porosity.rows[4], vec!["Sound Rock", "0.0001", "0.015", "0.03"]);
        assert_eq!(porosity.column_widths()[0], "Jointed Rock".len());
    }
}
