//! # File I/O Module
//!
//! Reads the two lookup tables from disk at startup. Nothing is ever written
//! back; the loaded [`StorativityTables`] stays immutable for the life of the
//! process.
//!
//! ## Directory Layout
//!
//! ```text
//! <dir>/alpha.csv      Material,min,avg,max
//! <dir>/porosity.csv   Material,min,mid,max
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use storativity_core::file_io::load_tables;
//! use std::path::Path;
//!
//! let tables = load_tables(Path::new("data")).unwrap();
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{AlphaTable, PorosityTable, StorativityTables};

/// File name of the alpha table inside a tables directory
pub const ALPHA_FILE: &str = "alpha.csv";

/// File name of the porosity table inside a tables directory
pub const POROSITY_FILE: &str = "porosity.csv";

/// Load both tables from `dir`.
///
/// # Returns
///
/// * `Ok(StorativityTables)` - Both tables parsed and validated
/// * `Err(CalcError::FileError)` - A file is missing or unreadable
/// * `Err(CalcError::TableError)` - A file is malformed or incomplete
pub fn load_tables(dir: &Path) -> CalcResult<StorativityTables> {
    let (alpha_path, porosity_path) = table_paths(dir);

    let alpha = AlphaTable::from_reader(open(&alpha_path)?)?;
    let porosity = PorosityTable::from_reader(open(&porosity_path)?)?;

    debug!(dir = %dir.display(), "loaded lookup tables");
    Ok(StorativityTables::new(alpha, porosity))
}

/// Paths `load_tables` would read for `dir`
pub fn table_paths(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join(ALPHA_FILE), dir.join(POROSITY_FILE))
}

fn open(path: &Path) -> CalcResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("storativity_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_shipped_data_directory() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let tables = load_tables(&dir).unwrap();
        assert_eq!(tables, StorativityTables::builtin().unwrap());
    }

    #[test]
    fn test_missing_file() {
        let dir = temp_dir("missing");
        let err = load_tables(&dir).unwrap_err();
        match err {
            CalcError::FileError { operation, path, .. } => {
                assert_eq!(operation, "open");
                assert!(path.ends_with(ALPHA_FILE));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_porosity_file() {
        let dir = temp_dir("malformed");
        let (alpha_path, porosity_path) = table_paths(&dir);
        fs::copy(Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(ALPHA_FILE), alpha_path).unwrap();
        fs::write(porosity_path, "Material,min,mid,max\nClay,0.45,0.5,0.55\n").unwrap();

        let err = load_tables(&dir).unwrap_err();
        assert_eq!(err.error_code(), "TABLE_ERROR");
        let _ = fs::remove_dir_all(&dir);
    }
}
