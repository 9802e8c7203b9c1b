//! Precomputed catalog of composed functions.
//!
//! A catalog is a directory with one file per composition structure, named
//! by the sorted group sizes joined with `-` (e.g. `2-3.json`). Each file is
//! a JSON array of the integer values of the structure's distinct functions
//! (see [`TruthTable`] for the encoding).
//!
//! # File Format
//!
//! ```text
//! [0, 1, 3, 6, 7, 8, 9, 12, 14, 15]
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use num_bigint::BigUint;

use crate::error::CatalogError;
use crate::structure::CompositionStructure;
use crate::truth_table::TruthTable;

/// A catalog directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the entry for `structure`.
    pub fn path_for(&self, structure: &CompositionStructure) -> PathBuf {
        self.dir.join(format!("{}.json", structure.sorted()))
    }

    /// Whether the catalog has an entry for `structure`.
    pub fn contains(&self, structure: &CompositionStructure) -> bool {
        self.path_for(structure).is_file()
    }

    /// Reads the distinct functions of `structure`.
    ///
    /// Returns [`CatalogError::NotFound`] if there is no entry.
    pub fn read(&self, structure: &CompositionStructure) -> Result<Vec<TruthTable>, CatalogError> {
        let path = self.path_for(structure);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound(path.clone()),
            _ => CatalogError::Io(e),
        })?;

        let k = structure.num_inputs();
        let values: Vec<u64> = serde_json::from_str(&content)?;
        let functions = values
            .into_iter()
            .map(|value| {
                TruthTable::new(k, BigUint::from(value))
                    .map_err(|e| CatalogError::Parse(format!("{}: {}", path.display(), e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("read {} functions from {}", functions.len(), path.display());
        Ok(functions)
    }

    /// Writes the entry for `structure`, creating the directory if needed.
    ///
    /// Values are stored in ascending order. Every function must have the
    /// structure's number of inputs.
    pub fn write<'a>(
        &self,
        structure: &CompositionStructure,
        functions: impl IntoIterator<Item = &'a TruthTable>,
    ) -> Result<PathBuf, CatalogError> {
        let k = structure.num_inputs();
        let mut values = functions
            .into_iter()
            .map(|f| {
                if f.num_inputs() != k {
                    return Err(CatalogError::Parse(format!(
                        "{}-input function {} in a catalog entry for {} inputs",
                        f.num_inputs(),
                        f,
                        k
                    )));
                }
                f.to_u64()
                    .ok_or_else(|| CatalogError::Parse(format!("function {} does not fit in 64 bits", f)))
            })
            .collect::<Result<Vec<u64>, _>>()?;
        values.sort_unstable();
        values.dedup();

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(structure);
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer(&mut writer, &values)?;
        writer.flush()?;

        debug!("wrote {} functions to {}", values.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn structure(sizes: &[usize]) -> CompositionStructure {
        CompositionStructure::try_from(sizes).unwrap()
    }

    #[test]
    fn test_path_uses_sorted_structure() {
        let catalog = Catalog::new("catalog");
        assert_eq!(catalog.path_for(&structure(&[3, 2])), Path::new("catalog").join("2-3.json"));
    }

    #[test]
    fn test_missing_entry_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(dir.path());
        assert!(!catalog.contains(&structure(&[1, 2])));
        match catalog.read(&structure(&[1, 2])) {
            Err(CatalogError::NotFound(path)) => assert_eq!(path, dir.path().join("1-2.json")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_decodes_zero_padded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1-1.json"), "[0, 1, 6, 15]").unwrap();
        let catalog = Catalog::new(dir.path());
        let functions = catalog.read(&structure(&[1, 1])).unwrap();
        let rendered: Vec<String> = functions.iter().map(|f| f.to_string()).collect();
        assert_eq!(rendered, vec!["0000", "0001", "0110", "1111"]);
    }

    #[test]
    fn test_read_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1-1.json"), "[16]").unwrap();
        let catalog = Catalog::new(dir.path());
        assert!(matches!(catalog.read(&structure(&[1, 1])), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_read_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2.json"), "[1, 2").unwrap();
        let catalog = Catalog::new(dir.path());
        assert!(matches!(catalog.read(&structure(&[2])), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(dir.path().join("nested"));
        let functions: Vec<TruthTable> = ["0110", "0001", "0110"].iter().map(|s| s.parse().unwrap()).collect();

        let path = catalog.write(&structure(&[1, 1]), &functions).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1,6]");
        assert!(catalog.contains(&structure(&[1, 1])));

        let read = catalog.read(&structure(&[1, 1])).unwrap();
        assert_eq!(read, vec![functions[1].clone(), functions[0].clone()]);
    }

    #[test]
    fn test_write_rejects_wrong_arity() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(dir.path());
        let f: TruthTable = "01".parse().unwrap();
        assert!(matches!(catalog.write(&structure(&[1, 1]), [&f]), Err(CatalogError::Parse(_))));
    }
}
