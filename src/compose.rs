//! Enumeration of composed Boolean functions.
//!
//! Given a [`CompositionStructure`] `[s₁, ..., sₙ]`, the functions of the form
//! `f(g₁(..), ..., gₙ(..))` are enumerated in two stages:
//!
//! 1. [`rep_composed_bf`] fixes the canonical input order (`a, b, ...` split
//!    into consecutive groups) and combines every choice of sub-functions
//!    `gᵢ` with every combining function `f`.
//! 2. [`all_composed_bf`] relabels the representative functions under every
//!    non-equivalent input partition (see [`perms`][crate::perms]) and
//!    collects the union.
//!
//! Sub-functions are drawn from [`half_bf`] only: replacing `gᵢ` by its
//! complement is the same as flipping the corresponding input of `f`, and
//! `f` already ranges over [`all_bf`]. The combining function itself is not
//! halved, since complementing it yields a different composed function.
//!
//! [`Composer`] wraps these with an input ceiling and an optional
//! [`Catalog`] lookup.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use log::{debug, trace};

use crate::catalog::Catalog;
use crate::dnf::{dnf_to_truth_table, get_dnf, permuted_dnf};
use crate::error::{CatalogError, ComposeError};
use crate::generate::{all_bf, half_bf};
use crate::perms::noneq_input_perms;
use crate::structure::CompositionStructure;
use crate::truth_table::TruthTable;
use crate::utils::Product;

/// Distinct functions reachable with the canonical input order.
///
/// For every assignment of the k inputs, group i reads its inputs (most
/// significant first) as an index into `gᵢ`; the n outputs, first group most
/// significant, form the index into `f`.
///
/// ```
/// use bf_compose::compose::rep_composed_bf;
/// use bf_compose::structure::CompositionStructure;
///
/// let structure = CompositionStructure::new(vec![1, 1]).unwrap();
/// assert_eq!(rep_composed_bf(&structure).len(), 16);
/// ```
pub fn rep_composed_bf(structure: &CompositionStructure) -> BTreeSet<TruthTable> {
    let k = structure.num_inputs();
    let n = structure.num_groups();
    let ranges = structure.group_ranges();

    let sub_functions: Vec<Vec<Vec<bool>>> = structure
        .sizes()
        .iter()
        .map(|&size| half_bf(size).map(|g| g.to_bools()).collect())
        .collect();
    let combiners: Vec<Vec<bool>> = all_bf(n).map(|f| f.to_bools()).collect();

    // Row of each sub-function read by each assignment.
    let sub_rows: Vec<Vec<usize>> = (0..1usize << k)
        .map(|x| {
            ranges
                .iter()
                .map(|r| (x >> (k - r.end)) & ((1usize << r.len()) - 1))
                .collect()
        })
        .collect();

    debug!(
        "rep_composed_bf({}): {:?} sub-function candidates, {} combiners",
        structure,
        sub_functions.iter().map(Vec::len).collect::<Vec<_>>(),
        combiners.len()
    );

    let mut distinct: HashSet<TruthTable> = HashSet::new();
    for choice in Product::new(sub_functions.iter().map(Vec::len).collect()) {
        let gs: Vec<&[bool]> = choice
            .iter()
            .enumerate()
            .map(|(i, &c)| sub_functions[i][c].as_slice())
            .collect();
        let combined: Vec<usize> = sub_rows
            .iter()
            .map(|rows| {
                rows.iter()
                    .zip(&gs)
                    .fold(0usize, |acc, (&row, g)| (acc << 1) | g[row] as usize)
            })
            .collect();
        trace!("choice = {:?}, combiner rows = {:?}", choice, combined);

        for f in &combiners {
            distinct.insert(TruthTable::from_fn(k, |x| f[combined[x]]));
        }
    }

    debug!("rep_composed_bf({}) -> {} functions", structure, distinct.len());
    distinct.into_iter().collect()
}

/// Distinct functions reachable under any relabeling of the inputs.
///
/// The structure is sorted first. Each representative function is taken to
/// its full DNF, relabeled by every non-identity partition from
/// [`noneq_input_perms`], and converted back.
pub fn all_composed_bf(structure: &CompositionStructure) -> Result<BTreeSet<TruthTable>, ComposeError> {
    let structure = structure.sorted();
    let k = structure.num_inputs();

    let representatives = rep_composed_bf(&structure);
    let perms: Vec<_> = noneq_input_perms(&structure)
        .into_iter()
        .filter(|p| !p.is_identity())
        .collect();
    debug!(
        "all_composed_bf({}): {} representatives x {} relabelings",
        structure,
        representatives.len(),
        perms.len()
    );

    let dnfs = representatives
        .iter()
        .map(|f| get_dnf(k, f))
        .collect::<Result<Vec<_>, _>>()?;

    let mut distinct: HashSet<TruthTable> = representatives.iter().cloned().collect();
    for perm in &perms {
        let mapping = perm.flatten();
        let before = distinct.len();
        for dnf in &dnfs {
            let permuted = permuted_dnf(k, dnf, &mapping)?;
            distinct.insert(dnf_to_truth_table(k, &permuted)?);
        }
        trace!("relabeling {} added {} functions", perm, distinct.len() - before);
    }

    debug!("all_composed_bf({}) -> {} functions", structure, distinct.len());
    Ok(distinct.into_iter().collect())
}

/// Configuration for a [`Composer`].
///
/// # Examples
///
/// ```
/// use bf_compose::compose::{Composer, ComposerConfig};
///
/// let composer = Composer::new(ComposerConfig {
///     max_inputs: 4,
///     catalog_dir: None,
/// });
/// assert_eq!(composer.config().max_inputs, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Largest supported number of inputs (default: 5)
    pub max_inputs: usize,
    /// Directory of precomputed catalog files, consulted before enumerating (default: none)
    pub catalog_dir: Option<PathBuf>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_inputs: 5,
            catalog_dir: None,
        }
    }
}

/// Entry point combining enumeration with an optional catalog lookup.
#[derive(Debug, Clone)]
pub struct Composer {
    config: ComposerConfig,
    catalog: Option<Catalog>,
}

impl Composer {
    pub fn new(config: ComposerConfig) -> Self {
        let catalog = config.catalog_dir.as_ref().map(|dir| Catalog::new(dir.clone()));
        Self { config, catalog }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    fn check(&self, structure: &CompositionStructure) -> Result<(), ComposeError> {
        let inputs = structure.num_inputs();
        if inputs > self.config.max_inputs {
            return Err(ComposeError::TooManyInputs {
                inputs,
                max: self.config.max_inputs,
            });
        }
        Ok(())
    }

    /// [`rep_composed_bf`] of the sorted structure, within the input ceiling.
    pub fn representatives(&self, structure: &CompositionStructure) -> Result<BTreeSet<TruthTable>, ComposeError> {
        self.check(structure)?;
        Ok(rep_composed_bf(&structure.sorted()))
    }

    /// All distinct functions of `structure`.
    ///
    /// Reads the catalog when one is configured and has an entry for the
    /// structure; otherwise falls back to [`all_composed_bf`]. Catalog
    /// failures other than a missing entry are returned as errors.
    pub fn distinct_logics(&self, structure: &CompositionStructure) -> Result<BTreeSet<TruthTable>, ComposeError> {
        self.check(structure)?;
        let structure = structure.sorted();

        if let Some(catalog) = &self.catalog {
            match catalog.read(&structure) {
                Ok(functions) => {
                    debug!("distinct_logics({}): {} functions from catalog", structure, functions.len());
                    return Ok(functions.into_iter().collect());
                }
                Err(CatalogError::NotFound(path)) => {
                    debug!("distinct_logics({}): no catalog entry at {}", structure, path.display());
                }
                Err(e) => return Err(e.into()),
            }
        }

        all_composed_bf(&structure)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Composer::new(ComposerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::types::Input;

    fn structure(sizes: &[usize]) -> CompositionStructure {
        CompositionStructure::try_from(sizes).unwrap()
    }

    fn rendered(set: &BTreeSet<TruthTable>) -> Vec<String> {
        set.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_two_literals() {
        let rep = rep_composed_bf(&structure(&[1, 1]));
        assert_eq!(rep.len(), 16);

        // Ten of them depend on both inputs.
        let both = rep
            .iter()
            .filter(|f| f.depends_on(Input::new(0)) && f.depends_on(Input::new(1)))
            .count();
        assert_eq!(both, 10);
    }

    #[test]
    fn test_single_group_reaches_everything() {
        // f(g(a, b)) with f in {0, x, ~x, 1} covers every 2-input function.
        let rep = rep_composed_bf(&structure(&[2]));
        assert_eq!(rep.len(), 16);
        assert_eq!(rep, all_bf(2).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_one_input_structure() {
        let rep = rep_composed_bf(&structure(&[1]));
        assert_eq!(rendered(&rep), vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_canonical_order_matters() {
        // [1, 2] is f(g1(a), g2(b, c)): a & b & c is reachable, but the
        // representative set is not closed under moving `a` into the pair.
        let rep = rep_composed_bf(&structure(&[1, 2]));
        let and3 = TruthTable::from_fn(3, |x| x == 0b111);
        assert!(rep.contains(&and3));

        // (a xor b) & c needs a and b in the same group.
        let xor_ab_and_c = TruthTable::from_fn(3, |x| ((x >> 2) ^ (x >> 1)) & 1 == 1 && x & 1 == 1);
        assert!(!rep.contains(&xor_ab_and_c));

        let all = all_composed_bf(&structure(&[1, 2])).unwrap();
        assert!(all.contains(&xor_ab_and_c));
    }

    #[test]
    fn test_all_composed_bounds() {
        let s = structure(&[2, 2]);
        let rep = rep_composed_bf(&s);
        let all = all_composed_bf(&s).unwrap();
        assert!(rep.is_subset(&all));
        assert!(all.len() > rep.len());
        assert!(all.len() < 1 << 16);
        assert!(all.iter().all(|f| f.num_inputs() == 4));
    }

    #[test]
    fn test_all_composed_sorts_structure() {
        let a = all_composed_bf(&structure(&[2, 1])).unwrap();
        let b = all_composed_bf(&structure(&[1, 2])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_composer_enforces_ceiling() {
        let composer = Composer::new(ComposerConfig {
            max_inputs: 3,
            catalog_dir: None,
        });
        assert!(matches!(
            composer.distinct_logics(&structure(&[2, 2])),
            Err(ComposeError::TooManyInputs { inputs: 4, max: 3 })
        ));
        assert!(composer.representatives(&structure(&[1, 1, 1, 1])).is_err());
        assert_eq!(composer.distinct_logics(&structure(&[1, 1])).unwrap().len(), 16);
    }

    #[test]
    fn test_composer_without_catalog_computes() {
        let composer = Composer::default();
        assert!(composer.catalog().is_none());
        let s = structure(&[1, 2]);
        assert_eq!(composer.distinct_logics(&s).unwrap(), all_composed_bf(&s).unwrap());
    }
}
