//! Non-equivalent input permutations of a composition structure.
//!
//! Relabeling the inputs of a composed function `f(g₁(..), ..., gₙ(..))`
//! moves inputs between groups. Two relabelings produce the same set of
//! composed functions when they induce the same *partition* of the inputs
//! into groups, up to
//!
//! - reordering inputs within a group (absorbed by the sub-function), and
//! - swapping groups of equal size (absorbed by the combining function).
//!
//! So every equivalence class is identified by an unordered collection of
//! unordered groups, and one representative [`InputPartition`] per class is
//! enough to cover all relabelings.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::structure::CompositionStructure;
use crate::types::{inputs, Input};
use crate::utils::{factorial, Permutations};

/// Order-independent identity of a partition.
pub type PartitionKey = BTreeSet<BTreeSet<Input>>;

/// A partition of the inputs into groups, in canonical order.
///
/// Inputs are sorted within each group; groups are ordered by size, then
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputPartition {
    groups: Vec<Vec<Input>>,
}

impl InputPartition {
    /// Canonical partition with the given groups.
    pub fn new(groups: Vec<Vec<Input>>) -> Self {
        let key: PartitionKey = groups.into_iter().map(|g| g.into_iter().collect()).collect();
        Self::from_key(&key)
    }

    fn from_key(key: &PartitionKey) -> Self {
        let mut groups: Vec<Vec<Input>> = key.iter().map(|g| g.iter().copied().collect()).collect();
        groups.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<Input>] {
        &self.groups
    }

    pub fn key(&self) -> PartitionKey {
        self.groups.iter().map(|g| g.iter().copied().collect()).collect()
    }

    /// Inputs in group order: the i-th original input is relabeled to the i-th entry.
    pub fn flatten(&self) -> Vec<Input> {
        self.groups.iter().flatten().copied().collect()
    }

    /// Whether this partition relabels nothing.
    pub fn is_identity(&self) -> bool {
        self.flatten().iter().enumerate().all(|(i, input)| input.position() == i)
    }

    /// Equivalent under within-group reordering and equal-size group swaps.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for InputPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            for input in group {
                write!(f, "{}", input)?;
            }
        }
        Ok(())
    }
}

/// One representative per class of equivalent input partitions, sorted.
///
/// Works on the sorted structure, since representatives list their groups by
/// size: for `[3, 2]` the result is the same as for `[2, 3]`, and flattening
/// a representative gives an ordering to be split under `[2, 3]`.
///
/// Enumerates all k! orderings of the inputs, so it is only meant for small k.
///
/// ```
/// use bf_compose::perms::noneq_input_perms;
/// use bf_compose::structure::CompositionStructure;
///
/// let structure = CompositionStructure::new(vec![2, 2]).unwrap();
/// let perms: Vec<String> = noneq_input_perms(&structure).iter().map(|p| p.to_string()).collect();
/// assert_eq!(perms, ["ab|cd", "ac|bd", "ad|bc"]);
/// ```
pub fn noneq_input_perms(structure: &CompositionStructure) -> Vec<InputPartition> {
    let structure = &structure.sorted();
    let k = structure.num_inputs();
    let ranges = structure.group_ranges();

    let mut seen: HashSet<PartitionKey> = HashSet::new();
    let mut total = 0usize;
    for perm in Permutations::new(inputs(k)) {
        let key: PartitionKey = ranges.iter().map(|r| perm[r.clone()].iter().copied().collect()).collect();
        seen.insert(key);
        total += 1;
    }

    let mut partitions: Vec<InputPartition> = seen.iter().map(InputPartition::from_key).collect();
    partitions.sort();

    debug!(
        "noneq_input_perms({}): {} orderings -> {} classes",
        structure,
        total,
        partitions.len()
    );
    partitions
}

/// Number of classes [`noneq_input_perms`] finds, in closed form.
///
/// k! / (∏ sᵢ! · ∏ mⱼ!), where sᵢ are the group sizes and mⱼ the number of
/// groups sharing each distinct size.
pub fn num_noneq_perms(structure: &CompositionStructure) -> BigUint {
    let mut multiplicity: BTreeMap<usize, usize> = BTreeMap::new();
    for &size in structure.sizes() {
        *multiplicity.entry(size).or_default() += 1;
    }
    let within: BigUint = structure.sizes().iter().map(|&s| factorial(s)).product();
    let swaps: BigUint = multiplicity.values().map(|&m| factorial(m)).product();
    factorial(structure.num_inputs()) / (within * swaps)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn structure(sizes: &[usize]) -> CompositionStructure {
        CompositionStructure::try_from(sizes).unwrap()
    }

    fn labels(s: &str) -> Vec<Input> {
        s.chars().map(|c| Input::from_letter(c).unwrap()).collect()
    }

    #[test]
    fn test_two_three() {
        let perms = noneq_input_perms(&structure(&[2, 3]));
        assert_eq!(perms.len(), 10);
        assert_eq!(BigUint::from(perms.len()), num_noneq_perms(&structure(&[2, 3])));
        assert_eq!(perms[0].to_string(), "ab|cde");
        assert!(perms[0].is_identity());
        assert_eq!(perms[9].to_string(), "de|abc");

        let keys: HashSet<PartitionKey> = perms.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), perms.len());
        assert!(perms.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_equal_groups_collapse() {
        let perms = noneq_input_perms(&structure(&[2, 2]));
        let rendered: Vec<String> = perms.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["ab|cd", "ac|bd", "ad|bc"]);

        assert_eq!(noneq_input_perms(&structure(&[1, 1, 1])).len(), 1);
        assert_eq!(noneq_input_perms(&structure(&[3])).len(), 1);
    }

    #[test]
    fn test_closed_form_matches_enumeration() {
        for k in 1..=5 {
            for s in CompositionStructure::all(k) {
                let perms = noneq_input_perms(&s);
                assert_eq!(BigUint::from(perms.len()), num_noneq_perms(&s), "structure {}", s);
            }
        }
        assert_eq!(num_noneq_perms(&structure(&[1, 2, 2])), BigUint::from(15u32));
    }

    #[test]
    fn test_every_ordering_has_one_representative() {
        for sizes in [&[1, 2][..], &[2, 2], &[1, 1, 2], &[1, 3]] {
            let s = structure(sizes);
            let perms = noneq_input_perms(&s);
            for ordering in Permutations::new(inputs(s.num_inputs())) {
                let groups: Vec<Vec<Input>> = s.split(&ordering).into_iter().map(|g| g.to_vec()).collect();
                let partition = InputPartition::new(groups);
                let matches = perms.iter().filter(|p| p.is_equivalent(&partition)).count();
                assert_eq!(matches, 1, "ordering {:?} of {}", ordering, s);
            }
        }
    }

    #[test]
    fn test_unsorted_structure_is_sorted_first() {
        let unsorted = structure(&[3, 2]);
        let perms = noneq_input_perms(&unsorted);
        assert_eq!(perms, noneq_input_perms(&structure(&[2, 3])));
        assert!(perms.iter().all(|p| p.groups()[0].len() == 2));
        assert_eq!(perms[0].to_string(), "ab|cde");
        assert!(perms[0].is_identity());
        assert_eq!(perms.iter().filter(|p| p.is_identity()).count(), 1);

        // Flattened representatives split back into themselves under the sorted structure
        let sorted = unsorted.sorted();
        for p in &perms {
            let flat = p.flatten();
            let groups: Vec<Vec<Input>> = sorted.split(&flat).into_iter().map(|g| g.to_vec()).collect();
            assert_eq!(groups, p.groups(), "partition {}", p);
        }
    }

    #[test]
    fn test_canonical_form() {
        let p = InputPartition::new(vec![labels("edc"), labels("ba")]);
        assert_eq!(p.groups(), &[labels("ab"), labels("cde")]);
        assert_eq!(p.flatten(), labels("abcde"));
        assert!(p.is_identity());

        let q = InputPartition::new(vec![labels("cd"), labels("ba")]);
        assert_eq!(q.to_string(), "ab|cd");
        assert!(q.is_equivalent(&InputPartition::new(vec![labels("ab"), labels("dc")])));
    }
}
