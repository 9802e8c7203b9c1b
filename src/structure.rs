//! Composition structures.
//!
//! A composition structure `[s₁, ..., sₙ]` describes functions of the form
//! `f(g₁(x₁..), ..., gₙ(..))`: the k = Σ sᵢ inputs are split into n
//! consecutive groups, group i feeds the sᵢ-input sub-function gᵢ, and the
//! n sub-function outputs feed the combining function f.
//!
//! For example, `[2, 3]` is `f(g₁(a, b), g₂(c, d, e))`.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::ComposeError;
use crate::types::{Input, MAX_LABELS};

/// A validated composition structure: non-empty, positive group sizes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositionStructure {
    sizes: Vec<usize>,
}

impl CompositionStructure {
    /// Create a structure from group sizes.
    ///
    /// Fails on an empty list, a zero-sized group, or more inputs than there
    /// are input labels.
    pub fn new(sizes: Vec<usize>) -> Result<Self, ComposeError> {
        if sizes.is_empty() {
            return Err(ComposeError::InvalidStructure("no groups".to_string()));
        }
        if sizes.contains(&0) {
            return Err(ComposeError::InvalidStructure(format!("zero-sized group in {:?}", sizes)));
        }
        let k: usize = sizes.iter().sum();
        if k > MAX_LABELS {
            return Err(ComposeError::InvalidStructure(format!(
                "{} inputs exceed the {} available labels",
                k, MAX_LABELS
            )));
        }
        Ok(Self { sizes })
    }

    /// Group sizes, in the given order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total number of inputs, k.
    pub fn num_inputs(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Number of groups (inputs of the combining function), n.
    pub fn num_groups(&self) -> usize {
        self.sizes.len()
    }

    /// Canonical form: group sizes in ascending order.
    pub fn sorted(&self) -> Self {
        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        Self { sizes }
    }

    pub fn is_sorted(&self) -> bool {
        self.sizes.windows(2).all(|w| w[0] <= w[1])
    }

    /// Input positions covered by each group.
    pub fn group_ranges(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.sizes
            .iter()
            .map(|&size| {
                let range = start..start + size;
                start += size;
                range
            })
            .collect()
    }

    /// Split a sequence of inputs into groups.
    ///
    /// # Panics
    ///
    /// Panics if `inputs.len()` differs from [`num_inputs`](Self::num_inputs).
    pub fn split<'a>(&self, inputs: &'a [Input]) -> Vec<&'a [Input]> {
        assert_eq!(inputs.len(), self.num_inputs(), "Input count mismatch");
        self.group_ranges().into_iter().map(|r| &inputs[r]).collect()
    }

    /// All sorted composition structures of `k` inputs, in ascending
    /// lexicographic order, from `[1, 1, ..., 1]` to `[k]`.
    pub fn all(k: usize) -> Vec<CompositionStructure> {
        fn go(remaining: usize, min: usize, prefix: &mut Vec<usize>, out: &mut Vec<CompositionStructure>) {
            if remaining == 0 {
                out.push(CompositionStructure { sizes: prefix.clone() });
                return;
            }
            for size in min..=remaining {
                // The rest must still be splittable into parts >= size.
                if remaining - size != 0 && remaining - size < size {
                    continue;
                }
                prefix.push(size);
                go(remaining - size, size, prefix, out);
                prefix.pop();
            }
        }

        let mut out = Vec::new();
        if k > 0 && k <= MAX_LABELS {
            go(k, 1, &mut Vec::new(), &mut out);
        }
        out
    }

    /// Every input in its own group.
    pub fn is_fully_split(&self) -> bool {
        self.sizes.iter().all(|&s| s == 1)
    }

    /// A single group with all inputs.
    pub fn is_unsplit(&self) -> bool {
        self.sizes.len() == 1
    }
}

impl fmt::Display for CompositionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, size) in self.sizes.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", size)?;
        }
        Ok(())
    }
}

impl FromStr for CompositionStructure {
    type Err = ComposeError;

    /// Parses `2-3`, `2,3`, `2 3` or `[2, 3]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .trim()
            .trim_start_matches(|c: char| c == '[' || c == '{')
            .trim_end_matches(|c: char| c == ']' || c == '}');
        let sizes = s
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| ComposeError::InvalidStructure(format!("invalid group size {:?}", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CompositionStructure::new(sizes)
    }
}

impl TryFrom<Vec<usize>> for CompositionStructure {
    type Error = ComposeError;

    fn try_from(sizes: Vec<usize>) -> Result<Self, Self::Error> {
        CompositionStructure::new(sizes)
    }
}

impl TryFrom<&[usize]> for CompositionStructure {
    type Error = ComposeError;

    fn try_from(sizes: &[usize]) -> Result<Self, Self::Error> {
        CompositionStructure::new(sizes.to_vec())
    }
}
