//! Disjunctive normal form of truth tables.
//!
//! A [`Dnf`] is a disjunction of [`Term`]s, each a conjunction of
//! [`Literal`]s. The full DNF of a truth table has one term per satisfying
//! row, mentioning every input. Relabeling inputs symbolically on a DNF and
//! converting back is how permuted functions are produced.
//!
//! # Text Format
//!
//! ```text
//! (~a & b) | (a & ~b)
//! ```
//!
//! Parentheses are optional when parsing, and `-a` is accepted for `~a`.
//! The empty DNF (the constant zero function) is the empty string.
//!
//! # Examples
//!
//! ```
//! use bf_compose::dnf::{dnf_to_truth_table, get_dnf};
//! use bf_compose::truth_table::TruthTable;
//!
//! let xor: TruthTable = "0110".parse().unwrap();
//! let dnf = get_dnf(2, &xor).unwrap();
//! assert_eq!(dnf.to_string(), "(~a & b) | (a & ~b)");
//! assert_eq!(dnf_to_truth_table(2, &dnf).unwrap(), xor);
//! ```

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::ComposeError;
use crate::truth_table::TruthTable;
use crate::types::{Input, Literal};

/// A conjunction of literals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// The minterm of row `index`: every input, negated where its index bit is 0.
    pub fn minterm(num_inputs: usize, index: usize) -> Self {
        let literals = (0..num_inputs)
            .map(|pos| {
                let input = Input::new(pos);
                if (index >> (num_inputs - 1 - pos)) & 1 == 1 {
                    input.pos()
                } else {
                    input.neg()
                }
            })
            .collect();
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The truth-table row this term selects.
    ///
    /// Starts from the all-ones row and clears every negated input, so inputs
    /// absent from the term count as 1.
    pub fn row(&self, num_inputs: usize) -> Result<usize, ComposeError> {
        let mut row = (1usize << num_inputs) - 1;
        for lit in &self.literals {
            let pos = lit.input().position();
            if pos >= num_inputs {
                return Err(ComposeError::ParseDnf(format!(
                    "literal {} is out of range for {} inputs",
                    lit, num_inputs
                )));
            }
            if lit.is_negated() {
                row &= !(1usize << (num_inputs - 1 - pos));
            }
        }
        Ok(row)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, ")")
    }
}

impl FromStr for Term {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = match (s.strip_prefix('('), s.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => s,
            _ => return Err(ComposeError::ParseDnf(format!("unbalanced parentheses in {:?}", s))),
        };
        if s.starts_with('(') && inner.trim().is_empty() {
            return Ok(Term { literals: vec![] });
        }
        let literals = inner
            .split('&')
            .map(parse_literal)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Term { literals })
    }
}

fn parse_literal(s: &str) -> Result<Literal, ComposeError> {
    let s = s.trim();
    let (negated, name) = match s.strip_prefix('~').or_else(|| s.strip_prefix('-')) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s),
    };
    let mut chars = name.chars();
    let input = match (chars.next(), chars.next()) {
        (Some(c), None) => Input::from_letter(c),
        _ => None,
    };
    match input {
        Some(input) if negated => Ok(input.neg()),
        Some(input) => Ok(input.pos()),
        None => Err(ComposeError::ParseDnf(format!("invalid literal {:?}", s))),
    }
}

/// A disjunction of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dnf {
    terms: Vec<Term>,
}

impl Dnf {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// The empty disjunction (constant zero).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Full DNF: one minterm per satisfying row, in row order.
    pub fn from_truth_table(f: &TruthTable) -> Self {
        let k = f.num_inputs();
        Self {
            terms: f.ones().map(|index| Term::minterm(k, index)).collect(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Replace every literal on input `i` by the same-polarity literal on `mapping[i]`.
    ///
    /// All literals are substituted in one pass, so overlapping label sets
    /// (e.g. swapping `a` and `b`) cannot interfere with each other.
    pub fn relabel(&self, mapping: &[Input]) -> Result<Dnf, ComposeError> {
        let terms = self
            .terms
            .iter()
            .map(|term| {
                term.literals
                    .iter()
                    .map(|&lit| match mapping.get(lit.input().position()) {
                        Some(&target) => Ok(lit.with_input(target)),
                        None => Err(ComposeError::InvalidPermutation(format!(
                            "no target for input {}",
                            lit.input()
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Term::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dnf { terms })
    }

    /// Convert back to a truth table over `num_inputs` inputs.
    pub fn to_truth_table(&self, num_inputs: usize) -> Result<TruthTable, ComposeError> {
        let mut table = TruthTable::zero(num_inputs);
        for term in &self.terms {
            table.set(term.row(num_inputs)?, true);
        }
        Ok(table)
    }
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl FromStr for Dnf {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Dnf::empty());
        }
        let terms = s.split('|').map(str::parse).collect::<Result<Vec<Term>, _>>()?;
        Ok(Dnf { terms })
    }
}

/// Full DNF of the `k`-input function `f`.
pub fn get_dnf(k: usize, f: &TruthTable) -> Result<Dnf, ComposeError> {
    if f.num_inputs() != k {
        return Err(ComposeError::InvalidTruthTable(format!(
            "expected a {}-input function, got {} inputs",
            k,
            f.num_inputs()
        )));
    }
    Ok(Dnf::from_truth_table(f))
}

/// Relabel a `k`-input DNF: the i-th original input becomes `permuted_inputs[i]`.
///
/// `permuted_inputs` must be a permutation of the first `k` inputs.
pub fn permuted_dnf(k: usize, dnf: &Dnf, permuted_inputs: &[Input]) -> Result<Dnf, ComposeError> {
    if permuted_inputs.len() != k {
        return Err(ComposeError::InvalidPermutation(format!(
            "expected {} inputs, got {}",
            k,
            permuted_inputs.len()
        )));
    }
    let mut seen = vec![false; k];
    for &input in permuted_inputs {
        let pos = input.position();
        if pos >= k || seen[pos] {
            return Err(ComposeError::InvalidPermutation(format!(
                "{} is not a permutation of the first {} inputs",
                permuted_inputs.iter().map(|i| i.letter()).collect::<String>(),
                k
            )));
        }
        seen[pos] = true;
    }
    trace!("permuted_dnf(k = {}, terms = {}, perm = {:?})", k, dnf.len(), permuted_inputs);
    dnf.relabel(permuted_inputs)
}

/// Truth table of a `k`-input DNF (inverse of [`get_dnf`]).
pub fn dnf_to_truth_table(k: usize, dnf: &Dnf) -> Result<TruthTable, ComposeError> {
    dnf.to_truth_table(k)
}
