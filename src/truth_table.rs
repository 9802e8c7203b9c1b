//! Truth table representation for Boolean functions.
//!
//! A Boolean function f: {0,1}ᵏ → {0,1} is represented by its truth table,
//! 2ᵏ output bits indexed by input assignments.
//!
//! # Bit Ordering
//!
//! Index i encodes an assignment with the inputs as the binary digits of i,
//! **most significant input first**: for k=2, index 1 (binary `01`) is
//! `a=0, b=1`. The textual form lists the bits by increasing index, so
//! XOR is `0110`.
//!
//! The integer value of a truth table is the base-2 value of its textual
//! form, i.e. index 0 is the *most* significant bit. This is the order in
//! which [`all_bf`][crate::generate::all_bf] enumerates functions and the
//! encoding used by the [catalog][crate::catalog].

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::dnf::Dnf;
use crate::error::ComposeError;
use crate::types::{Input, MAX_LABELS};

/// A truth table for a Boolean function on k inputs.
///
/// Ordering (`Ord`) compares the number of inputs first, then the integer value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TruthTable {
    /// Number of inputs.
    num_inputs: usize,
    /// Integer value of the table (2ᵏ bits, index 0 is the MSB).
    bits: BigUint,
}

impl TruthTable {
    /// Create a truth table from its integer value.
    ///
    /// Fails if there are more than [`MAX_LABELS`] inputs or `bits` does not fit in 2ᵏ bits.
    pub fn new(num_inputs: usize, bits: BigUint) -> Result<Self, ComposeError> {
        check_num_inputs(num_inputs)?;
        let len = 1u64 << num_inputs;
        if bits.bits() > len {
            return Err(ComposeError::InvalidTruthTable(format!(
                "value {} does not fit in {} bits",
                bits, len
            )));
        }
        Ok(TruthTable { num_inputs, bits })
    }

    /// Create a truth table from an evaluation function over indices.
    ///
    /// # Example
    ///
    /// ```
    /// use bf_compose::truth_table::TruthTable;
    ///
    /// // XOR: output 1 where the two index bits differ
    /// let f = TruthTable::from_fn(2, |i| i == 1 || i == 2);
    /// assert_eq!(f.to_string(), "0110");
    /// ```
    pub fn from_fn(num_inputs: usize, f: impl Fn(usize) -> bool) -> Self {
        assert!(num_inputs <= MAX_LABELS, "At most {} inputs are supported", MAX_LABELS);
        let len = 1usize << num_inputs;
        let mut bits = BigUint::zero();
        for index in 0..len {
            if f(index) {
                bits.set_bit((len - 1 - index) as u64, true);
            }
        }
        TruthTable { num_inputs, bits }
    }

    /// Create a truth table from its output bits in index order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not `2^num_inputs`.
    pub fn from_bools(num_inputs: usize, values: &[bool]) -> Self {
        assert_eq!(
            values.len(),
            1usize << num_inputs,
            "Expected {} bits for {} inputs, got {}",
            1usize << num_inputs,
            num_inputs,
            values.len()
        );
        TruthTable::from_fn(num_inputs, |i| values[i])
    }

    /// Parse a '0'/'1' string, checking that it describes a `num_inputs`-input function.
    pub fn parse(num_inputs: usize, s: &str) -> Result<Self, ComposeError> {
        let table: TruthTable = s.parse()?;
        if table.num_inputs != num_inputs {
            return Err(ComposeError::InvalidTruthTable(format!(
                "expected {} bits for {} inputs, got {}",
                1usize << num_inputs,
                num_inputs,
                s.len()
            )));
        }
        Ok(table)
    }

    /// Create the constant zero function.
    pub fn zero(num_inputs: usize) -> Self {
        TruthTable {
            num_inputs,
            bits: BigUint::zero(),
        }
    }

    /// Create the constant one function.
    pub fn one(num_inputs: usize) -> Self {
        TruthTable {
            num_inputs,
            bits: (BigUint::one() << (1usize << num_inputs)) - BigUint::one(),
        }
    }

    /// Get the number of inputs.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the size of the truth table (2ᵏ).
    pub fn len(&self) -> usize {
        1usize << self.num_inputs
    }

    /// A truth table always has at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the integer value.
    pub fn value(&self) -> &BigUint {
        &self.bits
    }

    /// Get the integer value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.bits.to_u64()
    }

    /// Output at the given truth-table index.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len(), "Index {} out of range for {} rows", index, self.len());
        self.bits.bit((self.len() - 1 - index) as u64)
    }

    /// Set the output at the given truth-table index.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len(), "Index {} out of range for {} rows", index, self.len());
        let pos = (self.len() - 1 - index) as u64;
        self.bits.set_bit(pos, value);
    }

    /// Outputs in index order.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    /// Indices of the rows where the function is 1.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.get(i))
    }

    /// Check if this is the constant zero function.
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Check if this is the constant one function.
    pub fn is_one(&self) -> bool {
        *self == TruthTable::one(self.num_inputs)
    }

    /// Compute the complement (negation) of this function.
    pub fn complement(&self) -> Self {
        let one = TruthTable::one(self.num_inputs);
        TruthTable {
            num_inputs: self.num_inputs,
            bits: one.bits ^ &self.bits,
        }
    }

    /// Check if the function depends on `input`.
    ///
    /// An input is essential iff flipping it changes the output for some assignment.
    pub fn depends_on(&self, input: Input) -> bool {
        let pos = input.position();
        assert!(pos < self.num_inputs, "Input {} out of range", input);
        let step = 1usize << (self.num_inputs - 1 - pos);
        (0..self.len()).any(|i| i & step == 0 && self.get(i) != self.get(i | step))
    }

    /// Find all essential inputs.
    pub fn essential_inputs(&self) -> Vec<Input> {
        (0..self.num_inputs)
            .map(Input::new)
            .filter(|&input| self.depends_on(input))
            .collect()
    }

    /// Full DNF of this function (one term per satisfying row).
    pub fn to_dnf(&self) -> Dnf {
        Dnf::from_truth_table(self)
    }
}

fn check_num_inputs(num_inputs: usize) -> Result<(), ComposeError> {
    if num_inputs > MAX_LABELS {
        return Err(ComposeError::InvalidTruthTable(format!(
            "{} inputs exceed the limit of {}",
            num_inputs, MAX_LABELS
        )));
    }
    Ok(())
}

impl FromStr for TruthTable {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(ComposeError::InvalidTruthTable(format!(
                "length {} is not a power of two",
                len
            )));
        }
        if let Some(c) = s.chars().find(|&c| c != '0' && c != '1') {
            return Err(ComposeError::InvalidTruthTable(format!("unexpected character {:?}", c)));
        }
        let num_inputs = len.trailing_zeros() as usize;
        check_num_inputs(num_inputs)?;
        let bits = BigUint::parse_bytes(s.as_bytes(), 2).unwrap_or_default();
        Ok(TruthTable { num_inputs, bits })
    }
}

impl fmt::Debug for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TruthTable({}, {})", self.num_inputs, self)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.bits.to_str_radix(2), width = self.len())
    }
}
