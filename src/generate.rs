//! Enumeration of all k-input Boolean functions.
//!
//! There are 2^(2^k) functions of k inputs: 4 for k=1, 16 for k=2, 256 for
//! k=3, 65536 for k=4. Beyond that, exhaustive enumeration is impractical
//! (but not an error: the iterators are lazy).

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::truth_table::TruthTable;

/// Number of k-input Boolean functions, 2^(2^k).
pub fn bf_count(k: usize) -> BigUint {
    BigUint::one() << (1usize << k)
}

/// Lazy iterator over truth tables in increasing integer order.
#[derive(Debug, Clone)]
pub struct BooleanFunctions {
    num_inputs: usize,
    next: BigUint,
    end: BigUint,
}

impl BooleanFunctions {
    fn new(num_inputs: usize, end: BigUint) -> Self {
        Self {
            num_inputs,
            next: BigUint::default(),
            end,
        }
    }

    /// Number of inputs of the enumerated functions.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }
}

impl Iterator for BooleanFunctions {
    type Item = TruthTable;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let bits = self.next.clone();
        self.next += 1u32;
        TruthTable::new(self.num_inputs, bits).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = &self.end - &self.next;
        match remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// All 2^(2^k) functions of `k` inputs, in increasing integer order.
///
/// ```
/// use bf_compose::generate::all_bf;
///
/// let all: Vec<String> = all_bf(1).map(|f| f.to_string()).collect();
/// assert_eq!(all, ["00", "01", "10", "11"]);
/// ```
pub fn all_bf(k: usize) -> BooleanFunctions {
    BooleanFunctions::new(k, bf_count(k))
}

/// The first half of [`all_bf`]: every function whose row 0 is 0.
///
/// Each function's complement is in the other half, so this lists every
/// function up to complement. Used for sub-functions of a composition, where
/// complementing a sub-function is absorbed by the combining function.
///
/// ```
/// use bf_compose::generate::half_bf;
///
/// let half: Vec<String> = half_bf(2).map(|f| f.to_string()).collect();
/// assert_eq!(half, ["0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111"]);
/// ```
pub fn half_bf(k: usize) -> BooleanFunctions {
    BooleanFunctions::new(k, bf_count(k) >> 1usize)
}
