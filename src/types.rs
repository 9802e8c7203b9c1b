//! Input labels and literals.
//!
//! Inputs of a k-input function are labelled with the first k lowercase
//! letters. The label position doubles as the bit position in the truth-table
//! index: input `a` is the most significant bit.
use std::fmt;
use std::ops::Neg;

/// Number of available input labels (`a` through `z`).
pub const MAX_LABELS: usize = 26;

/// An input label (0-indexed position, displayed as a letter).
///
/// # Invariants
///
/// - Position is < [`MAX_LABELS`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Input(u8);

impl Input {
    /// Creates the input at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= MAX_LABELS`.
    pub fn new(position: usize) -> Self {
        assert!(position < MAX_LABELS, "Input position must be < {}", MAX_LABELS);
        Input(position as u8)
    }

    /// Returns the input labelled by `letter`, if it is a lowercase ASCII letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_lowercase() {
            Some(Input(letter as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the 0-indexed position.
    pub fn position(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter label.
    pub fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    /// Returns the positive literal of this input.
    pub fn pos(self) -> Literal {
        Literal::positive(self)
    }

    /// Returns the negative literal of this input.
    pub fn neg(self) -> Literal {
        Literal::negative(self)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Input> for usize {
    fn from(input: Input) -> Self {
        input.position()
    }
}

/// The first `k` inputs in canonical order.
pub fn inputs(k: usize) -> Vec<Input> {
    (0..k).map(Input::new).collect()
}

/// A possibly negated input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    input: Input,
    negated: bool,
}

impl Literal {
    pub const fn positive(input: Input) -> Self {
        Self { input, negated: false }
    }

    pub const fn negative(input: Input) -> Self {
        Self { input, negated: true }
    }

    pub const fn input(self) -> Input {
        self.input
    }

    pub const fn is_negated(self) -> bool {
        self.negated
    }

    /// Same polarity, different input.
    pub const fn with_input(self, input: Input) -> Self {
        Self {
            input,
            negated: self.negated,
        }
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            input: self.input,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.negated { "~" } else { "" }, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_letters() {
        let a = Input::new(0);
        let e = Input::new(4);
        assert_eq!(a.letter(), 'a');
        assert_eq!(e.letter(), 'e');
        assert_eq!(Input::from_letter('e'), Some(e));
        assert_eq!(Input::from_letter('A'), None);
        assert!(a < e);
    }

    #[test]
    #[should_panic(expected = "Input position must be < 26")]
    fn test_input_out_of_range_panics() {
        Input::new(26);
    }

    #[test]
    fn test_literal_negation() {
        let b = Input::new(1);
        let lit = b.pos();
        assert!(!lit.is_negated());
        assert!((-lit).is_negated());
        assert_eq!(-(-lit), lit);
        assert_eq!(lit.to_string(), "b");
        assert_eq!((-lit).to_string(), "~b");
    }

    #[test]
    fn test_with_input_keeps_polarity() {
        let lit = Input::new(0).neg().with_input(Input::new(3));
        assert_eq!(lit, Input::new(3).neg());
    }

    #[test]
    fn test_canonical_inputs() {
        let labels: String = inputs(5).iter().map(|i| i.letter()).collect();
        assert_eq!(labels, "abcde");
    }
}
