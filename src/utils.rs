use num_bigint::BigUint;
use num_traits::One;

/// [Factorial][factorial] of `n` as an arbitrary-precision integer.
///
/// [factorial]: https://en.wikipedia.org/wiki/Factorial
pub fn factorial(n: usize) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
}

/// Rearranges `items` into the next [lexicographic permutation][lexperm].
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been passed.
///
/// [lexperm]: https://en.wikipedia.org/wiki/Permutation#Generation_in_lexicographic_order
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix.
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Iterator over all permutations of a sorted sequence, in lexicographic order.
///
/// ```
/// use bf_compose::utils::Permutations;
///
/// let perms: Vec<Vec<u32>> = Permutations::new(vec![1, 2, 3]).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![1, 2, 3]);
/// assert_eq!(perms[5], vec![3, 2, 1]);
/// ```
pub struct Permutations<T> {
    current: Vec<T>,
    done: bool,
}

impl<T: Ord + Clone> Permutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            current: items,
            done: false,
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(item)
    }
}

/// Odometer over the cartesian product `0..radices[0] × 0..radices[1] × ...`.
///
/// The last position varies fastest, matching the order of nested loops.
/// An empty `radices` yields a single empty tuple; any zero radix yields nothing.
pub struct Product {
    radices: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl Product {
    pub fn new(radices: Vec<usize>) -> Self {
        let done = radices.iter().any(|&r| r == 0);
        Self {
            current: vec![0; radices.len()],
            radices,
            done,
        }
    }
}

impl Iterator for Product {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();

        // Advance, carrying from the last digit.
        self.done = true;
        for pos in (0..self.radices.len()).rev() {
            self.current[pos] += 1;
            if self.current[pos] < self.radices[pos] {
                self.done = false;
                break;
            }
            self.current[pos] = 0;
        }

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(10), BigUint::from(3628800u32));
    }

    #[test]
    fn test_next_permutation() {
        let mut v = vec![1, 3, 2];
        assert!(next_permutation(&mut v));
        assert_eq!(v, vec![2, 1, 3]);

        let mut last = vec![3, 2, 1];
        assert!(!next_permutation(&mut last));
        assert_eq!(last, vec![1, 2, 3]);
    }

    #[test]
    fn test_permutations_count() {
        assert_eq!(Permutations::new(Vec::<u8>::new()).count(), 1);
        assert_eq!(Permutations::new(vec!['a']).count(), 1);
        assert_eq!(Permutations::new(vec!['a', 'b', 'c', 'd']).count(), 24);
        assert_eq!(Permutations::new(vec!['a', 'b', 'c', 'd', 'e']).count(), 120);
    }

    #[test]
    fn test_product() {
        let tuples: Vec<_> = Product::new(vec![2, 3]).collect();
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn test_product_edge_cases() {
        assert_eq!(Product::new(vec![]).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Product::new(vec![3, 0]).count(), 0);
        assert_eq!(Product::new(vec![1, 1, 1]).count(), 1);
    }
}
