//! # bf-compose: Boolean functions under composition
//!
//! **`bf-compose`** enumerates the Boolean functions that can be built by
//! composing smaller Boolean functions according to a fixed
//! *composition structure*.
//!
//! ## What is a composition structure?
//!
//! A structure such as `[2, 3]` splits k = 5 inputs into groups of 2 and 3.
//! Each group feeds its own sub-function, and the sub-function outputs feed a
//! combining function:
//!
//! ```text
//! f(g₁(a, b), g₂(c, d, e))
//! ```
//!
//! Only some of the 2^(2^k) truth tables on k inputs have this shape, for
//! some choice of `f`, the `gᵢ`, and some ordering of the inputs. This crate
//! computes exactly which ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use bf_compose::compose::{all_composed_bf, rep_composed_bf};
//! use bf_compose::structure::CompositionStructure;
//!
//! let structure: CompositionStructure = "2-2".parse().unwrap();
//!
//! // Functions reachable with the canonical input order a, b | c, d
//! let rep = rep_composed_bf(&structure);
//!
//! // ... and under every relabeling of the inputs
//! let all = all_composed_bf(&structure).unwrap();
//! assert!(rep.is_subset(&all));
//! ```
//!
//! ## Core Components
//!
//! - **[`generate`]**: all (or half of all) k-input truth tables.
//! - **[`perms`]**: input partitions that are not equivalent under the symmetry of a structure.
//! - **[`dnf`]**: full DNF of a truth table, relabeling, and conversion back.
//! - **[`compose`]**: the representative and full enumerations, and the [`Composer`][crate::compose::Composer] entry point.
//! - **[`catalog`]**: precomputed results stored on disk.
//!
//! Enumeration cost grows like k! times a doubly exponential number of
//! candidates, so structures beyond 5 inputs are out of reach.

pub mod catalog;
pub mod compose;
pub mod dnf;
pub mod error;
pub mod generate;
pub mod perms;
pub mod structure;
pub mod truth_table;
pub mod types;
pub mod utils;
