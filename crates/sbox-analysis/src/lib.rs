//! Differential analysis of byte substitution tables.
//!
//! Operates on raw 256-entry tables; it has no dependency on how a table
//! was produced. The headline metric is differential uniformity, the
//! maximum number of solutions to `S(x) ⊕ S(x ⊕ α) = β` over all nonzero
//! input differences α. The genuine AES S-box scores 4, the published
//! bound for resistance to differential cryptanalysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod differential;

pub use crate::differential::{difference_distribution_table, differential_uniformity};
