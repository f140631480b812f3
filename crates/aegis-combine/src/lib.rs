//! Rule combination for the aegis scoring engine.
//!
//! This crate turns the six per-rule scores of one instrument into a composite
//! score and classifies it into a [`Rating`] band.
//!
//! # Examples
//!
//! ```rust,no_run
//! use aegis_combine::{Combiner, EqualWeightCombiner, Rating};
//! use aegis_traits::{RuleKind, RuleResult};
//!
//! let combiner = EqualWeightCombiner::default();
//! let results: Vec<RuleResult> = RuleKind::ALL
//!     .iter()
//!     .map(|&kind| RuleResult::new(kind, 8, None, "example"))
//!     .collect();
//!
//! let composite = combiner.combine(&results).unwrap();
//! assert_eq!(Rating::from_composite(composite), Rating::Excellent);
//! ```

mod combiner;
mod equal_weight;
mod rating;

// Re-export main types
pub use combiner::Combiner;
pub use equal_weight::{EqualWeightCombiner, EqualWeightConfig};
pub use rating::Rating;
