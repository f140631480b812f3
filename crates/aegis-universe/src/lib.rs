//! Sector universe for the Aegis defensive scoring framework.
//!
//! This crate provides the static sector membership table and the
//! [`SectorRegistry`] used to pick which symbols to analyze, to group results
//! by sector and to choose each instrument's preferred valuation multiple.
//!
//! # Example
//!
//! ```
//! use aegis_universe::{SectorRegistry, sectors};
//!
//! let registry = SectorRegistry::standard();
//! let symbols = registry.select(&[sectors::UTILITIES, sectors::CONSUMER_STAPLES]);
//! assert!(symbols.iter().any(|s| s == "DUK"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod registry;
pub mod sectors;

// Re-export key types
pub use registry::{Sector, SectorRegistry, UNKNOWN_SECTOR};
