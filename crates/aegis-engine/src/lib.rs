//! Rule aggregation and batch analysis for aegis.
//!
//! This crate is the entry point of the scoring engine:
//! - [`Analyzer::analyze_instrument`] runs the six rules for one instrument
//!   and combines them into a composite score and rating
//! - [`Analyzer::analyze_batch`] scores a universe, collecting per-sector
//!   aggregates and a run summary
//! - [`results_frame`] lays batch results out as a polars table
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aegis_engine::{AnalysisConfig, Analyzer};
//! use aegis_universe::SectorRegistry;
//!
//! let registry = Arc::new(SectorRegistry::standard());
//! let analyzer = Analyzer::new(AnalysisConfig::default(), registry);
//! let report = analyzer.analyze_batch(&symbols, &datasets, &benchmark, &["Utilities"]);
//! for result in report.ranked() {
//!     println!("{} {:.1}", result.symbol(), result.composite());
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod frame;
pub mod result;

// Re-export main types
pub use analyzer::Analyzer;
pub use config::AnalysisConfig;
pub use frame::{results_frame, write_csv};
pub use result::{BatchReport, InstrumentResult, RunSummary, SectorSummary};
