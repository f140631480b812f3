//! Financial Modeling Prep (FMP) data source for Aegis.
//!
//! This crate provides a client for the daily price history and trailing
//! valuation ratios the defensive rules consume, fetched from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API. The
//! client implements [`aegis_traits::MarketDataSource`] and
//! [`aegis_traits::FundamentalsSource`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use aegis_fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Daily closes, oldest first
//!     let prices = client.price_series("KO", Some(from), Some(to)).await?;
//!
//!     // Trailing P/E, P/B, EV/EBITDA and P/S
//!     let ratios = client.ratios_ttm("KO").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
