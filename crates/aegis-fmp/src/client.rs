//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{HistoricalPrice, RatiosTtm, to_price_series},
};
use aegis_traits::{
    Date, FundamentalsSnapshot, FundamentalsSource, InstrumentData, MarketDataSource, PriceSeries,
};
use reqwest::Client;
use std::env;
use tracing::{debug, warn};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // a missing .env file is fine
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!(endpoint, "FMP request");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports some failures with a 200 status
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Endpoint path for daily prices.
    fn historical_endpoint(symbol: &str, from: Option<Date>, to: Option<Date>) -> String {
        let mut endpoint = format!("historical-price-eod/full?symbol={}", symbol.to_uppercase());
        if let Some(from) = from {
            endpoint.push_str(&format!("&from={}", from.format("%Y-%m-%d")));
        }
        if let Some(to) = to {
            endpoint.push_str(&format!("&to={}", to.format("%Y-%m-%d")));
        }
        endpoint
    }

    /// Get historical daily prices for a symbol, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<HistoricalPrice>> {
        // the stable API returns a flat array, not a wrapped response
        self.get(&Self::historical_endpoint(symbol, from, to)).await
    }

    /// Get daily closes for a symbol as a chronological series.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::NoData`] if the response holds no usable prices.
    pub async fn price_series(
        &self,
        symbol: &str,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<PriceSeries> {
        let rows = self.historical_prices(symbol, from, to).await?;
        let series = to_price_series(symbol, &rows);
        if series.is_empty() {
            return Err(FmpError::NoData(symbol.to_string()));
        }
        Ok(series)
    }

    /// Get trailing-twelve-month valuation ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::SymbolNotFound`] if the response is empty.
    pub async fn ratios_ttm(&self, symbol: &str) -> Result<RatiosTtm> {
        let endpoint = format!("ratios-ttm?symbol={}", symbol.to_uppercase());
        let ratios: Vec<RatiosTtm> = self.get(&endpoint).await?;
        ratios
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Fetch prices and ratios for one instrument concurrently.
    ///
    /// Missing ratios are not fatal: the instrument is returned with an empty
    /// fundamentals snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the price history cannot be fetched.
    pub async fn instrument_data(
        &self,
        symbol: &str,
        from: Date,
        to: Date,
    ) -> Result<InstrumentData> {
        let (prices, ratios) = tokio::join!(
            self.price_series(symbol, Some(from), Some(to)),
            self.ratios_ttm(symbol),
        );

        let fundamentals = match ratios {
            Ok(ratios) => ratios.to_snapshot(),
            Err(e) => {
                warn!(symbol, error = %e, "no valuation ratios");
                FundamentalsSnapshot::default()
            }
        };
        Ok(InstrumentData::new(prices?, fundamentals))
    }
}

impl MarketDataSource for FmpClient {
    async fn price_history(
        &self,
        symbol: &str,
        from: Date,
        to: Date,
    ) -> aegis_traits::Result<PriceSeries> {
        Ok(self.price_series(symbol, Some(from), Some(to)).await?)
    }
}

impl FundamentalsSource for FmpClient {
    async fn fundamentals(&self, symbol: &str) -> aegis_traits::Result<FundamentalsSnapshot> {
        Ok(self.ratios_ttm(symbol).await?.to_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("ratios-ttm?symbol=KO"),
            "https://financialmodelingprep.com/stable/ratios-ttm?symbol=KO&apikey=test_key"
        );
        assert_eq!(
            client.url("profile"),
            "https://financialmodelingprep.com/stable/profile?apikey=test_key"
        );
    }

    #[test]
    fn test_historical_endpoint() {
        let from = Date::from_ymd_opt(2022, 1, 3);
        let to = Date::from_ymd_opt(2025, 1, 3);
        assert_eq!(
            FmpClient::historical_endpoint("brk-b", from, to),
            "historical-price-eod/full?symbol=BRK-B&from=2022-01-03&to=2025-01-03"
        );
        assert_eq!(
            FmpClient::historical_endpoint("KO", None, None),
            "historical-price-eod/full?symbol=KO"
        );
    }
}
