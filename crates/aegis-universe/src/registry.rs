//! Sector registry for universe selection and sector lookup.
//!
//! The registry is built once at start-up and shared read-only (typically as
//! `Arc<SectorRegistry>`). It has no mutating methods, so concurrent readers
//! need no synchronization.

use std::collections::HashMap;

use aegis_traits::{Symbol, ValuationMetric};
use serde::{Deserialize, Serialize};

use crate::sectors::{FINANCIALS, REAL_ESTATE, STANDARD_SECTORS, SYMBOL_ADJUSTMENTS};

/// Name used when a symbol belongs to no registered sector.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// One sector and its members in data-feed notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector name.
    pub name: String,
    /// Member symbols, already adjusted to data-feed notation.
    pub members: Vec<Symbol>,
}

/// Static mapping from sector to member symbols.
///
/// # Example
///
/// ```
/// use aegis_universe::SectorRegistry;
///
/// let registry = SectorRegistry::standard();
/// assert_eq!(registry.sector_of("KO"), Some("Consumer Staples"));
/// assert_eq!(registry.adjust_symbol("BRK/B"), "BRK-B");
/// ```
#[derive(Debug, Clone)]
pub struct SectorRegistry {
    sectors: Vec<Sector>,
    adjustments: HashMap<String, String>,
    // first sector (registry order) for each adjusted symbol
    index: HashMap<Symbol, usize>,
}

impl SectorRegistry {
    /// Builds a registry from a sector table and a symbol-adjustment table.
    ///
    /// Member symbols are translated through the adjustments at construction.
    pub fn new<S, M>(table: impl IntoIterator<Item = (S, M)>, adjustments: &[(&str, &str)]) -> Self
    where
        S: Into<String>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let adjustments: HashMap<String, String> = adjustments
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect();

        let sectors: Vec<Sector> = table
            .into_iter()
            .map(|(name, members)| Sector {
                name: name.into(),
                members: members
                    .into_iter()
                    .map(|s| {
                        let s = s.as_ref();
                        adjustments.get(s).cloned().unwrap_or_else(|| s.to_string())
                    })
                    .collect(),
            })
            .collect();

        let mut index = HashMap::new();
        for (i, sector) in sectors.iter().enumerate() {
            for symbol in &sector.members {
                index.entry(symbol.clone()).or_insert(i);
            }
        }

        Self {
            sectors,
            adjustments,
            index,
        }
    }

    /// The standard eleven-sector S&P 500 universe.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SECTORS
                .iter()
                .map(|(name, members)| (*name, members.iter().copied())),
            SYMBOL_ADJUSTMENTS,
        )
    }

    /// Translates internal notation to data-feed notation.
    ///
    /// Symbols without an adjustment are returned unchanged.
    pub fn adjust_symbol<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.adjustments.get(symbol).map_or(symbol, String::as_str)
    }

    /// Sector names in registry order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.name.as_str())
    }

    /// All sectors with their members.
    pub fn entries(&self) -> &[Sector] {
        &self.sectors
    }

    /// Members of `sector` in data-feed notation, or `None` for an unknown
    /// sector.
    pub fn symbols_in(&self, sector: &str) -> Option<&[Symbol]> {
        self.sectors
            .iter()
            .find(|s| s.name == sector)
            .map(|s| s.members.as_slice())
    }

    /// The first sector in registry order that lists `symbol`.
    pub fn sector_of(&self, symbol: &str) -> Option<&str> {
        self.index
            .get(symbol)
            .map(|&i| self.sectors[i].name.as_str())
    }

    /// Union of the members of the named sectors.
    ///
    /// Duplicates are removed keeping the first appearance; unknown sector
    /// names are ignored.
    pub fn select<S: AsRef<str>>(&self, sectors: &[S]) -> Vec<Symbol> {
        let mut seen = std::collections::HashSet::new();
        sectors
            .iter()
            .filter_map(|name| self.symbols_in(name.as_ref()))
            .flatten()
            .filter(|symbol| seen.insert(*symbol))
            .cloned()
            .collect()
    }

    /// Every symbol in the registry, de-duplicated.
    pub fn all_symbols(&self) -> Vec<Symbol> {
        let names: Vec<&str> = self.sectors().collect();
        self.select(&names)
    }

    /// Preferred valuation multiple by sector convention.
    ///
    /// Balance-sheet driven sectors use price-to-book; everything else,
    /// including unknown sectors, uses price-to-earnings.
    pub fn valuation_metric_for(&self, sector: Option<&str>) -> ValuationMetric {
        match sector {
            Some(FINANCIALS | REAL_ESTATE) => ValuationMetric::PriceToBook,
            _ => ValuationMetric::PriceToEarnings,
        }
    }
}

impl Default for SectorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
