//! Tabular view of batch results for presentation layers.

use std::io::Write;

use aegis_traits::{Result, RuleKind};
use polars::prelude::*;

use crate::result::InstrumentResult;

/// Builds one row per instrument, sorted by composite score descending.
///
/// Columns: `symbol`, `sector`, `score`, `rating`, `beta`, `correlation`,
/// `volatility` (relative), `valuation` (description) and `valuation_score`.
/// Rules that failed leave their value null.
///
/// # Errors
///
/// Returns an error if the frame cannot be assembled or sorted.
pub fn results_frame<'a>(
    results: impl IntoIterator<Item = &'a InstrumentResult>,
) -> Result<DataFrame> {
    let results: Vec<&InstrumentResult> = results.into_iter().collect();
    let value_of = |kind: RuleKind| -> Vec<Option<f64>> {
        results
            .iter()
            .map(|r| r.rule(kind).and_then(|rule| rule.value()))
            .collect()
    };

    let symbols: Vec<&str> = results.iter().map(|r| r.symbol()).collect();
    let sectors: Vec<&str> = results.iter().map(|r| r.sector()).collect();
    let scores: Vec<f64> = results.iter().map(|r| r.composite()).collect();
    let ratings: Vec<&str> = results.iter().map(|r| r.rating().label()).collect();
    let valuations: Vec<Option<&str>> = results
        .iter()
        .map(|r| r.rule(RuleKind::Valuation).map(|v| v.description()))
        .collect();
    let valuation_scores: Vec<Option<u32>> = results
        .iter()
        .map(|r| r.rule(RuleKind::Valuation).map(|v| u32::from(v.score())))
        .collect();

    let frame = df! {
        "symbol" => symbols,
        "sector" => sectors,
        "score" => scores,
        "rating" => ratings,
        "beta" => value_of(RuleKind::Beta),
        "correlation" => value_of(RuleKind::Correlation),
        "volatility" => value_of(RuleKind::Volatility),
        "valuation" => valuations,
        "valuation_score" => valuation_scores,
    }?;

    Ok(frame.sort(
        ["score"],
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_maintain_order(true),
    )?)
}

/// Writes a results frame as CSV with a header row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(frame: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(frame)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_combine::Rating;
    use aegis_traits::{RuleError, RuleResult};

    fn result(symbol: &str, scores: [u8; 6]) -> InstrumentResult {
        let rules: Vec<RuleResult> = RuleKind::ALL
            .iter()
            .zip(scores)
            .map(|(&kind, score)| RuleResult::new(kind, score, Some(f64::from(score) / 10.0), "x"))
            .collect();
        from_rules(symbol, rules)
    }

    fn from_rules(symbol: &str, rules: Vec<RuleResult>) -> InstrumentResult {
        let composite = rules.iter().map(|r| f64::from(r.score())).sum::<f64>() / 6.0;
        InstrumentResult::new(
            symbol.to_string(),
            "Utilities".to_string(),
            rules,
            composite,
            Rating::from_composite(composite),
        )
    }

    #[test]
    fn test_frame_sorted_by_score() {
        let results = vec![
            result("LOW", [2, 2, 2, 2, 2, 2]),
            result("HIGH", [10, 10, 10, 10, 10, 10]),
            result("MID", [6, 6, 6, 6, 6, 6]),
        ];
        let frame = results_frame(&results).unwrap();

        assert_eq!(frame.height(), 3);
        assert_eq!(
            frame.get_column_names_str(),
            [
                "symbol",
                "sector",
                "score",
                "rating",
                "beta",
                "correlation",
                "volatility",
                "valuation",
                "valuation_score"
            ]
        );
        let symbols: Vec<Option<&str>> = frame
            .column("symbol")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(symbols, [Some("HIGH"), Some("MID"), Some("LOW")]);
    }

    #[test]
    fn test_failed_rule_is_null() {
        let mut rules = result("ERR", [5; 6]).rules().to_vec();
        rules[0] = RuleResult::error(RuleKind::Beta, &RuleError::EmptyIntersection);
        let failed = from_rules("ERR", rules);
        let frame = results_frame([&failed]).unwrap();

        let beta = frame.column("beta").unwrap();
        assert_eq!(beta.null_count(), 1);
    }

    #[test]
    fn test_csv_has_header() {
        let results = vec![result("KO", [8, 8, 8, 8, 8, 8])];
        let mut frame = results_frame(&results).unwrap();
        let mut buffer = Vec::new();
        write_csv(&mut frame, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("symbol,sector,score,rating"));
        assert!(text.contains("KO,Utilities"));
    }
}
