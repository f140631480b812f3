//! Rule listing command implementation.

use std::io::{self, Write};

use aegis_rules::RuleCategory;
use aegis_rules::registry::rules_by_category;
use anyhow::Result;

use crate::output;

/// List the six defensive rules grouped by category.
pub(crate) fn list_rules(verbose: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    output::banner(&mut out, "Defensive Rules")?;

    let categories = [
        (RuleCategory::Market, "Market"),
        (RuleCategory::Risk, "Risk"),
        (RuleCategory::Trend, "Trend"),
        (RuleCategory::Valuation, "Valuation"),
    ];

    for (category, name) in categories {
        writeln!(out, "{name}: {}", category.description())?;
        writeln!(out, "{}", "-".repeat(60))?;
        for info in rules_by_category(&category) {
            if verbose {
                writeln!(out, "  {:<12} {}", info.name, info.title)?;
                writeln!(out, "               {}", info.description)?;
                writeln!(out, "               target: {}", info.target)?;
                if info.requires_fundamentals {
                    writeln!(out, "               needs fundamentals")?;
                }
            } else {
                writeln!(out, "  {:<12} {} ({})", info.name, info.title, info.target)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "Each rule scores 0 to 10; the composite is their unweighted mean.")?;
    if !verbose {
        writeln!(out, "Use --verbose for detailed rule descriptions.")?;
    }
    writeln!(out)?;
    Ok(())
}
