//! Standard S&P 500 sector membership table.
//!
//! Symbols are listed in internal notation; class shares use a `/` separator
//! and are translated to data-feed notation through [`SYMBOL_ADJUSTMENTS`].

/// Information technology.
pub const TECHNOLOGY: &str = "Technology";
/// Health care.
pub const HEALTH_CARE: &str = "Health Care";
/// Banks, insurers, asset managers and payment networks.
pub const FINANCIALS: &str = "Financials";
/// Consumer discretionary.
pub const CONSUMER_DISCRETIONARY: &str = "Consumer Discretionary";
/// Communication services.
pub const COMMUNICATIONS: &str = "Communications";
/// Consumer staples.
pub const CONSUMER_STAPLES: &str = "Consumer Staples";
/// Industrials.
pub const INDUSTRIALS: &str = "Industrials";
/// Energy.
pub const ENERGY: &str = "Energy";
/// Materials.
pub const MATERIALS: &str = "Materials";
/// Real estate investment trusts and services.
pub const REAL_ESTATE: &str = "Real Estate";
/// Utilities.
pub const UTILITIES: &str = "Utilities";

/// Internal notation to data-feed notation.
pub const SYMBOL_ADJUSTMENTS: &[(&str, &str)] = &[("BRK/B", "BRK-B"), ("BF/B", "BF-B")];

/// Sector name and members, in registry order.
pub const STANDARD_SECTORS: &[(&str, &[&str])] = &[
    (
        TECHNOLOGY,
        &[
            "NVDA", "MSFT", "AAPL", "AVGO", "ORCL", "PLTR", "CSCO", "IBM", "CRM", "AMD", "INTU",
            "NOW", "TXN", "RTX", "ACN", "QCOM", "ADBE", "AMAT", "MU", "PANW", "LRCX", "CRWD",
            "KLAC", "ADI", "ANET", "INTC", "CDNS", "SNPS", "MSI", "FTNT", "ADSK", "ROP", "NXPI",
            "WDAY", "GLW", "MCHP", "CTSH", "DELL", "MPWR", "GRMN", "ANSS", "IT", "STX", "HPE",
            "TYL", "SMCI", "TDY", "ON", "JBL", "CDW", "NTAP", "PTC", "LDOS", "FFIV", "ZBRA",
            "GEN", "TER", "AKAM", "PAYC", "EPAM", "DAY",
        ],
    ),
    (
        HEALTH_CARE,
        &[
            "LLY", "JNJ", "ABBV", "UNH", "ABT", "ISRG", "MRK", "TMO", "AMGN", "BSX", "PFE",
            "GILD", "SYK", "DHR", "VRTX", "MDT", "BMY", "MCK", "CVS", "CI", "ELV", "ZTS", "HCA",
            "REGN", "COR", "BDX", "EW", "IDXX", "RMD", "A", "GEHC", "DXCM", "IQV", "MTD", "STE",
            "LH", "WAT", "DGX", "PODD", "ZBH", "CNC", "WST", "BAX", "COO", "HOLX", "ALGN", "MOH",
            "RVTY", "INCY", "UHS", "MRNA", "VTRS", "SOLV", "HSIC", "TECH", "CRL", "DVA",
        ],
    ),
    (
        FINANCIALS,
        &[
            "BRK/B", "JPM", "V", "MA", "BAC", "WFC", "GS", "AXP", "MS", "SPGI", "C", "SCHW",
            "BLK", "PGR", "COF", "BX", "MMC", "CB", "ICE", "CME", "FI", "KKR", "PNC", "AJG",
            "MCO", "AON", "COIN", "BK", "APO", "TFC", "TRV", "AMP", "AFL", "AIG", "MET", "MSCI",
            "VRSK", "FIS", "FICO", "PRU", "NDAQ", "ACGL", "MTB", "EFX", "STT", "WTW", "BRO",
            "RJF", "BR", "SYF", "HBAN", "NTRS", "CBOE", "CPAY", "CINF", "TROW", "WRB", "CFG",
            "GPN", "KEY", "FDS", "PFG", "L", "EG", "JKHY", "GL", "MKTX", "BEN", "IVZ",
        ],
    ),
    (
        CONSUMER_DISCRETIONARY,
        &[
            "AMZN", "TSLA", "HD", "MCD", "BKNG", "TJX", "LOW", "SBUX", "RCL", "ORLY", "CMG",
            "HLT", "AZO", "GM", "F", "CPRT", "YUM", "DHI", "CCL", "TSCO", "LULU", "LEN", "DRI",
            "LYV", "NVR", "PHM", "ULTA", "WSM", "TPR", "LVS", "DECK", "DPZ", "APTV", "BLDR",
            "BBY", "MAS", "POOL", "TKO", "RL", "KMX", "HAS", "LKQ", "WYNN", "NCLH", "MGM", "CZR",
            "MHK",
        ],
    ),
    (
        COMMUNICATIONS,
        &[
            "META", "GOOGL", "GOOG", "NFLX", "DIS", "UBER", "T", "VZ", "CMCSA", "TMUS", "DASH",
            "ABNB", "TTWO", "CHTR", "EA", "WBD", "GDDY", "VRSN", "EXPE", "OMC", "FOXA", "NWSA",
            "MTCH", "PARA", "FOX", "NWS", "IPG",
        ],
    ),
    (
        CONSUMER_STAPLES,
        &[
            "COST", "WMT", "PM", "KO", "PEP", "MO", "MDLZ", "CL", "TGT", "KDP", "KMB", "MNST",
            "KR", "KVUE", "SYY", "GIS", "ADM", "STZ", "HSY", "DG", "CHD", "KHC", "K", "EL", "MKC",
            "TSN", "CLX", "SJM", "BG", "CAG", "WBA", "HRL", "TAP", "LW", "CPB", "BF/B",
        ],
    ),
    (
        INDUSTRIALS,
        &[
            "GE", "CAT", "RTX", "BA", "HON", "UNP", "ETN", "DE", "ADP", "APH", "LMT", "TT", "PH",
            "TDG", "MMM", "WM", "EMR", "UPS", "GD", "CTAS", "HWM", "JCI", "ITW", "NOC", "CARR",
            "CSX", "NSC", "AXON", "PWR", "PCAR", "URI", "TEL", "FAST", "RSG", "LHX", "PAYX",
            "CMI", "GWW", "AME", "OTIS", "ROK", "WAB", "IR", "ODFL", "DAL", "XYL", "DOV", "VLTO",
            "UAL", "LUV", "TRMB", "EXPD", "J", "ROL", "IEX", "ALLE", "NDSN", "JBHT", "CHRW",
            "SWK", "HII", "GNRC", "AOS", "RAL",
        ],
    ),
    (
        ENERGY,
        &[
            "XOM", "CVX", "COP", "EOG", "MPC", "KMI", "PSX", "SLB", "VLO", "HES", "BKR", "TRGP",
            "EQT", "OXY", "FANG", "DVN", "EXE", "TPL", "CTRA", "HAL", "FSLR", "APA", "ENPH",
        ],
    ),
    (
        MATERIALS,
        &[
            "LIN", "APD", "SHW", "ECL", "FCX", "NEM", "CTVA", "VMC", "MLM", "NUE", "DD", "IP",
            "PPG", "SW", "AMCR", "DOW", "IFF", "STLD", "PKG", "LYB", "BALL", "CF", "AVY", "MOS",
            "EMN", "ALB",
        ],
    ),
    (
        REAL_ESTATE,
        &[
            "AMT", "PLD", "WELL", "DLR", "O", "SPG", "PSA", "CCI", "CBRE", "EQIX", "VICI", "CSGP",
            "EXR", "AVB", "VTR", "SBAC", "EQR", "WY", "INVH", "MAA", "REG", "HST", "BXP", "FRT",
            "IRM", "ESS", "KIM", "DOC", "UDR", "CPT", "ARE",
        ],
    ),
    (
        UTILITIES,
        &[
            "NEE", "SO", "DUK", "CEG", "AEP", "SRE", "D", "EXC", "PEG", "XEL", "ETR", "WEC", "ED",
            "PCG", "NRG", "AWK", "DTE", "AEE", "PPL", "ATO", "ES", "CNP", "CMS", "FE", "EIX", "NI",
            "LNT", "EVRG", "PNW", "AES",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_sectors() {
        assert_eq!(STANDARD_SECTORS.len(), 11);
    }

    #[test]
    fn test_sector_sizes() {
        let size = |name: &str| {
            STANDARD_SECTORS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, members)| members.len())
                .unwrap()
        };
        assert_eq!(size(TECHNOLOGY), 61);
        assert_eq!(size(UTILITIES), 30);
        assert_eq!(size(REAL_ESTATE), 31);
    }

    #[test]
    fn test_adjusted_symbols_are_listed_in_internal_notation() {
        let all: Vec<&str> = STANDARD_SECTORS
            .iter()
            .flat_map(|(_, members)| members.iter().copied())
            .collect();
        for (internal, _) in SYMBOL_ADJUSTMENTS {
            assert!(all.contains(internal));
        }
    }
}
