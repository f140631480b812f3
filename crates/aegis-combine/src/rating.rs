//! Four-band classification of composite scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating band of a composite score, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Composite of 8 or more.
    Excellent,
    /// Composite of at least 6.
    Good,
    /// Composite of at least 4.
    Weak,
    /// Everything below 4.
    Unsuitable,
}

impl Rating {
    /// Classifies a composite score.
    #[must_use]
    pub const fn from_composite(composite: f64) -> Self {
        if composite >= 8.0 {
            Self::Excellent
        } else if composite >= 6.0 {
            Self::Good
        } else if composite >= 4.0 {
            Self::Weak
        } else {
            Self::Unsuitable
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent defensive asset",
            Self::Good => "good",
            Self::Weak => "weak",
            Self::Unsuitable => "unsuitable",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bands() {
        assert_eq!(Rating::from_composite(10.0), Rating::Excellent);
        assert_eq!(Rating::from_composite(8.0), Rating::Excellent);
        assert_eq!(Rating::from_composite(7.99), Rating::Good);
        assert_eq!(Rating::from_composite(6.0), Rating::Good);
        assert_eq!(Rating::from_composite(4.0), Rating::Weak);
        assert_eq!(Rating::from_composite(3.5), Rating::Unsuitable);
        assert_eq!(Rating::from_composite(0.0), Rating::Unsuitable);
    }

    #[test]
    fn test_rating_order_and_labels() {
        assert!(Rating::Excellent < Rating::Unsuitable);
        assert_eq!(Rating::Excellent.to_string(), "excellent defensive asset");
        assert_eq!(Rating::Weak.label(), "weak");
    }
}
