//! Developer seniority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Seniority of a developer, which scales the base salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Junior,
    Middle,
    Senior,
}

impl Level {
    /// All levels, most junior first.
    pub const ALL: [Level; 3] = [Level::Junior, Level::Middle, Level::Senior];

    /// Salary multiplier applied to the base salary.
    pub fn multiplier(&self) -> f64 {
        match self {
            Level::Junior => 1.0,
            Level::Middle => 1.5,
            Level::Senior => 2.0,
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "junior",
            Level::Middle => "middle",
            Level::Senior => "senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(Level::Junior),
            "middle" => Ok(Level::Middle),
            "senior" => Ok(Level::Senior),
            _ => Err(ValidationError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_levels() {
        assert_eq!(Level::Junior.multiplier(), 1.0);
        assert_eq!(Level::Middle.multiplier(), 1.5);
        assert_eq!(Level::Senior.multiplier(), 2.0);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Senior".parse::<Level>().unwrap(), Level::Senior);
        assert_eq!(" middle ".parse::<Level>().unwrap(), Level::Middle);
    }

    #[test]
    fn rejects_unknown_level() {
        match "principal".parse::<Level>() {
            Err(ValidationError::InvalidLevel { value }) => assert_eq!(value, "principal"),
            other => panic!("Expected InvalidLevel, got {:?}", other),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Middle).unwrap(), "\"middle\"");
    }

    #[test]
    fn default_is_junior() {
        assert_eq!(Level::default(), Level::Junior);
    }
}
