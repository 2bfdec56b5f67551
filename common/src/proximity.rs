//! How a resolved user coordinate affects the map and the card list.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProximityMode {
    /// The coordinate is ignored entirely.
    Ignore,
    /// Center the map on the user and annotate distances, keeping dataset order.
    #[default]
    Annotate,
    /// Annotate, and order results by ascending distance.
    Rank,
}

impl ProximityMode {
    pub fn uses_coordinate(&self) -> bool {
        !matches!(self, ProximityMode::Ignore)
    }
}

impl Display for ProximityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProximityMode::Ignore => "ignore",
            ProximityMode::Annotate => "annotate",
            ProximityMode::Rank => "rank",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ProximityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" | "off" => Ok(ProximityMode::Ignore),
            "annotate" => Ok(ProximityMode::Annotate),
            "rank" => Ok(ProximityMode::Rank),
            other => Err(format!("unknown proximity mode {other:?}, expected ignore | annotate | rank")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("RANK".parse(), Ok(ProximityMode::Rank));
        assert_eq!(" annotate ".parse(), Ok(ProximityMode::Annotate));
        assert_eq!("off".parse(), Ok(ProximityMode::Ignore));
        assert!("nearest".parse::<ProximityMode>().is_err());
    }

    #[test]
    fn only_ignore_drops_the_coordinate() {
        assert!(!ProximityMode::Ignore.uses_coordinate());
        assert!(ProximityMode::Annotate.uses_coordinate());
        assert!(ProximityMode::Rank.uses_coordinate());
    }
}
