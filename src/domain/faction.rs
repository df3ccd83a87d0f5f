//! The two player populations whose auction houses are compared.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Horde,
    Alliance,
}

impl Faction {
    pub const ALL: [Faction; 2] = [Faction::Horde, Faction::Alliance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Horde => "Horde",
            Faction::Alliance => "Alliance",
        }
    }

    /// The faction with the strictly lower value; ties go to Alliance.
    pub fn cheaper<T: PartialOrd>(horde: T, alliance: T) -> Faction {
        if horde < alliance {
            Faction::Horde
        } else {
            Faction::Alliance
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheaper_prefers_strictly_lower_horde() {
        assert_eq!(Faction::cheaper(1, 2), Faction::Horde);
        assert_eq!(Faction::cheaper(2, 1), Faction::Alliance);
    }

    #[test]
    fn cheaper_tie_goes_to_alliance() {
        assert_eq!(Faction::cheaper(5, 5), Faction::Alliance);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Faction::Horde).unwrap();
        assert_eq!(json, "\"horde\"");
        let back: Faction = serde_json::from_str("\"alliance\"").unwrap();
        assert_eq!(back, Faction::Alliance);
    }
}
