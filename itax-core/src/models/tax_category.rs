use std::fmt;

use serde::{Deserialize, Serialize};

/// Age from which the senior citizen slabs apply, regardless of sex.
pub const SENIOR_CITIZEN_AGE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }

    /// Parses `m` or `f`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("m") {
            Some(Self::Male)
        } else if s.eq_ignore_ascii_case("f") {
            Some(Self::Female)
        } else {
            None
        }
    }
}

/// Selects which slab table applies to a taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    Male,
    Female,
    Senior,
}

impl TaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Senior => "senior",
        }
    }

    /// Senior citizens get their own table; everyone else is keyed by sex.
    pub fn select(
        sex: Sex,
        age: u32,
    ) -> Self {
        if age >= SENIOR_CITIZEN_AGE {
            return Self::Senior;
        }

        match sex {
            Sex::Male => Self::Male,
            Sex::Female => Self::Female,
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
