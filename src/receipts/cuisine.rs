use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The closed set of cuisines a receipt may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cuisine {
    Italian,
    Asian,
    Mexican,
    Indian,
    American,
    French,
    Mediterranean,
}

#[derive(Debug, Error)]
#[error("Invalid cuisine")]
pub struct InvalidCuisine;

impl Cuisine {
    pub const ALL: [Cuisine; 7] = [
        Cuisine::Italian,
        Cuisine::Asian,
        Cuisine::Mexican,
        Cuisine::Indian,
        Cuisine::American,
        Cuisine::French,
        Cuisine::Mediterranean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Asian => "Asian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::American => "American",
            Cuisine::French => "French",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }
}

impl FromStr for Cuisine {
    type Err = InvalidCuisine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(InvalidCuisine)
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
