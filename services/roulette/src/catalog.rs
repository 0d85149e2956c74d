//! Outside-bet catalog
//!
//! The fixed, ordered set of outside-bet names accepted by the table.
//! Names are matched case-sensitively; anything else is simply not an
//! outside bet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{BLACK_NUMBERS, RED_NUMBERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutsideBetType {
    Low,
    High,
    Even,
    Odd,
    Red,
    Black,
    Dozen1,
    Dozen2,
    Dozen3,
    Column1,
    Column2,
    Column3,
    Basket,
}

impl OutsideBetType {
    /// Every outside bet, in catalog order
    pub const ALL: [OutsideBetType; 13] = [
        OutsideBetType::Low,
        OutsideBetType::High,
        OutsideBetType::Even,
        OutsideBetType::Odd,
        OutsideBetType::Red,
        OutsideBetType::Black,
        OutsideBetType::Dozen1,
        OutsideBetType::Dozen2,
        OutsideBetType::Dozen3,
        OutsideBetType::Column1,
        OutsideBetType::Column2,
        OutsideBetType::Column3,
        OutsideBetType::Basket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutsideBetType::Low => "low",
            OutsideBetType::High => "high",
            OutsideBetType::Even => "even",
            OutsideBetType::Odd => "odd",
            OutsideBetType::Red => "red",
            OutsideBetType::Black => "black",
            OutsideBetType::Dozen1 => "dozen1",
            OutsideBetType::Dozen2 => "dozen2",
            OutsideBetType::Dozen3 => "dozen3",
            OutsideBetType::Column1 => "column1",
            OutsideBetType::Column2 => "column2",
            OutsideBetType::Column3 => "column3",
            OutsideBetType::Basket => "basket",
        }
    }

    /// Classify a bet name. `None` means "not an outside bet type".
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bet_type| bet_type.as_str() == name)
    }

    /// Catalog names in order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(OutsideBetType::as_str).collect()
    }
}

impl FromStr for OutsideBetType {
    type Err = UnknownBetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownBetType(s.to_string()))
    }
}

impl fmt::Display for OutsideBetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned by `FromStr` for a name outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown outside bet type: {0}")]
pub struct UnknownBetType(pub String);

/// Red on the European layout. Used for every pocket count.
pub fn is_red(number: u32) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Black on the European layout. Used for every pocket count.
pub fn is_black(number: u32) -> bool {
    BLACK_NUMBERS.contains(&number)
}
