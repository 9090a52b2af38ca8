use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Sort key for column labels without a parseable number. Places them after
/// all numbered columns.
pub const UNNUMBERED_COLUMN_KEY: u32 = 999;

/// Highest stall number a position field value may carry.
pub const MAX_STALL_NUMBER: u8 = 10;

lazy_static! {
    static ref COLUMN_NUMBER: Regex = Regex::new(r"(\d+)").unwrap();
    static ref STALL_LABEL: Regex = Regex::new(r"(?i)stall\s+(\d+)").unwrap();
}

/// Extracts the numeric sort key from a column label.
///
/// `"Stall 7"` yields 7. Labels without a number (and numbers that do not
/// fit into a `u32`) yield [`UNNUMBERED_COLUMN_KEY`], so sorting by this key
/// keeps unnumbered columns at the end in a stable order.
pub fn column_sort_key(label: &str) -> u32 {
    COLUMN_NUMBER
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(UNNUMBERED_COLUMN_KEY)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid stall position")]
pub struct StallPositionParseError;

/// Value of the derived position field that mirrors the stall grouping.
///
/// Moving a card to another column changes the grouping field; the position
/// field must follow so both stay consistent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StallPosition {
    #[default]
    Unassigned,
    Stall(u8),
}

impl StallPosition {
    /// Derives the position for a move to the column with the given label.
    ///
    /// `None` is the unassigned column. Labels that do not name a stall
    /// within `1..=`[`MAX_STALL_NUMBER`] map to `Unassigned`.
    pub fn for_column(label: Option<&str>) -> Self {
        label
            .and_then(|label| STALL_LABEL.captures(label))
            .and_then(|caps| caps[1].parse::<u8>().ok())
            .filter(|number| (1..=MAX_STALL_NUMBER).contains(number))
            .map_or(Self::Unassigned, Self::Stall)
    }
}

impl fmt::Display for StallPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unassigned => write!(f, "unassigned"),
            Self::Stall(number) => write!(f, "stall{number}"),
        }
    }
}

impl FromStr for StallPosition {
    type Err = StallPositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unassigned" {
            return Ok(Self::Unassigned);
        }
        let number = s
            .strip_prefix("stall")
            .and_then(|number| number.parse::<u8>().ok())
            .ok_or(StallPositionParseError)?;
        if (1..=MAX_STALL_NUMBER).contains(&number) {
            Ok(Self::Stall(number))
        } else {
            Err(StallPositionParseError)
        }
    }
}
