use crate::error::{ParseError, SelectError};
use crate::utils::conversions::{coerce_integer, parse_integer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input of a single clearing-price selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BidCalcModel {
    /// Number of identical servers up for auction.
    pub capacity: i64,
    /// Bid prices, highest first. The ordering is trusted, never checked.
    #[serde(default)]
    pub bids: Vec<i64>,
}

impl BidCalcModel {
    /// Builds a model from command-line tokens. Loose mode turns malformed
    /// numbers into `0`; strict mode rejects them.
    pub fn from_tokens<S: AsRef<str>>(
        capacity: &str,
        bids: &[S],
        strict: bool,
    ) -> Result<Self, ParseError> {
        if strict {
            Ok(Self {
                capacity: parse_integer(capacity)?,
                bids: bids
                    .iter()
                    .map(|bid| parse_integer(bid.as_ref()))
                    .collect::<Result<_, _>>()?,
            })
        } else {
            Ok(Self {
                capacity: coerce_integer(capacity),
                bids: bids.iter().map(|bid| coerce_integer(bid.as_ref())).collect(),
            })
        }
    }
}

/// The winning candidate of a selection. All zero when nothing beats zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    pub revenue: i128,
    pub winning_bid: i64,
    pub winning_position: usize,
}

impl fmt::Display for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max revenue ${} @ bid = ${}, with {} server(s) auctioned.",
            self.revenue, self.winning_bid, self.winning_position
        )
    }
}

/// One bid evaluated as the clearing price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateModel {
    pub position: usize,
    pub bid: i64,
    pub revenue: i128,
}

impl fmt::Display for CandidateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accepting bid ${} at position {} yields revenue ${}",
            self.bid, self.position, self.revenue
        )
    }
}

/// Record form of a selection outcome. Callers check for the error record
/// before reading any numeric field; a failed selection has none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BidCalcReport {
    Settled {
        revenue: i128,
        revenue_bid: i64,
        revenue_pos: usize,
    },
    Failed {
        error_message: String,
    },
}

impl BidCalcReport {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            BidCalcReport::Settled { .. } => None,
            BidCalcReport::Failed { error_message } => Some(error_message.as_str()),
        }
    }

    pub fn selection(&self) -> Option<SelectionModel> {
        match *self {
            BidCalcReport::Settled {
                revenue,
                revenue_bid,
                revenue_pos,
            } => Some(SelectionModel {
                revenue,
                winning_bid: revenue_bid,
                winning_position: revenue_pos,
            }),
            BidCalcReport::Failed { .. } => None,
        }
    }
}

impl From<SelectionModel> for BidCalcReport {
    fn from(selection: SelectionModel) -> Self {
        BidCalcReport::Settled {
            revenue: selection.revenue,
            revenue_bid: selection.winning_bid,
            revenue_pos: selection.winning_position,
        }
    }
}

impl From<Result<SelectionModel, SelectError>> for BidCalcReport {
    fn from(result: Result<SelectionModel, SelectError>) -> Self {
        match result {
            Ok(selection) => selection.into(),
            Err(err) => BidCalcReport::Failed {
                error_message: err.to_string(),
            },
        }
    }
}

impl fmt::Display for BidCalcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidCalcReport::Settled {
                revenue,
                revenue_bid,
                revenue_pos,
            } => write!(
                f,
                "Max revenue ${} @ bid = ${}, with {} server(s) auctioned.",
                revenue, revenue_bid, revenue_pos
            ),
            BidCalcReport::Failed { error_message } => write!(f, "Error: {}", error_message),
        }
    }
}
