//! Selection of the revenue-maximizing uniform clearing price.
//!
//! Accepting the bid at position `k` (1-indexed) clears it and every bid ranked
//! above it at that bid's price, so `k` servers go for `k * bid`. The selector
//! scans the first `min(capacity, bids.len())` bids and keeps the best one.
//! Equal revenue never replaces the running best: the higher bid that uses
//! fewer servers wins, leaving the rest to be auctioned later.

use crate::error::SelectError;
use crate::models::bid_calc_model::{BidCalcModel, BidCalcReport, CandidateModel, SelectionModel};

/// Revenue of clearing `position` servers at `bid` each.
pub fn revenue_at(position: usize, bid: i64) -> i128 {
    position as i128 * i128::from(bid)
}

/// Every candidate the selector considers, highest bid first.
///
/// Bids past the capacity are never visited. A capacity below one yields no
/// candidates.
pub fn candidates(bids: &[i64], capacity: i64) -> impl Iterator<Item = CandidateModel> + '_ {
    let considered = usize::try_from(capacity).unwrap_or(0).min(bids.len());
    bids[..considered]
        .iter()
        .enumerate()
        .map(|(index, &bid)| {
            let position = index + 1;
            CandidateModel {
                position,
                bid,
                revenue: revenue_at(position, bid),
            }
        })
}

pub fn select(capacity: i64, bids: &[i64]) -> Result<SelectionModel, SelectError> {
    if capacity < 1 {
        return Err(SelectError::InvalidArgument { capacity });
    }

    let mut best = SelectionModel::default();
    for candidate in candidates(bids, capacity) {
        tracing::debug!(
            position = candidate.position,
            bid = candidate.bid,
            revenue = %candidate.revenue,
            "evaluated candidate"
        );
        if candidate.revenue > best.revenue {
            best = SelectionModel {
                revenue: candidate.revenue,
                winning_bid: candidate.bid,
                winning_position: candidate.position,
            };
        }
    }

    tracing::info!(
        capacity,
        bids = bids.len(),
        revenue = %best.revenue,
        winning_bid = best.winning_bid,
        winning_position = best.winning_position,
        "selected clearing price"
    );
    Ok(best)
}

/// Runs a selection and folds any failure into the error record.
pub fn calculate(model: &BidCalcModel) -> BidCalcReport {
    let result = select(model.capacity, &model.bids);
    if let Err(err) = &result {
        tracing::error!(?err, "{}", err);
    }
    result.into()
}
