pub mod error;
pub mod models;
pub mod select;
pub mod tracing_helper;
pub mod utils;

pub use error::{ParseError, SelectError};
pub use models::bid_calc_model::{BidCalcModel, BidCalcReport, CandidateModel, SelectionModel};
pub use select::{calculate, candidates, select};
