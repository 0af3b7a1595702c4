//! Value types parsed from client input

pub mod date;
pub mod score;

/// Largest value of any goal tally or outcome counter
///
/// Every count fits a signed 32-bit database column.
pub const MAX_COUNT: u32 = i32::MAX as u32;

pub use date::MatchDate;
pub use score::Score;
