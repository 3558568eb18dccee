//! Quarterly call-for-funds calculation.

pub mod calls;


pub use calls::{default_reserve_rate, CallLine, CallStatement, FundingService, QuarterlySchedule};
