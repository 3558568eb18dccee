//! Distribution of shared expenses across lots by tantièmes.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::AllocationService;
pub use types::{AllocationReport, GroupLotTotal, LotTotal};
