pub mod distribution;
pub mod error;
pub mod estimate;
pub mod risk;
