pub mod baseline;
pub mod features;
pub mod scores;
pub mod verdict;
