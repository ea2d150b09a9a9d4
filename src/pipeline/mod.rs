//! Image to palette: decode, bucket or cluster, optionally merge.

pub mod extract;
pub mod kmeans;
pub mod load;
pub mod merge;
