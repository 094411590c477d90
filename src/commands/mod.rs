//! Command implementations for phoenix

pub mod betweenness;
pub mod dispatch;
pub mod metrics;
pub mod paths;
pub mod search;
