//! Phoenix Core Library
//!
//! Shortest-path trees, reachability and eccentricity metrics over
//! integer-labelled directed graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
