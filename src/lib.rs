//!
//! logiflow computes the [maximum flow](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! of a two-tier logistics network (origins -> intermediates -> destinations)
//! and attributes the flow back to origin-destination pairs.
//!
pub mod config;
pub mod error;
pub mod logger;
pub mod max_flow;
pub mod report;

pub use error::{FlowError, Result};
pub use max_flow::{max_flow, Capacity, FlowNetwork, LogisticsNetwork, MaxFlow};
