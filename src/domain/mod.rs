//! Domain - Pure Data Structures and API Types
//!
//! These types don't depend on GPUI and represent the statistics domain.

pub mod aggregation;
pub mod config;
pub mod filter;
pub mod geography;
pub mod statistic;
