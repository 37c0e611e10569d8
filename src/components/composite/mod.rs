//! Composite Components

pub mod data_table;
