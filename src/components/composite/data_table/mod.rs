//! DataTable Component
//!
//! A reusable results table with clickable rows.

pub mod column;
pub mod data_table;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
