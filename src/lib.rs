//! Vital Stats GUI Library
//!
//! Dashboard over the Brazilian vital statistics API: births, deaths and
//! marriages per state and municipality, filtered by record type, year and
//! region.
//!
//! The reducer, aggregation and API client are UI-free. The GPUI front end
//! lives behind the `gui` feature.

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
#[cfg(feature = "gui")]
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
#[cfg(feature = "gui")]
pub mod theme;
pub mod utils;
