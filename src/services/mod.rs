//! Service Layer
//!
//! HTTP access to the statistics API and the plumbing that runs reducer
//! effects off the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ServiceHub                          │
//! │   Effect ──▶ spawn_in_tokio(run_effect) ──▶ ApiClient     │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent (crossbeam channel)
//! ┌──────────────────────────────────────────────────────────┐
//! │                   DashboardState::reduce                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod api_client;
mod hub;
mod loader;
mod runtime;
mod session;

pub use api_client::*;
pub use hub::*;
pub use loader::*;
pub use runtime::*;
pub use session::*;
