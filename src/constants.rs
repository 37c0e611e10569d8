//! Constants
//!
//! Centralized defaults and UI constants for consistent layout across the application.

use crate::domain::statistic::Year;

/// Default statistics API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Newest year offered, and the year selected on startup
pub const DEFAULT_YEAR: Year = 2025;

/// Number of years offered in the year chooser
pub const YEAR_SPAN: Year = 11;

/// Notices kept in the notice panel
pub const NOTICE_CAPACITY: usize = 50;

/// Completed actions drained per UI tick
pub const INGEST_BATCH_SIZE: usize = 64;
pub const INGEST_INTERVAL_MS: u64 = 50;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Results table column widths
pub const NAME_COLUMN_WIDTH: f32 = 320.0;
pub const TOTAL_COLUMN_WIDTH: f32 = 160.0;

/// Notice panel height when expanded
pub const NOTICE_PANEL_HEIGHT: f32 = 140.0;
