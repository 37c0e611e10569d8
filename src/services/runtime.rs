//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest needs tokio. Fetches are spawned
//! on a process-wide tokio runtime and report back through a channel.
//!
//! ## Pattern
//!
//! ```text
//! UI event
//!       │
//!       ▼
//! spawn_in_tokio(async { run_effect(..).await; tx.send(..) })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! completion drained by the UI timer
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

use crate::error::Result;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
pub fn runtime() -> Result<&'static Runtime> {
    if let Some(rt) = TOKIO_RUNTIME.get() {
        return Ok(rt);
    }
    let rt = Builder::new_multi_thread()
        .enable_all()
        .thread_name("vital-stats-io")
        .build()?;
    Ok(TOKIO_RUNTIME.get_or_init(|| rt))
}

/// Spawn a detached task in the tokio runtime
pub fn spawn_in_tokio<F>(future: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime()?.spawn(future);
    Ok(())
}

/// Block on a future synchronously (startup and the headless report only)
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(runtime()?.block_on(future))
}
