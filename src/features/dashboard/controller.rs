//! Dashboard Controller
//!
//! Owns the [`DashboardState`] inside the GPUI app. User intents and fetch
//! completions both go through [`DashboardController::dispatch`]; effects
//! are handed to the [`ServiceHub`].

use std::time::Duration;

use crossbeam_channel::Receiver;
use gpui::{Context, Task};

use crate::constants::{INGEST_BATCH_SIZE, INGEST_INTERVAL_MS};
use crate::domain::filter::FilterState;
use crate::eventing::app_event::AppEvent;
use crate::services::ServiceHub;
use crate::state::DashboardState;

/// Dashboard controller entity
pub struct DashboardController {
    state: DashboardState,
    hub: ServiceHub,
    ingest_task: Option<Task<()>>,
}

impl DashboardController {
    pub fn new(hub: ServiceHub, filters: FilterState) -> Self {
        Self {
            state: DashboardState::new(filters),
            hub,
            ingest_task: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply an event, run its effects, and re-render observers
    pub fn dispatch(&mut self, event: AppEvent, cx: &mut Context<Self>) {
        let transition = self.state.reduce(event);
        self.state = transition.state;
        if let Err(e) = self.hub.execute_all(transition.effects) {
            tracing::error!("Failed to start fetch: {e}");
        }
        cx.notify();
    }

    /// Start draining fetch completions
    ///
    /// Completions are applied in batches on a timer to keep re-renders
    /// bounded during the per-state fan-out.
    pub fn start_ingest(&mut self, rx: Receiver<AppEvent>, cx: &mut Context<Self>) {
        if self.ingest_task.is_some() {
            tracing::warn!("Ingest task already running");
            return;
        }

        let task = cx.spawn(async move |handle, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(INGEST_INTERVAL_MS))
                    .await;

                let mut batch = Vec::with_capacity(INGEST_BATCH_SIZE);
                while let Ok(ev) = rx.try_recv() {
                    batch.push(ev);
                    if batch.len() >= INGEST_BATCH_SIZE {
                        break;
                    }
                }

                if batch.is_empty() {
                    continue;
                }

                if handle
                    .update(cx, |this, cx| {
                        for event in batch {
                            this.dispatch(event, cx);
                        }
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        self.ingest_task = Some(task);
        tracing::info!("Started dashboard ingest task");
    }
}
