//! Headless Session
//!
//! Drives a [`DashboardState`] without a UI: every effect produced by an
//! event is run and its completion fed back before `dispatch` returns.
//! Used by the text report and the integration tests.

use futures::future::join_all;

use crate::domain::filter::FilterState;
use crate::eventing::app_event::AppEvent;
use crate::services::api_client::ApiClient;
use crate::services::loader::run_effect;
use crate::state::DashboardState;

#[derive(Debug, Clone)]
pub struct Session {
    api: ApiClient,
    state: DashboardState,
}

impl Session {
    pub fn new(api: ApiClient, filters: FilterState) -> Self {
        Self {
            api,
            state: DashboardState::new(filters),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply an event and settle all the fetches it triggers
    ///
    /// Effects of one transition run concurrently; completions are applied
    /// in effect order.
    pub async fn dispatch(&mut self, event: AppEvent) {
        let mut pending = vec![event];
        while !pending.is_empty() {
            let mut effects = Vec::new();
            for event in pending.drain(..) {
                let transition = self.state.reduce(event);
                self.state = transition.state;
                effects.extend(transition.effects);
            }
            pending = join_all(effects.into_iter().map(|e| run_effect(&self.api, e))).await;
        }
    }
}
