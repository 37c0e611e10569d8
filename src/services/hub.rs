//! Service Hub
//!
//! Runs reducer effects on the tokio runtime and multiplexes their
//! completions into one channel for the UI.

use crossbeam_channel::{Receiver, Sender};

use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::eventing::effect::Effect;
use crate::services::api_client::ApiClient;
use crate::services::loader::run_effect;
use crate::services::runtime::spawn_in_tokio;

/// Central hub for backend fetches
#[derive(Debug, Clone)]
pub struct ServiceHub {
    api: ApiClient,
    /// Completion sender, cloned into each spawned fetch
    tx: Sender<AppEvent>,
}

impl ServiceHub {
    /// Create a hub and the receiver its completions arrive on
    pub fn new(api: ApiClient) -> (Self, Receiver<AppEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { api, tx }, rx)
    }

    /// Spawn one effect; its completion event is sent on the channel
    pub fn execute(&self, effect: Effect) -> Result<()> {
        tracing::debug!("Executing {effect:?}");
        let api = self.api.clone();
        let tx = self.tx.clone();
        spawn_in_tokio(async move {
            let event = run_effect(&api, effect).await;
            if tx.send(event).is_err() {
                tracing::debug!("Dropping completion of {effect:?}: receiver closed");
            }
        })
    }

    /// Spawn every effect of a transition
    pub fn execute_all(&self, effects: impl IntoIterator<Item = Effect>) -> Result<()> {
        effects.into_iter().try_for_each(|effect| self.execute(effect))
    }
}
