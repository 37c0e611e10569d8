//! Eventing - Events In, Effects Out

pub mod app_event;
pub mod effect;
