//! NoticeState - Transient User Notices
//!
//! Non-fatal messages shown in the notice panel: successful drill-ins,
//! unknown selections and failed list loads.

use chrono::{DateTime, Local};

use crate::constants::NOTICE_CAPACITY;
use crate::domain::geography::GeoId;
use crate::helpers::BoundedDeque;
use crate::i18n::Locale;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Success => "OK",
            NoticeLevel::Warning => "WARN",
            NoticeLevel::Error => "ERROR",
        }
    }
}

/// Which primary list failed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Regions,
    States,
    Municipalities,
}

/// What a notice is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// Drilled into a state
    StateSelected { name: String },
    /// Selected an id that is not in the current state list
    UnknownSelection { id: GeoId },
    /// Tried to select a state while already viewing one
    SelectionRejected,
    /// A primary list could not be loaded; the previous list stays on screen
    LoadFailed { resource: Resource, detail: String },
}

impl NoticeKind {
    pub fn level(&self) -> NoticeLevel {
        match self {
            NoticeKind::StateSelected { .. } => NoticeLevel::Success,
            NoticeKind::UnknownSelection { .. } => NoticeLevel::Warning,
            NoticeKind::SelectionRejected => NoticeLevel::Warning,
            NoticeKind::LoadFailed { .. } => NoticeLevel::Error,
        }
    }

    /// User-facing text
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (NoticeKind::StateSelected { name }, Locale::PtBR) => {
                format!("Estado selecionado: {name}")
            }
            (NoticeKind::StateSelected { name }, Locale::EnUS) => {
                format!("State selected: {name}")
            }
            (NoticeKind::UnknownSelection { id }, Locale::PtBR) => {
                format!("Estado desconhecido: {id}")
            }
            (NoticeKind::UnknownSelection { id }, Locale::EnUS) => format!("Unknown state: {id}"),
            (NoticeKind::SelectionRejected, Locale::PtBR) => {
                "Volte para a lista de estados antes de escolher outro".to_string()
            }
            (NoticeKind::SelectionRejected, Locale::EnUS) => {
                "Go back to the state list before choosing another state".to_string()
            }
            (NoticeKind::LoadFailed { resource, detail }, Locale::PtBR) => {
                let what = match resource {
                    Resource::Regions => "regiões",
                    Resource::States => "estados",
                    Resource::Municipalities => "municípios",
                };
                format!("Erro ao carregar {what}: {detail}")
            }
            (NoticeKind::LoadFailed { resource, detail }, Locale::EnUS) => {
                let what = match resource {
                    Resource::Regions => "regions",
                    Resource::States => "states",
                    Resource::Municipalities => "municipalities",
                };
                format!("Failed to load {what}: {detail}")
            }
        }
    }
}

/// A single notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub timestamp: DateTime<Local>,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        self.kind.level()
    }
}

/// Notice history using a ring buffer
#[derive(Debug, Clone)]
pub struct NoticeState {
    entries: BoundedDeque<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Push a notice stamped with the current time; returns its id
    pub fn push(&mut self, kind: NoticeKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            kind,
            timestamp: Local::now(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter_rev()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new(NOTICE_CAPACITY)
    }
}
