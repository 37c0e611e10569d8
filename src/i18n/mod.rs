//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Portuguese (Brazil)
    #[default]
    PtBR,
    /// English (US)
    EnUS,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::PtBR => "Português",
            Locale::EnUS => "English",
        }
    }

    /// Pick a locale from the OS user locale; anything not English is pt-BR
    pub fn from_system() -> Self {
        let tag = locale_config::Locale::user_default().to_string();
        if tag.to_ascii_lowercase().starts_with("en") {
            Locale::EnUS
        } else {
            Locale::PtBR
        }
    }

    /// Toggle between Portuguese and English
    pub fn toggled(self) -> Self {
        match self {
            Locale::PtBR => Locale::EnUS,
            Locale::EnUS => Locale::PtBR,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (pt, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Estatísticas Vitais do Brasil", "Brazil Vital Statistics"));
    map.insert(
        "app-subtitle",
        (
            "Dados de nascimentos, óbitos e casamentos por estado e município",
            "Births, deaths and marriages by state and municipality",
        ),
    );

    // Record types
    map.insert("record-all", ("Todos os Registros", "All Records"));
    map.insert("record-births", ("Nascimentos", "Births"));
    map.insert("record-deaths", ("Óbitos", "Deaths"));
    map.insert("record-marriages", ("Casamentos", "Marriages"));
    map.insert("record-unknown", ("Registros", "Records"));

    // Filter section
    map.insert("filter-record-type", ("Tipo de Registro", "Record Type"));
    map.insert("filter-year", ("Ano", "Year"));
    map.insert("filter-region", ("Região", "Region"));
    map.insert("filter-state", ("Estado", "State"));
    map.insert("filter-all-regions", ("Todas as Regiões", "All Regions"));
    map.insert("filter-all-states", ("Todos os Estados", "All States"));

    // Actions
    map.insert("action-search", ("Pesquisar", "Search"));
    map.insert("action-back", ("Voltar para Estados", "Back to States"));
    map.insert("action-clear", ("Limpar", "Clear"));

    // Results
    map.insert("results-states", ("Estados do Brasil", "States of Brazil"));
    map.insert("results-municipalities", ("Municípios", "Municipalities"));
    map.insert("results-year", ("Ano", "Year"));
    map.insert("results-total", ("Total de Registros", "Total Records"));

    // Table columns
    map.insert("col-state", ("Estado", "State"));
    map.insert("col-municipality", ("Município", "Municipality"));
    map.insert("col-total", ("Registros", "Records"));

    // Notices
    map.insert("notice-title", ("Avisos", "Notices"));

    // Table
    map.insert("table-no-data", ("Nenhum dado", "No data"));
    map.insert("table-loading", ("Carregando dados...", "Loading data..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key; unknown keys are returned unchanged
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    match translations().get(key) {
        Some(&(pt, en)) => match locale {
            Locale::PtBR => pt,
            Locale::EnUS => en,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::RecordType;

    #[test]
    fn test_translate_both_locales() {
        assert_eq!(t(Locale::PtBR, "record-deaths"), "Óbitos");
        assert_eq!(t(Locale::EnUS, "record-deaths"), "Deaths");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_every_record_type_has_a_label() {
        for rt in RecordType::selectable() {
            assert_ne!(t(Locale::PtBR, rt.label_key()), rt.label_key());
        }
    }
}
