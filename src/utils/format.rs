//! Format - Formatting Utilities

use chrono::{DateTime, Local};

use crate::i18n::Locale;

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Format a count with the locale's thousands separator
///
/// pt-BR groups with `.`, en-US with `,`.
pub fn format_number(n: u64, locale: Locale) -> String {
    let sep = match locale {
        Locale::PtBR => '.',
        Locale::EnUS => ',',
    };
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_pt_br() {
        assert_eq!(format_number(0, Locale::PtBR), "0");
        assert_eq!(format_number(999, Locale::PtBR), "999");
        assert_eq!(format_number(1000, Locale::PtBR), "1.000");
        assert_eq!(format_number(2_654_321, Locale::PtBR), "2.654.321");
    }

    #[test]
    fn test_format_number_en_us() {
        assert_eq!(format_number(12_345, Locale::EnUS), "12,345");
    }
}
