//! French formatting of amounts and dates as printed on receipts

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// `746.0` -> `"746,00 €"`
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{},{:02} €", sign, cents / 100, cents % 100)
}

/// `2025-09-05` -> `"05 septembre 2025"`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// `2025-09-01` -> `"SEPTEMBRE 2025"`
pub fn format_period(date: NaiveDate) -> String {
    format!(
        "{} {}",
        MONTHS[date.month0() as usize].to_uppercase(),
        date.year()
    )
}
