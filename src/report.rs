use std::fmt::Write;
use crate::models::overnight::DailyLow;

/// Lows at or below this many degrees Fahrenheit get the freeze marker
pub const FREEZE_THRESHOLD: i32 = 39;

const FREEZE_MARKER: &str = " ❄❄❄";

/// Builds the report text, one line per low in the given order
///
/// # Arguments
///
/// * 'lows' - overnight lows in chronological order
pub fn format_report(lows: &[DailyLow]) -> String {
    let mut report = String::new();
    for low in lows {
        let marker = if low.temp <= FREEZE_THRESHOLD { FREEZE_MARKER } else { "" };
        let _ = writeln!(report, "{} night: {}{}", low.day, low.temp, marker);
    }

    report
}

/// Mail subject and report heading for a city
///
/// # Arguments
///
/// * 'city' - the city the forecast is for
pub fn subject(city: &str) -> String {
    format!("{} Overnight Forecast", city)
}

/// Prints the report to stdout headed by its subject line
///
/// # Arguments
///
/// * 'city' - the city the forecast is for
/// * 'report' - the formatted report
pub fn print_report(city: &str, report: &str) {
    println!("{}\n{}", subject(city), report);
}
