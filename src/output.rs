//! Output formatting and display logic for urlcheck

use std::collections::{HashMap, HashSet};

use crate::checker::CheckStatus;
use crate::color::{Colors, colorize};

pub const RESULTS_HEADER: &str = "--- Results ---";

/// Format one result line: URL left-justified to 40 characters, then the
/// status string.
pub fn format_result_line(url: &str, status: &CheckStatus) -> String {
    format!("{url:<40} -> {status}")
}

/// Print the results header followed by one line per distinct URL, in
/// input order. Reachable URLs render green, everything else red.
pub fn display_results(urls: &[String], results: &HashMap<String, CheckStatus>) {
    println!("\n{RESULTS_HEADER}");

    let mut seen = HashSet::new();
    for url in urls {
        if !seen.insert(url.as_str()) {
            continue;
        }
        if let Some(status) = results.get(url) {
            let color = if status.is_ok() {
                Colors::GREEN
            } else {
                Colors::RED
            };
            println!("{}", colorize(&format_result_line(url, status), color));
        }
    }
}
