use colored::*;

use crate::constants::{MISSING_LABEL, PRESENT_LABEL};
use crate::http::PresenceMap;

/// Format every required header with its status
pub fn format_full_report(url: &str, presence: &PresenceMap, colored: bool) -> String {
    let mut output = format!("\nResults for {}:\n", url);
    for (header, present) in presence.iter() {
        let status = match (present, colored) {
            (true, true) => PRESENT_LABEL.green().to_string(),
            (false, true) => MISSING_LABEL.red().to_string(),
            (true, false) => PRESENT_LABEL.to_string(),
            (false, false) => MISSING_LABEL.to_string(),
        };
        output.push_str(&format!("  {}: {}\n", header, status));
    }
    output
}

/// Format the missing headers of a URL, or `None` if nothing is missing
pub fn format_missing_report(url: &str, presence: &PresenceMap) -> Option<String> {
    let missing: Vec<&str> = presence.missing().collect();
    if missing.is_empty() {
        return None;
    }
    Some(format!("{} is missing: {}\n", url, missing.join(", ")))
}
