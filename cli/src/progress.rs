//! Console progress reporter
//!
//! Prints one line per fan-out fetch to stderr, so progress never mixes
//! with the report on stdout.

use colored::Colorize;
use pulse_application::ProgressNotifier;

/// Progress notifier that reports fetches on stderr
pub struct ConsoleProgress;

impl ProgressNotifier for ConsoleProgress {
    fn on_fetch_start(&self, label: &str) {
        eprintln!("  {} fetching {}...", "•".dimmed(), label);
    }

    fn on_fetch_settled(&self, label: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "✓".green(), label);
        } else {
            eprintln!("  {} {} unavailable", "✗".red(), label);
        }
    }
}
