//! Terminal UI helpers: semantic styling and the fetch spinner.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::time::Duration;

/// Styles for different semantic elements of the output.
pub struct Style;

impl Style {
    /// Style for section headers (group titles, the Suggestions banner)
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Style for the result-language term
    pub fn term<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Style for category labels
    pub fn category<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for word-type suffixes like `(v.)`
    pub fn word_type<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Style for the total-count footer
    pub fn footer<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }
}

/// A terminal spinner shown while the lookup request is in flight.
///
/// Clears itself when dropped, so an early `?` return never leaves a
/// stale spinner line behind.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
