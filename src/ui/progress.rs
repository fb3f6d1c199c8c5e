//! Recovery progress bar.

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::Theme;
use super::ProgressHandle;

/// A progress bar that advances once per history record.
pub struct RecoveryProgress {
    bar: ProgressBar,
    theme: Theme,
}

impl RecoveryProgress {
    /// Create a visible progress bar over `total` records.
    pub fn new(title: &str, total: usize, theme: Theme) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(&format!(
                "{} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {{percent}}% (eta {{eta}}) {{msg}}",
                title
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar, theme }
    }

    /// Create a progress bar that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: Theme::plain(),
        }
    }
}

impl ProgressHandle for RecoveryProgress {
    fn advance(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
        self.bar.inc(1);
    }

    fn finish(&mut self, msg: &str) {
        self.bar.finish_with_message(self.theme.format_success(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_progress_counts_advances() {
        let mut progress = RecoveryProgress::hidden();
        progress.advance("a.txt");
        progress.advance("b.txt");
        assert_eq!(progress.bar.position(), 2);
        progress.finish("done");
        assert!(progress.bar.is_finished());
    }

    #[test]
    fn visible_progress_creation() {
        let progress = RecoveryProgress::new("Recovering files", 3, Theme::plain());
        assert_eq!(progress.bar.position(), 0);
        assert_eq!(progress.bar.length(), Some(3));
    }
}
