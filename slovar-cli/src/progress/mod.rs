//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for file processing
///
/// Safe to share between worker threads.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        // a single file finishes before a bar is worth drawing
        if self.quiet || total_files < 2 {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", filename));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
