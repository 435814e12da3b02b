//! Plain-text progress and result report.
//!
//! [`TextReporter`] is a [`RolloutCallback`] that writes the run banner, the
//! failure or success line, and the truncated total for each episode. The
//! verdict block is written separately once both episodes are in.

use std::io::{self, Write};

use stability_core::rollout::RolloutCallback;
use stability_core::verdict::Comparison;
use stability_types::{EpisodeResult, PolicyKind};

/// Writes the study report to any [`Write`] sink.
pub struct TextReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextReporter<W> {
    /// Create a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Banner printed once before the comparative study.
    pub fn study_banner(&mut self) {
        self.line(format_args!("INITIALIZING COMPARATIVE STUDY..."));
    }

    /// Final verdict block.
    pub fn verdict(&mut self, comparison: &Comparison) {
        self.line(format_args!("\n--- FINAL VERDICT ---"));
        for text in comparison.verdict.lines() {
            self.line(format_args!("{text}"));
        }
    }

    /// Flush the sink and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, args: core::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{args}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> RolloutCallback for TextReporter<W> {
    fn on_start(&mut self, policy: PolicyKind, _horizon: u32) {
        self.line(format_args!("\n--- SIMULATION START: {policy} ---"));
    }

    fn on_episode_end(&mut self, result: &EpisodeResult) {
        if result.success {
            self.line(format_args!("SUCCESS. Agent survived full horizon."));
        } else {
            self.line(format_args!(
                "FAILURE at Step {}. Cause: System Collapse.",
                result.final_step
            ));
        }
        self.line(format_args!(
            "Total Value Generated: {}",
            result.truncated_reward()
        ));
    }
}
