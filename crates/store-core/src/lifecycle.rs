//! Render lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases of a page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, nothing written yet.
    Start,
    /// Shell HTML has been written.
    ShellSent,
    /// A named section has been written.
    SectionSent(String),
    /// Response completed.
    Completion,
}

/// Timing marks for one render.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark. Re-marking overwrites the earlier instant.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Whether a mark with this name exists.
    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    /// Time since the context was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from request start to the shell being written.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Timing for a named section, if both of its marks exist.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.marks.get(&format!("section_{}_start", section))?;
        let sent = self.marks.get(&format!("section_{}_sent", section))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    /// Section name.
    pub name: String,
    /// Offset from request start to section start.
    pub start: Duration,
    /// Time spent writing the section.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_timing_requires_both_marks() {
        let mut timing = TimingContext::new();
        timing.mark_section_start("shoe-grid");
        assert!(timing.section_timing("shoe-grid").is_none());

        timing.mark_section_sent("shoe-grid");
        let section = timing.section_timing("shoe-grid").unwrap();
        assert_eq!(section.name, "shoe-grid");
        assert!(section.duration <= timing.elapsed());
    }

    #[test]
    fn test_time_to_shell() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());
        timing.mark("shell_sent");
        assert!(timing.has_mark("shell_sent"));
        assert!(timing.time_to_shell().is_some());
    }
}
