//! Letter-by-letter reveal of scripted excerpts.
//!
//! A single [`RevealTimer`] covers every excerpt: it owns the full text and
//! the per-character interval, and the host advances it from a fixed-interval
//! timer. [`RevealController`] restarts the timer whenever the active
//! identity changes and clears it when nothing is active.

use crate::constants::REVEAL_INTERVAL;
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealTimer {
    text: String,
    interval: Duration,
    visible: usize,
    total: usize,
}

impl RevealTimer {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            interval,
            visible: 0,
            total,
        }
    }

    /// Already fully shown; used for titles and reduced motion.
    pub fn completed(text: impl Into<String>) -> Self {
        let mut t = Self::new(text, Duration::ZERO);
        t.finish();
        t
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Reveal one more character. Returns `true` once everything is shown.
    pub fn step(&mut self) -> bool {
        if self.visible < self.total {
            self.visible += 1;
        }
        self.is_complete()
    }

    pub fn finish(&mut self) {
        self.visible = self.total;
    }

    pub fn is_complete(&self) -> bool {
        self.visible >= self.total
    }

    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.visible) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

/// Scripted excerpts shown instead of the title for some songs.
#[derive(Clone, Debug, Default)]
pub struct ExcerptBook {
    entries: FnvHashMap<String, String>,
}

impl ExcerptBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slug: &str, excerpt: &str) -> Self {
        self.insert(slug, excerpt);
        self
    }

    pub fn insert(&mut self, slug: &str, excerpt: &str) {
        self.entries.insert(slug.to_string(), excerpt.to_string());
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings for the default catalog.
    pub fn default_excerpts() -> Self {
        Self::new()
            .with("rush", "Want this feeling to go away so I rush-")
            .with("testing", "Can I still fight this bad thing off")
            .with("supernova", "I still sing our favorite songs")
            .with(
                "samsara-city-lights-demo",
                "What is with this city that makes you just lose your mind",
            )
    }
}

/// What the host must do with its interval timer after an identity change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start (or restart) a repeating timer with this interval.
    Start(Duration),
    /// Clear any running timer.
    Stop,
}

#[derive(Clone, Debug)]
pub struct RevealController {
    interval: Duration,
    active: Option<(String, RevealTimer)>,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(REVEAL_INTERVAL)
    }
}

impl RevealController {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: None,
        }
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_ref().map(|(s, _)| s.as_str())
    }

    pub fn timer(&self) -> Option<&RevealTimer> {
        self.active.as_ref().map(|(_, t)| t)
    }

    /// React to a change of the active identity. Every announcement starts
    /// the reveal over.
    pub fn on_active_changed(
        &mut self,
        active: Option<(&str, &str)>,
        excerpts: &ExcerptBook,
        reduced_motion: bool,
    ) -> TimerCommand {
        let Some((slug, title)) = active else {
            self.active = None;
            return TimerCommand::Stop;
        };
        let timer = match excerpts.get(slug) {
            Some(excerpt) if !reduced_motion => RevealTimer::new(excerpt, self.interval),
            Some(excerpt) => RevealTimer::completed(excerpt),
            None => RevealTimer::completed(title),
        };
        let command = if timer.is_complete() {
            TimerCommand::Stop
        } else {
            TimerCommand::Start(self.interval)
        };
        self.active = Some((slug.to_string(), timer));
        command
    }

    /// One timer firing. Returns `true` when the host can clear its timer.
    pub fn on_timer(&mut self) -> bool {
        match &mut self.active {
            Some((_, timer)) => timer.step(),
            None => true,
        }
    }

    /// Text to show for `slug`, if it is the identity being revealed.
    pub fn display_text(&self, slug: &str) -> Option<&str> {
        match &self.active {
            Some((s, timer)) if s == slug => Some(timer.visible_text()),
            _ => None,
        }
    }
}
