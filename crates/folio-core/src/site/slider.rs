//! Hero slider position, auto-advance timer and the typing animation timeline.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Auto-advance period of the hero slider.
pub const SLIDE_INTERVAL_MS: u64 = 7000;
/// Delay between two typed characters.
pub const CHAR_INTERVAL_MS: u64 = 70;
/// Pause between the heading finishing and the paragraph starting.
pub const PARAGRAPH_DELAY_MS: u64 = 500;

/// Which slide is showing. Navigation past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlider {
    slide_count: usize,
    current: usize,
}

impl HeroSlider {
    pub fn new(slide_count: usize) -> Self {
        Self { slide_count, current: 0 }
    }

    /// Shows `index`: past the last slide wraps to the first, before the first wraps to the last.
    pub fn show(&mut self, index: isize) -> usize {
        if self.slide_count == 0 {
            return 0;
        }
        self.current = if index >= self.slide_count as isize {
            0
        } else if index < 0 {
            self.slide_count - 1
        } else {
            index as usize
        };
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.show(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.show(self.current as isize - 1)
    }

    /// Dot navigation. Callers also reset the [`SlideTimer`].
    pub fn go_to(&mut self, index: usize) -> usize {
        self.show(index.min(isize::MAX as usize) as isize)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Active flag per dot.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.current).collect()
    }

    /// Horizontal offset of the slide strip, in percent.
    pub fn translate_percent(&self) -> i64 {
        -(self.current as i64) * 100
    }
}

/// Fixed-period auto-advance. Manual navigation restarts the period.
#[derive(Debug, Clone, Copy)]
pub struct SlideTimer {
    interval: Duration,
    started: Instant,
}

impl SlideTimer {
    pub fn new(now: Instant) -> Self {
        Self::with_interval(Duration::from_millis(SLIDE_INTERVAL_MS), now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self { interval, started: now }
    }

    pub fn reset(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.interval
    }

    /// Advances `slider` if the period elapsed and starts the next period.
    pub fn tick(&mut self, now: Instant, slider: &mut HeroSlider) -> bool {
        if !self.due(now) {
            return false;
        }
        slider.next();
        self.started += self.interval;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingTarget {
    Heading,
    Paragraph,
}

/// Visible text of one element `at_ms` after the slide was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingFrame {
    pub at_ms: u64,
    pub target: TypingTarget,
    pub visible: String,
}

/// Timeline of the typing effect for one slide.
///
/// Characters appear every [`CHAR_INTERVAL_MS`]; a typed element completes one tick after
/// its last character. The paragraph starts [`PARAGRAPH_DELAY_MS`] after the heading
/// completes, or immediately when there is no heading.
pub fn typing_schedule(heading: Option<&str>, paragraph: Option<&str>) -> Vec<TypingFrame> {
    let mut frames = Vec::new();
    let paragraph_start = match heading {
        Some(text) => {
            let done = push_frames(&mut frames, TypingTarget::Heading, text, 0);
            done + PARAGRAPH_DELAY_MS
        }
        None => 0,
    };
    if let Some(text) = paragraph {
        push_frames(&mut frames, TypingTarget::Paragraph, text, paragraph_start);
    }
    frames
}

fn push_frames(frames: &mut Vec<TypingFrame>, target: TypingTarget, text: &str, start: u64) -> u64 {
    let mut visible = String::new();
    let mut at = start;
    for c in text.chars() {
        at += CHAR_INTERVAL_MS;
        visible.push(c);
        frames.push(TypingFrame { at_ms: at, target, visible: visible.clone() });
    }
    at + CHAR_INTERVAL_MS
}
