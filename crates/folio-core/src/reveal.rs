//! Scroll-triggered reveal animations.
//!
//! The browser's intersection observer is only one way to learn that an
//! element became visible. [`VisibilityListener`] is the seam: anything that
//! can report [`VisibilityEntry`] batches can drive [`ScrollReveal`], which
//! makes the reveal rules testable with simulated entries.
//!
//! Reveals are one-way. Once a target is marked animated it stays animated
//! and later entries for it are ignored.
//!
//! The visible-ratio threshold belongs to the observer, which only reports
//! crossings of it. An intersecting entry is enough to reveal: an element
//! many times taller than the viewport never reaches the ratio at all.

use std::time::Duration;

use crate::config::{FolioConfig, Timings};

/// Selector for plain reveal targets.
pub const REVEAL_SELECTOR: &str =
    ".animate-on-scroll, .card, .skill-category, .cert-card, .blog-card, .testimonial-card";

/// Class added to a revealed element.
pub const ANIMATED_CLASS: &str = "animated";

/// One visibility observation for a registered target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    /// Index returned by [`ScrollReveal::register`]
    pub target: usize,
    pub is_intersecting: bool,
    /// Visible fraction of the target, in `[0, 1]`
    pub ratio: f64,
}

/// Receives batches of visibility changes.
pub trait VisibilityListener {
    fn on_visibility_change(&mut self, entries: &[VisibilityEntry]);
}

/// What a target does when revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Only gets the animated class
    Plain,
    /// A skill category whose tags appear one after another
    SkillCategory { tag_count: usize },
}

/// Slide-in direction pre-assigned to project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    /// Cards alternate starting from the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "slide-left",
            Self::Right => "slide-right",
        }
    }
}

/// A style change requested by the reveal logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add [`ANIMATED_CLASS`] to the target
    MarkAnimated { target: usize },
    /// Show the `tag`-th skill tag of the target after `delay`
    RevealTag {
        target: usize,
        tag: usize,
        delay: Duration,
    },
}

#[derive(Debug, Clone)]
struct RevealTarget {
    kind: RevealKind,
    animated: bool,
}

/// Reveal state for every observed element on the page.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    targets: Vec<RevealTarget>,
    timings: Timings,
    effects: Vec<RevealEffect>,
}

impl ScrollReveal {
    pub fn new(config: &FolioConfig) -> Self {
        Self {
            targets: Vec::new(),
            timings: config.timings.clone(),
            effects: Vec::new(),
        }
    }

    /// Track a new element and return its target index.
    pub fn register(&mut self, kind: RevealKind) -> usize {
        self.targets.push(RevealTarget {
            kind,
            animated: false,
        });
        self.targets.len() - 1
    }

    pub fn is_animated(&self, target: usize) -> bool {
        self.targets.get(target).is_some_and(|t| t.animated)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Take the effects produced since the last drain.
    pub fn drain_effects(&mut self) -> Vec<RevealEffect> {
        std::mem::take(&mut self.effects)
    }

    fn reveal(&mut self, index: usize) {
        let Some(target) = self.targets.get_mut(index) else {
            tracing::debug!(target = index, "visibility entry for unknown target");
            return;
        };
        if target.animated {
            return;
        }
        target.animated = true;

        self.effects.push(RevealEffect::MarkAnimated { target: index });
        if let RevealKind::SkillCategory { tag_count } = target.kind {
            for tag in 0..tag_count {
                self.effects.push(RevealEffect::RevealTag {
                    target: index,
                    tag,
                    delay: self.timings.stagger(tag),
                });
            }
        }
    }
}

impl VisibilityListener for ScrollReveal {
    fn on_visibility_change(&mut self, entries: &[VisibilityEntry]) {
        for entry in entries {
            if entry.is_intersecting {
                self.reveal(entry.target);
            }
        }
    }
}
