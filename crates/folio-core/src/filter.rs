//! Project card filtering.

use std::time::Duration;

use crate::config::Timings;

/// Category key carried by a filter button's `data-filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Category(String),
}

impl FilterKey {
    pub fn parse(key: &str) -> Self {
        if key == "all" {
            Self::All
        } else {
            Self::Category(key.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => key == category,
        }
    }
}

impl From<&str> for FilterKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

/// A project card's category as read from `data-category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub category: String,
}

impl ProjectCard {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

/// What happens to one card when a filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    /// Display now, fade in after `delay`
    FadeIn { delay: Duration },
    /// Fade out now, remove from layout after `hide_after`
    FadeOut { hide_after: Duration },
}

impl CardTransition {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::FadeIn { .. })
    }
}

/// Filter bar state: which button is active.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    timings: Timings,
    active_button: Option<usize>,
}

impl ProjectFilter {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            active_button: None,
        }
    }

    /// Activate `button` and compute the transition for every card.
    ///
    /// The delay of a fading-in card is its position among all cards, so
    /// cards further down the grid appear later.
    pub fn select(
        &mut self,
        button: usize,
        key: &FilterKey,
        cards: &[ProjectCard],
    ) -> Vec<CardTransition> {
        self.active_button = Some(button);

        cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if key.matches(&card.category) {
                    CardTransition::FadeIn {
                        delay: self.timings.stagger(index),
                    }
                } else {
                    CardTransition::FadeOut {
                        hide_after: self.timings.fade_out(),
                    }
                }
            })
            .collect()
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }
}
