//! Page behavior configuration.
//!
//! Every timing and distance used by the behaviors lives here so a page can
//! tune them without rebuilding. All fields have defaults, so a partial JSON
//! document (or none at all) is valid:
//!
//! ```json
//! { "timings": { "typing_ms": 80 }, "typing": { "phrases": ["Hello"] } }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Default phrases cycled by the typing effect
pub const DEFAULT_PHRASES: [&str; 5] = [
    "Building ML Models",
    "Analyzing Data",
    "Creating Insights",
    "Solving Problems",
    "Innovating with AI",
];

/// Default `EnvFilter` directives
pub const DEFAULT_LOG_FILTER: &str = "folio=info,folio_web=info,folio_core=info";

/// Top-level configuration for every page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub timings: Timings,
    pub scroll: ScrollConfig,
    pub typing: TypingConfig,
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            scroll: ScrollConfig::default(),
            typing: TypingConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that would otherwise break a behavior at runtime.
    pub fn validate(&self) -> FolioResult<()> {
        if self.typing.phrases.is_empty() {
            return Err(FolioError::InvalidConfig(
                "typing.phrases must not be empty".to_string(),
            ));
        }

        let threshold = self.scroll.reveal_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "scroll.reveal_threshold must be within [0, 1], got {threshold}"
            )));
        }

        let distances = [
            ("scroll.navbar_threshold", self.scroll.navbar_threshold),
            ("scroll.section_lead", self.scroll.section_lead),
            ("scroll.header_offset", self.scroll.header_offset),
            ("scroll.scroll_top_threshold", self.scroll.scroll_top_threshold),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Animation and timer delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between revealed characters
    pub typing_ms: u64,
    /// Delay between removed characters
    pub deleting_ms: u64,
    /// Pause once a phrase is fully shown
    pub full_pause_ms: u64,
    /// Pause once a phrase is fully erased
    pub empty_pause_ms: u64,
    /// Per-index delay for staggered reveals
    pub stagger_ms: u64,
    /// Fade-out time before a filtered card leaves the layout
    pub fade_out_ms: u64,
    /// How long the contact button shows its result
    pub form_reset_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            full_pause_ms: 2000,
            empty_pause_ms: 500,
            stagger_ms: 50,
            fade_out_ms: 300,
            form_reset_ms: 3000,
        }
    }
}

impl Timings {
    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn deleting(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    pub fn full_pause(&self) -> Duration {
        Duration::from_millis(self.full_pause_ms)
    }

    pub fn empty_pause(&self) -> Duration {
        Duration::from_millis(self.empty_pause_ms)
    }

    /// Delay for the item at `index` in a staggered sequence.
    pub fn stagger(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn form_reset(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }
}

/// Scroll distances (CSS pixels) and intersection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the navbar gets the `scrolled` class
    pub navbar_threshold: f64,
    /// How far above its top a section already counts as current
    pub section_lead: f64,
    /// Height reserved for the fixed header when jumping to an anchor
    pub header_offset: f64,
    /// Offset past which the scroll-to-top button appears
    pub scroll_top_threshold: f64,
    /// Visible ratio at which an element is revealed
    pub reveal_threshold: f64,
    /// Root margin handed to the intersection observer
    pub reveal_root_margin: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            section_lead: 100.0,
            header_offset: 80.0,
            scroll_top_threshold: 500.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}
