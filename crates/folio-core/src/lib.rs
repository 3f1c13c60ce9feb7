//! Folio Core Library
//!
//! Behavior logic for a single-page portfolio site, independent of the
//! browser.
//!
//! ## Overview
//!
//! Every page behavior is a small state object that consumes measurements
//! (scroll offsets, section bounds, card categories, visibility entries) and
//! produces the style changes to apply. The `folio-web` crate feeds these
//! objects from the live DOM; tests feed them directly.
//!
//! | Behavior          | Module          |
//! |-------------------|-----------------|
//! | Navigation        | [`navigation`]  |
//! | Scroll progress   | [`progress`]    |
//! | Scroll reveal     | [`reveal`]      |
//! | Typewriter text   | [`typing`]      |
//! | Project filters   | [`filter`]      |
//! | Contact form      | [`contact`]     |
//! | Smooth scroll     | [`anchor`]      |
//! | Scroll to top     | [`anchor`]      |
//! | Page load         | [`lifecycle`]   |
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{FolioConfig, TypingEffect};
//!
//! let config = FolioConfig::default();
//! let mut typing = TypingEffect::new(&config.typing.phrases, config.timings.clone()).unwrap();
//!
//! let frame = typing.tick();
//! assert_eq!(frame.text, "B");
//! ```

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod logging;
pub mod navigation;
pub mod progress;
pub mod reveal;
pub mod throttle;
pub mod typing;

// Re-exports
pub use anchor::{anchor_target, ScrollTopButton, SmoothScroll};
pub use config::{FolioConfig, ScrollConfig, Timings, TypingConfig};
pub use contact::{
    blur_indicator, ButtonState, ContactForm, FieldIndicator, FormSurface, FormTransport,
    Submission, SubmitOutcome, TransportResponse,
};
pub use error::{FolioError, FolioResult};
pub use filter::{CardTransition, FilterKey, ProjectCard, ProjectFilter};
pub use navigation::{NavLink, NavUpdate, Navigation, SectionBounds};
pub use progress::scroll_percent;
pub use reveal::{
    RevealEffect, RevealKind, ScrollReveal, SlideDirection, VisibilityEntry, VisibilityListener,
};
pub use throttle::FrameThrottle;
pub use typing::{TypingEffect, TypingFrame, TypingPhase, TypingState};
