//! Typewriter effect state machine.
//!
//! Each [`TypingEffect::tick`] reveals or removes one character and returns
//! the text to display together with the delay before the next tick. The
//! caller owns the timer, so the effect can be started and stopped.
//!
//! ```text
//! Typing ──(full length)──▶ PausingFull ──▶ Deleting ──(empty)──▶ PausingEmpty ──▶ Typing
//! ```

use std::time::Duration;

use crate::config::Timings;
use crate::error::{FolioError, FolioResult};

/// Where the effect is in its cycle after the latest tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Revealing characters of the current phrase
    Typing,
    /// Phrase fully shown; deletion starts after the long pause
    PausingFull,
    /// Removing characters
    Deleting,
    /// Phrase fully erased; the next phrase starts after the short pause
    PausingEmpty,
}

/// Indices into the phrase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Number of characters of the current phrase on screen
    pub char_index: usize,
    pub is_deleting: bool,
    /// Delay before the next tick
    pub speed: Duration,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    timings: Timings,
    state: TypingState,
    phase: TypingPhase,
}

impl TypingEffect {
    /// Create an effect positioned before the first character of the first phrase.
    pub fn new<S: AsRef<str>>(phrases: &[S], timings: Timings) -> FolioResult<Self> {
        if phrases.is_empty() {
            return Err(FolioError::InvalidConfig(
                "typing effect needs at least one phrase".to_string(),
            ));
        }

        let speed = timings.typing();
        Ok(Self {
            phrases: phrases
                .iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            timings,
            state: TypingState {
                phrase_index: 0,
                char_index: 0,
                is_deleting: false,
                speed,
            },
            phase: TypingPhase::Typing,
        })
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> TypingFrame {
        let len = self.phrases[self.state.phrase_index].len();

        if self.state.is_deleting {
            self.state.char_index = self.state.char_index.saturating_sub(1);
            self.state.speed = self.timings.deleting();
            self.phase = TypingPhase::Deleting;
        } else {
            self.state.char_index = (self.state.char_index + 1).min(len);
            self.state.speed = self.timings.typing();
            self.phase = TypingPhase::Typing;
        }
        let text = self.visible_text();

        if !self.state.is_deleting && self.state.char_index == len {
            self.state.is_deleting = true;
            self.state.speed = self.timings.full_pause();
            self.phase = TypingPhase::PausingFull;
        } else if self.state.is_deleting && self.state.char_index == 0 {
            self.state.is_deleting = false;
            self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
            self.state.speed = self.timings.empty_pause();
            self.phase = TypingPhase::PausingEmpty;
        }

        TypingFrame {
            text,
            next_delay: self.state.speed,
        }
    }

    fn visible_text(&self) -> String {
        self.phrases[self.state.phrase_index][..self.state.char_index]
            .iter()
            .collect()
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn current_phrase(&self) -> String {
        self.phrases[self.state.phrase_index].iter().collect()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::new(phrases, Timings::default()).unwrap()
    }

    #[test]
    fn test_types_forward() {
        let mut typing = effect(&["Hey", "Yo"]);
        let frame = typing.tick();
        assert_eq!(frame.text, "H");
        assert_eq!(frame.next_delay, Duration::from_millis(100));
        assert_eq!(typing.tick().text, "He");
        assert_eq!(typing.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_full_phrase_pauses_then_deletes() {
        let mut typing = effect(&["Hey", "Yo"]);
        typing.tick();
        typing.tick();
        let frame = typing.tick();
        assert_eq!(frame.text, "Hey");
        assert_eq!(frame.next_delay, Duration::from_millis(2000));
        assert_eq!(typing.phase(), TypingPhase::PausingFull);
        assert!(typing.state().is_deleting);

        let frame = typing.tick();
        assert_eq!(frame.text, "He");
        assert_eq!(frame.next_delay, Duration::from_millis(50));
        assert_eq!(typing.phase(), TypingPhase::Deleting);
    }

    #[test]
    fn test_empty_advances_phrase() {
        let mut typing = effect(&["Hi", "Yo"]);
        for _ in 0..3 {
            typing.tick();
        }
        let frame = typing.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.next_delay, Duration::from_millis(500));
        assert_eq!(typing.phase(), TypingPhase::PausingEmpty);
        assert_eq!(typing.state().phrase_index, 1);
        assert!(!typing.state().is_deleting);

        assert_eq!(typing.tick().text, "Y");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut typing = effect(&["A", "B"]);
        // "A": type, delete; "B": type, delete
        for _ in 0..4 {
            typing.tick();
        }
        assert_eq!(typing.state().phrase_index, 0);
        assert_eq!(typing.current_phrase(), "A");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut typing = effect(&["héllo ✨"]);
        typing.tick();
        assert_eq!(typing.tick().text, "hé");
        for _ in 0..5 {
            typing.tick();
        }
        assert_eq!(typing.state().char_index, 7);
        assert_eq!(typing.phase(), TypingPhase::PausingFull);
    }

    #[test]
    fn test_empty_phrase_stays_in_bounds() {
        let mut typing = effect(&["", "x"]);
        let frame = typing.tick();
        assert_eq!(frame.text, "");
        assert_eq!(typing.phase(), TypingPhase::PausingFull);
        typing.tick();
        assert_eq!(typing.state().phrase_index, 1);
        assert_eq!(typing.state().char_index, 0);
    }

    #[test]
    fn test_no_phrases_rejected() {
        let phrases: [&str; 0] = [];
        assert!(TypingEffect::new(&phrases, Timings::default()).is_err());
    }
}
