//! Typed-phrase animation for the hero banner.
//!
//! A [`Typewriter`] cycles through a fixed list of phrases, revealing each one
//! character by character, pausing on the full phrase, then deleting it again
//! before moving on to the next. It never finishes on its own.
//!
//! The machine itself knows nothing about clocks: every call to
//! [`Typewriter::tick`] performs one transition and returns how long to wait
//! before the next one. [`Runner`] wires that up to a [`Scheduler`] so the same
//! loop runs on browser timeouts and on a virtual clock in tests.

mod runner;

pub use runner::{Runner, Scheduler};

use std::time::Duration;

pub const TYPING_SPEED: Duration = Duration::from_millis(100);
pub const DELETING_SPEED: Duration = Duration::from_millis(50);
pub const PAUSE_TIME: Duration = Duration::from_millis(1000);

/// Delays between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before each revealed character.
    pub typing: Duration,
    /// Delay before each removed character.
    pub deleting: Duration,
    /// How long a fully typed phrase stays on screen.
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing: TYPING_SPEED,
            deleting: DELETING_SPEED,
            pause: PAUSE_TIME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing { cursor: usize },
    PausedAfterTyping,
    Deleting { cursor: usize },
}

#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    // offsets[n] is the byte offset just past the nth character
    offsets: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut offsets = text.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
        offsets.push(text.len());
        Self { text, offsets }
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn prefix(&self, chars: usize) -> &str {
        &self.text[..self.offsets[chars.min(self.len())]]
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    timing: Timing,
    index: usize,
    phase: Phase,
}

impl Typewriter {
    /// An empty phrase list yields an idle typewriter that never ticks.
    pub fn new<I, S>(phrases: I, timing: Timing) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .map(|s| Phrase::new(s.into()))
            .collect();
        Self {
            phrases,
            timing,
            index: 0,
            phase: Phase::Typing { cursor: 0 },
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Number of characters currently on screen.
    pub fn cursor(&self) -> usize {
        match self.phase {
            Phase::Typing { cursor } | Phase::Deleting { cursor } => cursor,
            Phase::PausedAfterTyping => self.phrases.get(self.index).map_or(0, Phrase::len),
        }
    }

    /// The text currently on screen.
    pub fn display(&self) -> &str {
        self.phrases
            .get(self.index)
            .map_or("", |p| p.prefix(self.cursor()))
    }

    /// Delay before the first tick, `None` when idle.
    pub fn first_delay(&self) -> Option<Duration> {
        (!self.is_idle()).then_some(self.timing.typing)
    }

    /// Advance one step and return the delay before the next tick.
    pub fn tick(&mut self) -> Option<Duration> {
        let len = self.phrases.get(self.index)?.len();
        let delay = match self.phase {
            Phase::Typing { cursor } => {
                let cursor = (cursor + 1).min(len);
                if cursor == len {
                    self.phase = Phase::PausedAfterTyping;
                    self.timing.pause
                } else {
                    self.phase = Phase::Typing { cursor };
                    self.timing.typing
                }
            }
            Phase::PausedAfterTyping => {
                self.phase = Phase::Deleting { cursor: len };
                self.timing.deleting
            }
            Phase::Deleting { cursor } => {
                let cursor = cursor.saturating_sub(1);
                if cursor == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing { cursor: 0 };
                    self.timing.typing
                } else {
                    self.phase = Phase::Deleting { cursor };
                    self.timing.deleting
                }
            }
        };
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scenario() -> Typewriter {
        Typewriter::new(
            ["AB", "C"],
            Timing {
                typing: ms(100),
                deleting: ms(50),
                pause: ms(1000),
            },
        )
    }

    #[test]
    fn test_starts_typing_first_phrase() {
        let tw = scenario();
        assert_eq!(tw.phase(), Phase::Typing { cursor: 0 });
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.display(), "");
        assert_eq!(tw.first_delay(), Some(ms(100)));
    }

    #[test]
    fn test_full_phrase_after_len_ticks() {
        let phrases = ["Programmer", "Developer", "Problem solver", "UI/UX designer"];
        let mut tw = Typewriter::new(phrases, Timing::default());
        for (i, phrase) in phrases.iter().enumerate() {
            assert_eq!(tw.phrase_index(), i);
            assert_eq!(tw.display(), "");
            for _ in 0..phrase.len() {
                tw.tick();
            }
            assert_eq!(tw.display(), *phrase);
            assert_eq!(tw.phase(), Phase::PausedAfterTyping);

            // pause -> deleting, then delete down to the empty string
            assert_eq!(tw.tick(), Some(DELETING_SPEED));
            while tw.phrase_index() == i {
                tw.tick();
            }
        }
    }

    #[test]
    fn test_pause_then_strictly_shrinking() {
        let mut tw = Typewriter::new(["hello"], Timing::default());
        for _ in 0..4 {
            assert_eq!(tw.tick(), Some(TYPING_SPEED));
        }
        // last character arms the pause
        assert_eq!(tw.tick(), Some(PAUSE_TIME));
        assert_eq!(tw.display(), "hello");

        assert_eq!(tw.tick(), Some(DELETING_SPEED));
        assert_eq!(tw.phase(), Phase::Deleting { cursor: 5 });
        assert_eq!(tw.display(), "hello");

        let mut last = tw.display().len();
        loop {
            tw.tick();
            let now = tw.display().len();
            assert!(now < last, "display should shrink on every deleting tick");
            last = now;
            if now == 0 {
                break;
            }
        }
        assert_eq!(tw.phase(), Phase::Typing { cursor: 0 });
    }

    #[test]
    fn test_wraps_to_next_phrase() {
        let mut tw = scenario();
        tw.tick(); // A
        tw.tick(); // AB
        tw.tick(); // pause over
        tw.tick(); // A
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.tick(), Some(ms(100))); // ""
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.display(), "");
        tw.tick();
        assert_eq!(tw.display(), "C");
    }

    #[test]
    fn test_cycles_back_to_start() {
        let phrases = ["one", "two", "three"];
        let mut tw = Typewriter::new(phrases, Timing::default());
        let mut seen = vec![tw.phrase_index()];
        for _ in 0..phrases.len() {
            let start = tw.phrase_index();
            while tw.phrase_index() == start {
                tw.tick();
            }
            seen.push(tw.phrase_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new(["héllo 👋"], Timing::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "hé");
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.display(), "héllo 👋");
        assert_eq!(tw.cursor(), 7);
    }

    #[test]
    fn test_empty_list_is_idle() {
        let mut tw = Typewriter::new(Vec::<String>::new(), Timing::default());
        assert!(tw.is_idle());
        assert_eq!(tw.first_delay(), None);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.display(), "");
    }

    #[test]
    fn test_empty_phrase_is_skipped() {
        let mut tw = Typewriter::new(["", "x"], Timing::default());
        assert_eq!(tw.tick(), Some(PAUSE_TIME));
        assert_eq!(tw.phase(), Phase::PausedAfterTyping);
        assert_eq!(tw.tick(), Some(DELETING_SPEED));
        assert_eq!(tw.tick(), Some(TYPING_SPEED));
        assert_eq!(tw.phrase_index(), 1);
        tw.tick();
        assert_eq!(tw.display(), "x");
    }
}
