use super::constants::{DELETE_DELAY_MS, PAUSE_EMPTY_MS, PAUSE_FULL_MS, TYPE_DELAY_MS};

/// The state the typewriter is waiting in between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

impl TypingPhase {
    /// Delay before the next tick while in this phase.
    pub fn delay_ms(self) -> u32 {
        match self {
            TypingPhase::Typing => TYPE_DELAY_MS,
            TypingPhase::PausingFull => PAUSE_FULL_MS,
            TypingPhase::Deleting => DELETE_DELAY_MS,
            TypingPhase::PausingEmpty => PAUSE_EMPTY_MS,
        }
    }
}

/// Cycles forever through a fixed list of phrases, typing and deleting one
/// character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl Typewriter {
    /// Returns `None` for an empty phrase list.
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Length of the current phrase in characters.
    pub fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    /// Delay until the next tick should run.
    pub fn delay_ms(&self) -> u32 {
        self.phase.delay_ms()
    }

    /// Apply one transition and return the text that should now be visible.
    pub fn tick(&mut self) -> String {
        match self.phase {
            TypingPhase::Typing => self.type_char(),
            TypingPhase::PausingFull | TypingPhase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                self.phase = if self.char_index == 0 {
                    TypingPhase::PausingEmpty
                } else {
                    TypingPhase::Deleting
                };
            }
            TypingPhase::PausingEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = TypingPhase::Typing;
                self.type_char();
            }
        }
        self.visible_text()
    }

    fn type_char(&mut self) {
        let len = self.current_len();
        if self.char_index < len {
            self.char_index += 1;
        }
        if self.char_index >= len {
            self.phase = TypingPhase::PausingFull;
        }
    }

    /// Prefix of the current phrase up to the character index.
    pub fn visible_text(&self) -> String {
        self.phrases[self.phrase_index]
            .chars()
            .take(self.char_index)
            .collect()
    }
}
