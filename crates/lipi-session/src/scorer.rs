//! Per-character scoring of committed output against a reference prompt.

use tracing::trace;

/// Correctness of one prompt position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Pending,
    Correct,
    Incorrect,
}

/// Lifecycle of a scored session. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Complete,
}

/// Outcome of [`SessionScoreState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Correct,
    Incorrect,
    /// The prompt is already complete; nothing was written.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub wpm: f64,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
}

#[derive(Debug, Clone)]
pub struct SessionScoreState {
    prompt: Vec<char>,
    classes: Vec<Classification>,
    cursor: usize,
    correct: usize,
    incorrect: usize,
    errors: u32,
    keystrokes: u32,
    started: bool,
    chars_per_word: u32,
}

impl SessionScoreState {
    pub fn new(prompt: &str) -> Self {
        let cpw = lipi_core::settings::settings().scoring.chars_per_word;
        Self::with_chars_per_word(prompt, cpw)
    }

    pub fn with_chars_per_word(prompt: &str, chars_per_word: u32) -> Self {
        let prompt: Vec<char> = prompt.chars().collect();
        Self {
            classes: vec![Classification::Pending; prompt.len()],
            prompt,
            cursor: 0,
            correct: 0,
            incorrect: 0,
            errors: 0,
            keystrokes: 0,
            started: false,
            chars_per_word: chars_per_word.max(1),
        }
    }

    /// Score one committed character against `prompt[cursor]` and advance.
    pub fn apply(&mut self, c: char) -> Applied {
        let Some(&expected) = self.prompt.get(self.cursor) else {
            trace!(?c, "input past prompt end ignored");
            return Applied::Ignored;
        };
        self.started = true;
        let applied = if c == expected {
            self.classes[self.cursor] = Classification::Correct;
            self.correct += 1;
            Applied::Correct
        } else {
            self.classes[self.cursor] = Classification::Incorrect;
            self.incorrect += 1;
            self.errors += 1;
            Applied::Incorrect
        };
        self.cursor += 1;
        applied
    }

    /// Step the cursor back by one and reset that position to pending.
    /// No-op at the start of the prompt and once the session is complete.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 || self.is_complete() {
            return false;
        }
        self.cursor -= 1;
        match self.classes[self.cursor] {
            Classification::Correct => self.correct -= 1,
            Classification::Incorrect => self.incorrect -= 1,
            Classification::Pending => {}
        }
        self.classes[self.cursor] = Classification::Pending;
        true
    }

    /// WPM and accuracy from the classification counts at call time.
    pub fn metrics(&self, elapsed_seconds: f64) -> Metrics {
        let wpm = if elapsed_seconds > 0.0 {
            (self.correct as f64 / self.chars_per_word as f64) / (elapsed_seconds / 60.0)
        } else {
            0.0
        };
        let classified = self.correct + self.incorrect;
        let accuracy = if classified == 0 {
            100.0
        } else {
            100.0 * self.correct as f64 / classified as f64
        };
        Metrics { wpm, accuracy }
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.started {
            Phase::InProgress
        } else {
            Phase::Idle
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.prompt.len()
    }

    pub fn note_keystroke(&mut self) {
        self.keystrokes += 1;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> &[char] {
        &self.prompt
    }

    /// Prompt text not yet reached by the cursor.
    pub fn remaining(&self) -> String {
        self.prompt[self.cursor..].iter().collect()
    }

    pub fn classification(&self, index: usize) -> Option<Classification> {
        self.classes.get(index).copied()
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classes
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    /// Incorrect characters ever typed; backspacing does not reduce it.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn keystrokes(&self) -> u32 {
        self.keystrokes
    }
}
