//! Character counter shown under the message field

use serde::Serialize;
use std::fmt;

use crate::models::validation::{text_len, MESSAGE_MAX_LEN};

/// Live character count of an input, measured on the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterCount {
    pub current: usize,
    pub max: usize,
}

impl CharacterCount {
    pub fn of(text: &str, max: usize) -> Self {
        Self {
            current: text_len(text),
            max,
        }
    }

    /// Count against the message length limit
    pub fn of_message(text: &str) -> Self {
        Self::of(text, MESSAGE_MAX_LEN)
    }

    pub fn is_over_limit(&self) -> bool {
        self.current > self.max
    }

    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.current)
    }
}

impl fmt::Display for CharacterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} characters", self.current, self.max)
    }
}
