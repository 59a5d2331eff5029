use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest value a single answer can take.
pub const MAX_SCORE_PER_ITEM: u8 = 5;

/// Lowest value a single answer can take. Zero is reserved for "unanswered".
pub const MIN_SCORE_PER_ITEM: u8 = 1;

/// A validated answer on the 1-5 frequency scale
/// (1 = almost never, 3 = occasionally, 5 = often or severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_SCORE_PER_ITEM && value <= MAX_SCORE_PER_ITEM {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every selectable score, lowest first.
    pub const fn ordered() -> [Self; 5] {
        [Self(1), Self(2), Self(3), Self(4), Self(5)]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ResponseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value).ok_or_else(|| ResponseError::InvalidScore(value.to_string()))
    }
}

impl TryFrom<i32> for Score {
    type Error = ResponseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Score::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Score {
    type Error = ResponseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Score::new)
            .ok_or_else(|| ResponseError::InvalidScore(value.to_string()))
    }
}

impl TryFrom<f64> for Score {
    type Error = ResponseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let in_range = value >= f64::from(MIN_SCORE_PER_ITEM) && value <= f64::from(MAX_SCORE_PER_ITEM);
        if !in_range || value.fract() != 0.0 {
            return Err(ResponseError::InvalidScore(value.to_string()));
        }

        Score::try_from(value as u8)
    }
}

impl TryFrom<&str> for Score {
    type Error = ResponseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Score {
    type Err = ResponseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Score::new)
            .ok_or_else(|| ResponseError::InvalidScore(raw.to_string()))
    }
}

/// Identifies one question by its category key and zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionRef {
    pub category_key: String,
    pub index: usize,
}

impl QuestionRef {
    pub fn new(category_key: impl Into<String>, index: usize) -> Self {
        Self {
            category_key: category_key.into(),
            index,
        }
    }
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category_key, self.index)
    }
}

/// Rejections raised at the response store boundary. A rejected call never
/// changes stored answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("score '{0}' is not an integer between 1 and 5")]
    InvalidScore(String),
    #[error("question {0} is not declared in the catalog")]
    UnknownQuestion(QuestionRef),
}
