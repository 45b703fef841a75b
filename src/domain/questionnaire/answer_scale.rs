//! Five-point answer scale (A = Never .. E = Always).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single multiple-choice answer and its severity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AnswerOption {
    Never = 0,
    Rarely = 1,
    Sometimes = 2,
    Often = 3,
    Always = 4,
}

impl AnswerOption {
    /// Every option in scale order.
    pub const ALL: [AnswerOption; 5] = [
        AnswerOption::Never,
        AnswerOption::Rarely,
        AnswerOption::Sometimes,
        AnswerOption::Often,
        AnswerOption::Always,
    ];

    /// Letter code used when submitting answers.
    pub fn code(&self) -> char {
        match self {
            AnswerOption::Never => 'A',
            AnswerOption::Rarely => 'B',
            AnswerOption::Sometimes => 'C',
            AnswerOption::Often => 'D',
            AnswerOption::Always => 'E',
        }
    }

    /// Severity weight contributed to the total score.
    pub fn weight(&self) -> u32 {
        *self as u32
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerOption::Never => "Never",
            AnswerOption::Rarely => "Rarely",
            AnswerOption::Sometimes => "Sometimes",
            AnswerOption::Often => "Often",
            AnswerOption::Always => "Always",
        }
    }

    /// Looks up a submitted token. Surrounding whitespace is ignored and
    /// letters match case-insensitively; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.trim().chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let letter = letter.to_ascii_uppercase();
        AnswerOption::ALL.into_iter().find(|opt| opt.code() == letter)
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.label())
    }
}

/// Weight of a submitted token, defaulting to zero for anything the scale
/// does not recognize (empty, malformed, or out-of-range letters).
pub fn weight_or_zero(token: &str) -> u32 {
    AnswerOption::from_token(token)
        .map(|option| option.weight())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_run_from_zero_to_four() {
        let weights: Vec<u32> = AnswerOption::ALL.iter().map(|o| o.weight()).collect();
        assert_eq!(weights, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn codes_run_from_a_to_e() {
        let codes: String = AnswerOption::ALL.iter().map(|o| o.code()).collect();
        assert_eq!(codes, "ABCDE");
    }

    #[test]
    fn tokens_match_case_insensitively() {
        assert_eq!(AnswerOption::from_token("c"), Some(AnswerOption::Sometimes));
        assert_eq!(AnswerOption::from_token("C"), Some(AnswerOption::Sometimes));
        assert_eq!(AnswerOption::from_token(" e "), Some(AnswerOption::Always));
    }

    #[test]
    fn unrecognized_tokens_weigh_zero() {
        for token in ["", " ", "Z", "AB", "1", "never", "é"] {
            assert_eq!(weight_or_zero(token), 0, "token {:?}", token);
        }
    }

    #[test]
    fn recognized_tokens_weigh_their_option() {
        assert_eq!(weight_or_zero("a"), 0);
        assert_eq!(weight_or_zero("B"), 1);
        assert_eq!(weight_or_zero("d"), 3);
        assert_eq!(weight_or_zero("E"), 4);
    }

    #[test]
    fn display_shows_code_and_label() {
        assert_eq!(AnswerOption::Often.to_string(), "D: Often");
    }
}
