//! Scoring of submitted answers into a severity band.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answer_scale::weight_or_zero;
use super::Issue;
use crate::domain::foundation::{Nickname, ValidationError};

/// Raw answer tokens as submitted, split on commas.
///
/// Tokens are kept verbatim; interpretation happens when scoring so that
/// unrecognized entries stay countable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    tokens: Vec<String>,
}

impl AnswerSheet {
    /// Splits a comma-joined answer list. An empty string yields one
    /// empty token, which scores zero.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split(',').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Sum of all token weights; unrecognized tokens add zero.
    pub fn total_score(&self) -> u32 {
        self.tokens.iter().map(|t| weight_or_zero(t)).sum()
    }

    /// Number of tokens that did not match any answer option.
    pub fn unrecognized_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| super::AnswerOption::from_token(t).is_none())
            .count()
    }

    /// Requires one answer per question of `issue`.
    pub fn ensure_answers_every_question(&self, issue: Issue) -> Result<(), ValidationError> {
        let expected = issue.question_count();
        if self.len() != expected {
            return Err(ValidationError::count_mismatch("answers", expected, self.len()));
        }
        Ok(())
    }
}

/// Severity band derived from a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    /// Highest score still banded as mild.
    pub const MILD_MAX: u32 = 12;
    /// Highest score still banded as moderate.
    pub const MODERATE_MAX: u32 = 24;

    pub fn from_score(score: u32) -> Self {
        match score {
            s if s <= Self::MILD_MAX => SeverityBand::Mild,
            s if s <= Self::MODERATE_MAX => SeverityBand::Moderate,
            _ => SeverityBand::Severe,
        }
    }

    /// Feedback addressed to the user. An empty nickname drops the salutation.
    pub fn message(&self, nickname: &Nickname) -> String {
        match (self, nickname.is_empty()) {
            (SeverityBand::Mild, false) => format!(
                "Great job, {}! Your score suggests you are experiencing mild feelings related to this issue.",
                nickname
            ),
            (SeverityBand::Mild, true) => {
                "Great job! Your score suggests you are experiencing mild feelings related to this issue.".to_string()
            }
            (SeverityBand::Moderate, false) => format!(
                "{}, your score indicates moderate feelings regarding this issue. It might be helpful to explore these feelings further.",
                nickname
            ),
            (SeverityBand::Moderate, true) => {
                "Your score indicates moderate feelings regarding this issue. It might be helpful to explore these feelings further.".to_string()
            }
            (SeverityBand::Severe, false) => format!(
                "{}, your score suggests that you're experiencing severe feelings related to this issue. It’s important to seek support.",
                nickname
            ),
            (SeverityBand::Severe, true) => {
                "Your score suggests that you're experiencing severe feelings related to this issue. It’s important to seek support.".to_string()
            }
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Severe => "severe",
        };
        f.write_str(s)
    }
}

/// Outcome of scoring one answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub issue: Issue,
    pub total_score: u32,
    pub severity: SeverityBand,
    pub message: String,
}

impl Assessment {
    pub fn score(issue: Issue, nickname: &Nickname, sheet: &AnswerSheet) -> Self {
        let total_score = sheet.total_score();
        let severity = SeverityBand::from_score(total_score);
        Self {
            issue,
            total_score,
            severity,
            message: severity.message(nickname),
        }
    }
}
