//! Issue catalog: the fixed question sets offered for self-assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::QuestionnaireError;

/// Number of questions asked for every issue.
pub const QUESTIONS_PER_ISSUE: usize = 10;

const DEPRESSION_QUESTIONS: [&str; QUESTIONS_PER_ISSUE] = [
    "How often do you feel sad, down, or hopeless?",
    "How often do you have little interest or pleasure in doing things you used to enjoy?",
    "Do you feel fatigued or have little energy most days?",
    "How often do you have trouble falling asleep, staying asleep, or sleeping too much?",
    "How often do you feel bad about yourself or that you are a failure or have let yourself or your family down?",
    "Do you have trouble concentrating on things, such as reading or watching television?",
    "How often do you feel restless or find it hard to sit still?",
    "How often do you think about death or suicide?",
    "Have you experienced significant changes in your appetite or weight without trying?",
    "How often do you feel that your mood affects your ability to function at work, school, or in daily activities?",
];

const ANXIETY_QUESTIONS: [&str; QUESTIONS_PER_ISSUE] = [
    "How often do you feel nervous, anxious, or on edge?",
    "How often do you worry excessively about different things?",
    "How often do you find it hard to control your worrying?",
    "How often do you feel restless or find it hard to relax?",
    "How often do you feel easily fatigued or tired?",
    "How often do you have difficulty concentrating or find your mind going blank?",
    "How often do you experience muscle tension or aches?",
    "How often do you experience physical symptoms such as sweating, trembling, or a rapid heartbeat?",
    "How often do you avoid situations or places because of anxiety or fear?",
    "How often do you feel a sense of impending doom or danger?",
];

const EATING_DISORDER_QUESTIONS: [&str; QUESTIONS_PER_ISSUE] = [
    "How often do you think about food or eating throughout the day?",
    "Do you feel out of control when you eat?",
    "How often do you eat large amounts of food in a short period?",
    "Do you ever make yourself vomit after eating or use laxatives to control your weight?",
    "How often do you skip meals or restrict the amount of food you eat to control your weight?",
    "Do you worry excessively about gaining weight or becoming fat?",
    "How often do you exercise excessively to lose weight or prevent weight gain?",
    "Do you feel guilty, ashamed, or distressed after eating?",
    "Do you feel that your self-worth is strongly influenced by your body weight or shape?",
    "How often do you lie about or hide your eating habits from others?",
];

/// An issue the user can assess themselves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    Depression,
    Anxiety,
    EatingDisorder,
}

impl Issue {
    /// Every issue in catalog order.
    pub const ALL: [Issue; 3] = [Issue::Depression, Issue::Anxiety, Issue::EatingDisorder];

    /// Wire identifier of the issue.
    pub fn key(&self) -> &'static str {
        match self {
            Issue::Depression => "depression",
            Issue::Anxiety => "anxiety",
            Issue::EatingDisorder => "eating_disorder",
        }
    }

    /// Ordered question texts for this issue.
    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            Issue::Depression => &DEPRESSION_QUESTIONS,
            Issue::Anxiety => &ANXIETY_QUESTIONS,
            Issue::EatingDisorder => &EATING_DISORDER_QUESTIONS,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Resolves an optional caller-supplied key, treating absence as invalid.
    pub fn resolve(key: Option<&str>) -> Result<Self, QuestionnaireError> {
        key.ok_or_else(|| QuestionnaireError::InvalidIssue(String::new()))?
            .parse()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Issue {
    type Err = QuestionnaireError;

    /// Keys match exactly; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Issue::ALL
            .into_iter()
            .find(|issue| issue.key() == s)
            .ok_or_else(|| QuestionnaireError::InvalidIssue(s.to_string()))
    }
}
