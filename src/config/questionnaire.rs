//! Questionnaire behaviour configuration

use serde::Deserialize;

/// Tunables for scoring and random selection.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct QuestionnaireConfig {
    /// Reject submissions whose answer count differs from the question count.
    #[serde(default)]
    pub strict_answer_count: bool,

    /// Seed for reply/suggestion selection. Unset means thread-local entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_config_defaults() {
        let config = QuestionnaireConfig::default();
        assert!(!config.strict_answer_count);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_questionnaire_config_deserialization() {
        let json = r#"{ "strict_answer_count": true, "random_seed": 99 }"#;
        let config: QuestionnaireConfig = serde_json::from_str(json).unwrap();
        assert!(config.strict_answer_count);
        assert_eq!(config.random_seed, Some(99));
    }
}
