//! Value types shared by the evaluator, the generator and presenters.

use std::fmt;

use secrecy::SecretString;

/// Highest possible score: one point per satisfied rule.
pub const MAX_SCORE: u8 = 5;

/// A composition rule checked against every password.
///
/// Variants are declared in the order their diagnostics are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    Digit,
    Uppercase,
    Lowercase,
    SpecialChar,
}

impl Rule {
    /// All rules, in reporting order.
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::Digit,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::SpecialChar,
    ];

    /// Diagnostic shown when the rule is not met.
    pub fn message(self, min_length: usize) -> String {
        match self {
            Rule::MinLength => {
                format!("Password should be at least {} characters long.", min_length)
            }
            Rule::Digit => "Password should contain at least one digit.".to_string(),
            Rule::Uppercase => {
                "Password should contain at least one uppercase letter.".to_string()
            }
            Rule::Lowercase => {
                "Password should contain at least one lowercase letter.".to_string()
            }
            Rule::SpecialChar => {
                "Password should contain at least one special character.".to_string()
            }
        }
    }
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    score: u8,
    min_length: usize,
    failed: Vec<Rule>,
    errors: Vec<String>,
}

impl StrengthReport {
    /// Builds a report from the rules that failed, in reporting order.
    pub(crate) fn new(min_length: usize, failed: Vec<Rule>) -> Self {
        let errors = failed.iter().map(|r| r.message(min_length)).collect();
        let score = MAX_SCORE - failed.len() as u8;
        Self {
            score,
            min_length,
            failed,
            errors,
        }
    }

    /// Number of satisfied rules, 0 to [`MAX_SCORE`].
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn is_strong(&self) -> bool {
        self.score == MAX_SCORE
    }

    /// One message per failed rule, length first and special characters last.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn failed_rules(&self) -> &[Rule] {
        &self.failed
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Score scaled to 0..=100 for progress bars.
    pub fn percent(&self) -> u8 {
        self.score * 20
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }
}

/// Ordinal strength classification derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl From<u8> for StrengthLabel {
    fn from(score: u8) -> Self {
        StrengthLabel::from_score(score)
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A batch of generated passwords. Entries are independent; duplicates are possible.
#[derive(Debug)]
pub struct SuggestionBatch {
    passwords: Vec<SecretString>,
}

impl SuggestionBatch {
    pub(crate) fn new(passwords: Vec<SecretString>) -> Self {
        Self { passwords }
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretString> {
        self.passwords.iter()
    }

    pub fn into_vec(self) -> Vec<SecretString> {
        self.passwords
    }
}

impl<'a> IntoIterator for &'a SuggestionBatch {
    type Item = &'a SecretString;
    type IntoIter = std::slice::Iter<'a, SecretString>;

    fn into_iter(self) -> Self::IntoIter {
        self.passwords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_report_all_failed() {
        let report = StrengthReport::new(8, Rule::ALL.to_vec());
        assert_eq!(report.score(), 0);
        assert!(!report.is_strong());
        assert_eq!(report.errors().len(), 5);
        assert_eq!(report.percent(), 0);
        assert_eq!(report.label(), StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_report_none_failed() {
        let report = StrengthReport::new(8, Vec::new());
        assert_eq!(report.score(), MAX_SCORE);
        assert!(report.is_strong());
        assert!(report.errors().is_empty());
        assert_eq!(report.percent(), 100);
        assert_eq!(report.label(), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_length_message_uses_min_length() {
        assert_eq!(
            Rule::MinLength.message(12),
            "Password should be at least 12 characters long."
        );
    }

    #[test]
    fn test_label_table() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_monotonic() {
        for score in 0..MAX_SCORE {
            assert!(StrengthLabel::from(score) <= StrengthLabel::from(score + 1));
        }
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_batch_iteration_order() {
        let batch = SuggestionBatch::new(vec![
            SecretString::new("first".to_string().into()),
            SecretString::new("second".to_string().into()),
        ]);
        assert_eq!(batch.len(), 2);
        let exposed: Vec<&str> = batch.iter().map(|p| p.expose_secret()).collect();
        assert_eq!(exposed, vec!["first", "second"]);
    }
}
