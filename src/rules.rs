//! Composable per-field validation rules
//!
//! A `FieldRule` is an ordered list of checks run against the field's
//! current `serde_json::Value`; the first failing check's message wins.
//! Rules are supplied by the schema author, never derived.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Predicate for [`Rule::Custom`]
pub type RuleCheck = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// One validation check with its failure message
#[derive(Clone)]
pub enum Rule {
    /// String value must be non-empty
    NonEmpty { message: String },
    /// String value must have at least `min` characters
    MinLength { min: usize, message: String },
    /// String value must have at most `max` characters
    MaxLength { max: usize, message: String },
    /// String value must look like an email address
    Email { message: String },
    /// Value must contain exactly `count` ASCII digits, ignoring
    /// everything else (mask punctuation, spaces)
    Digits { count: usize, message: String },
    /// String value must be one of the allowed values
    OneOf { allowed: Vec<String>, message: String },
    /// Boolean value must be true
    Accepted { message: String },
    /// Caller-supplied predicate
    Custom { check: RuleCheck, message: String },
}

impl Rule {
    fn message(&self) -> &str {
        match self {
            Rule::NonEmpty { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Email { message }
            | Rule::Digits { message, .. }
            | Rule::OneOf { message, .. }
            | Rule::Accepted { message }
            | Rule::Custom { message, .. } => message,
        }
    }

    fn passes(&self, value: &Value) -> bool {
        match self {
            Rule::NonEmpty { .. } => !as_str(value).is_empty(),
            Rule::MinLength { min, .. } => as_str(value).chars().count() >= *min,
            Rule::MaxLength { max, .. } => as_str(value).chars().count() <= *max,
            Rule::Email { .. } => looks_like_email(as_str(value)),
            Rule::Digits { count, .. } => {
                as_str(value).chars().filter(|c| c.is_ascii_digit()).count() == *count
            }
            Rule::OneOf { allowed, .. } => allowed.iter().any(|a| a == as_str(value)),
            Rule::Accepted { .. } => value.as_bool().unwrap_or(false),
            Rule::Custom { check, .. } => check(value),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NonEmpty { .. } => write!(f, "NonEmpty"),
            Rule::MinLength { min, .. } => write!(f, "MinLength({min})"),
            Rule::MaxLength { max, .. } => write!(f, "MaxLength({max})"),
            Rule::Email { .. } => write!(f, "Email"),
            Rule::Digits { count, .. } => write!(f, "Digits({count})"),
            Rule::OneOf { allowed, .. } => write!(f, "OneOf({allowed:?})"),
            Rule::Accepted { .. } => write!(f, "Accepted"),
            Rule::Custom { .. } => write!(f, "Custom"),
        }
    }
}

/// Missing values validate as the field's empty representation: rules
/// that read a string see `""`, rules that read a bool see `false`.
fn as_str(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}

/// Structural check, deliberately loose: non-empty local part, one `@`,
/// a domain with a dot that is neither first nor last.
fn looks_like_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(idx) => idx > 0 && idx < domain.len() - 1 && !domain.ends_with('.'),
        None => false,
    }
}

// ============================================================================
// Field Rule
// ============================================================================

/// Composable validator for one field. An empty rule accepts anything.
#[derive(Clone, Debug, Default)]
pub struct FieldRule {
    rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.and(Rule::NonEmpty {
            message: message.into(),
        })
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.and(Rule::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.and(Rule::MaxLength {
            max,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.and(Rule::Email {
            message: message.into(),
        })
    }

    pub fn digits(self, count: usize, message: impl Into<String>) -> Self {
        self.and(Rule::Digits {
            count,
            message: message.into(),
        })
    }

    pub fn one_of(self, allowed: Vec<String>, message: impl Into<String>) -> Self {
        self.and(Rule::OneOf {
            allowed,
            message: message.into(),
        })
    }

    pub fn accepted(self, message: impl Into<String>) -> Self {
        self.and(Rule::Accepted {
            message: message.into(),
        })
    }

    pub fn custom<F>(self, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.and(Rule::Custom {
            check: Arc::new(check),
            message: message.into(),
        })
    }

    fn and(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Run all checks in order; the first failure's message is returned.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        for rule in &self.rules {
            if !rule.passes(value) {
                return Err(rule.message().to_string());
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_rule_accepts_anything() {
        let rule = FieldRule::new();
        assert!(rule.check(&json!("")).is_ok());
        assert!(rule.check(&json!(false)).is_ok());
        assert!(rule.check(&Value::Null).is_ok());
    }

    #[test]
    fn test_non_empty() {
        let rule = FieldRule::new().non_empty("required");
        assert_eq!(rule.check(&json!("")), Err("required".to_string()));
        assert_eq!(rule.check(&Value::Null), Err("required".to_string()));
        assert!(rule.check(&json!("hi")).is_ok());
    }

    #[test]
    fn test_min_and_max_length() {
        let rule = FieldRule::new()
            .min_length(2, "too short")
            .max_length(4, "too long");
        assert_eq!(rule.check(&json!("a")), Err("too short".to_string()));
        assert!(rule.check(&json!("ab")).is_ok());
        assert!(rule.check(&json!("abcd")).is_ok());
        assert_eq!(rule.check(&json!("abcde")), Err("too long".to_string()));
    }

    #[test]
    fn test_first_failure_wins() {
        let rule = FieldRule::new()
            .non_empty("required")
            .min_length(3, "too short");
        assert_eq!(rule.check(&json!("")), Err("required".to_string()));
        assert_eq!(rule.check(&json!("ab")), Err("too short".to_string()));
    }

    #[test]
    fn test_email() {
        let rule = FieldRule::new().email("bad email");
        assert!(rule.check(&json!("a@b.co")).is_ok());
        assert!(rule.check(&json!("first.last@example.org")).is_ok());
        for bad in ["", "plain", "@b.co", "a@b", "a@b.", "a@.co", "a@b@c.co"] {
            assert_eq!(rule.check(&json!(bad)), Err("bad email".to_string()), "{bad}");
        }
    }

    #[test]
    fn test_digits_ignores_punctuation() {
        let rule = FieldRule::new().digits(10, "bad phone");
        assert!(rule.check(&json!("5551234567")).is_ok());
        assert!(rule.check(&json!("+1 (555) - 123 - 4567")).is_err());
        assert!(rule.check(&json!("(555) 123-4567")).is_ok());
        assert_eq!(rule.check(&json!("555")), Err("bad phone".to_string()));
    }

    #[test]
    fn test_one_of() {
        let rule = FieldRule::new().one_of(
            vec!["male".to_string(), "female".to_string()],
            "pick one",
        );
        assert!(rule.check(&json!("male")).is_ok());
        assert_eq!(rule.check(&json!("")), Err("pick one".to_string()));
        assert_eq!(rule.check(&json!("other")), Err("pick one".to_string()));
    }

    #[test]
    fn test_accepted() {
        let rule = FieldRule::new().accepted("must accept");
        assert!(rule.check(&json!(true)).is_ok());
        assert_eq!(rule.check(&json!(false)), Err("must accept".to_string()));
        assert_eq!(rule.check(&Value::Null), Err("must accept".to_string()));
    }

    #[test]
    fn test_custom() {
        let rule = FieldRule::new().custom(
            |v| v.as_str().map(|s| s.starts_with("ok")).unwrap_or(false),
            "nope",
        );
        assert!(rule.check(&json!("okay")).is_ok());
        assert_eq!(rule.check(&json!("not")), Err("nope".to_string()));
    }
}
