//! Rule catalog: named factories producing reusable validation rules.
//!
//! Rules use the INVERTED predicate convention: [`Rule::is_invalid`] returns
//! `true` when the value FAILS the rule. This is the opposite of the usual
//! "is_valid" framing and is deliberate; the first rule to report invalid
//! wins and supplies the field's validity message.

use std::fmt;

use regex::Regex;

use crate::value::FieldValue;

type RuleFn = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A single failure condition for a field: a predicate plus the message shown
/// when the predicate fires.
pub struct Rule {
    test: Option<RuleFn>,
    pub message: String,
}

impl Rule {
    pub fn new(
        test: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            test: Some(Box::new(test)),
            message: message.into(),
        }
    }

    /// A rule with no predicate. Evaluation skips it with an error log; it
    /// never passes or fails a field on its own. Exists for dynamically
    /// assembled rule lists where a predicate may be absent.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            test: None,
            message: message.into(),
        }
    }

    /// Replace the default message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Run the predicate. `Some(true)` means the value FAILS this rule.
    /// `None` means the rule has no predicate and must be skipped.
    pub fn is_invalid(&self, value: &FieldValue) -> Option<bool> {
        self.test.as_ref().map(|test| test(value))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("has_test", &self.test.is_some())
            .finish()
    }
}

/// Fails when the trimmed text is empty.
pub fn not_empty() -> Rule {
    Rule::new(
        |value| value.as_text().trim().is_empty(),
        "This field cannot be empty.",
    )
}

/// Fails when the value is shorter than `len` characters.
pub fn min_length(len: usize) -> Rule {
    Rule::new(
        move |value| value.char_len() < len,
        format!("Must be at least {len} characters."),
    )
}

/// Fails when the value is longer than `len` characters.
pub fn max_length(len: usize) -> Rule {
    Rule::new(
        move |value| value.char_len() > len,
        format!("Must be no more than {len} characters."),
    )
}

/// Fails when the value does NOT match `re`.
///
/// Takes a pre-compiled [`Regex`] so the factory itself cannot fail.
pub fn pattern(re: Regex) -> Rule {
    Rule::new(
        move |value| !re.is_match(value.as_text()),
        "Value does not match the expected format.",
    )
}

/// Fails when the value is the empty string. Intended for selects whose
/// default placeholder option carries an empty value.
pub fn select_not_default() -> Rule {
    Rule::new(
        |value| value.as_text().is_empty(),
        "Select a valid option.",
    )
}

/// Fails when any file in the collection exceeds `max_bytes`.
pub fn file_size(max_bytes: u64) -> Rule {
    Rule::new(
        move |value| value.files().iter().any(|file| file.size > max_bytes),
        "File is too large.",
    )
}

/// Escape hatch for arbitrary predicates. `test` returns `true` when the
/// value is INVALID, matching the catalog convention.
pub fn custom(test: impl Fn(&FieldValue) -> bool + Send + Sync + 'static) -> Rule {
    Rule::new(test, "Invalid input.")
}
