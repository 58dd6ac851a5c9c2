//! Validation rules for raw prompt answers. Every parser returns `None` when
//! the answer must be asked again, so out-of-range or malformed input never
//! reaches a handler.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Raised when the input stream ends while a prompt is waiting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input stream closed")]
pub struct InputClosed;

/// True when `err` (or anything it wraps) is [`InputClosed`].
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<InputClosed>())
}

/// Free text. An empty answer falls back to `default`; without one, the
/// question is repeated.
pub fn resolve_text(raw: &str, default: Option<&str>) -> Option<String> {
    let answer = raw.trim();
    if answer.is_empty() {
        default.map(str::to_string)
    } else {
        Some(answer.to_string())
    }
}

/// Any whole number.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// A whole number inside `choices`. An empty answer picks `default`.
pub fn parse_choice(raw: &str, choices: &RangeInclusive<i64>, default: Option<i64>) -> Option<i64> {
    let answer = raw.trim();
    let value = if answer.is_empty() {
        default?
    } else {
        answer.parse().ok()?
    };
    choices.contains(&value).then_some(value)
}

/// Yes/no answer, case-insensitive.
pub fn parse_confirm(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Render the allowed values the way prompts show them: `[1/2/3]`.
pub fn choices_hint(choices: &RangeInclusive<i64>) -> String {
    let values: Vec<String> = choices.clone().map(|value| value.to_string()).collect();
    format!("[{}]", values.join("/"))
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn empty_text_uses_default() {
        assert_eq!(resolve_text("\n", Some("Dune")), Some("Dune".to_string()));
        assert_eq!(resolve_text("   ", Some("")), Some(String::new()));
    }

    #[test]
    fn empty_text_without_default_is_rejected() {
        assert_eq!(resolve_text("\r\n", None), None);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(resolve_text("  Herbert \n", None), Some("Herbert".to_string()));
    }

    #[test]
    fn integer_rejects_words() {
        assert_eq!(parse_integer("12\n"), Some(12));
        assert_eq!(parse_integer("twelve"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn choice_outside_range_is_rejected() {
        let ratings = 1..=5;
        assert_eq!(parse_choice("0", &ratings, None), None);
        assert_eq!(parse_choice("6", &ratings, None), None);
        assert_eq!(parse_choice("5", &ratings, None), Some(5));
    }

    #[test]
    fn empty_choice_uses_default() {
        let menu = 1..=4;
        assert_eq!(parse_choice("", &menu, Some(2)), Some(2));
        assert_eq!(parse_choice("", &menu, None), None);
    }

    #[test]
    fn confirm_accepts_common_spellings() {
        assert_eq!(parse_confirm("Y"), Some(true));
        assert_eq!(parse_confirm("yes\n"), Some(true));
        assert_eq!(parse_confirm("No"), Some(false));
        assert_eq!(parse_confirm("maybe"), None);
    }

    #[test]
    fn choices_hint_lists_every_value() {
        assert_eq!(choices_hint(&(1..=3)), "[1/2/3]");
    }

    #[test]
    fn input_closed_is_found_through_context() {
        let err = Err::<(), _>(InputClosed)
            .context("while reading title")
            .unwrap_err();
        assert!(is_input_closed(&err));
        assert!(!is_input_closed(&anyhow::anyhow!("other")));
    }
}
