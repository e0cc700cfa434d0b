//! Request payload validation, raised before any store round-trip.

use crate::error::AppError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Optional leading minus sign followed by digits only.
static SIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("hard-coded pattern"));

/// A complete comment payload: both fields present and non-empty.
#[derive(Debug)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

pub fn validate_new_comment(
    username: Option<&str>,
    body: Option<&str>,
) -> Result<NewComment, AppError> {
    match (username, body) {
        (Some(username), Some(body)) if !username.is_empty() && !body.is_empty() => {
            Ok(NewComment {
                username: username.to_string(),
                body: body.to_string(),
            })
        }
        _ => Err(AppError::BadRequest("Incomplete comment".into())),
    }
}

/// Accepts JSON numbers and integer-formatted strings; rejects anything
/// missing, fractional, non-numeric, zero, or outside i32 range.
pub fn parse_inc_votes(raw: Option<&Value>) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest("Invalid patch object".into());
    let text = match raw {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => return Err(invalid()),
    };
    if !SIGNED_INTEGER.is_match(&text) {
        return Err(invalid());
    }
    let inc: i32 = text.parse().map_err(|_| invalid())?;
    if inc == 0 {
        return Err(invalid());
    }
    Ok(inc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1), 1)]
    #[case(json!(-10), -10)]
    #[case(json!("4"), 4)]
    #[case(json!("-7"), -7)]
    fn integer_increments_are_accepted(#[case] raw: serde_json::Value, #[case] expected: i32) {
        assert_eq!(parse_inc_votes(Some(&raw)).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("one"))]
    #[case(json!(1.5))]
    #[case(json!("1.5"))]
    #[case(json!(0))]
    #[case(json!("0"))]
    #[case(json!(true))]
    #[case(json!(null))]
    #[case(json!("99999999999999999999"))]
    fn malformed_increments_are_rejected(#[case] raw: serde_json::Value) {
        let err = parse_inc_votes(Some(&raw)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid patch object");
    }

    #[test]
    fn missing_increment_is_rejected() {
        let err = parse_inc_votes(None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid patch object");
    }

    #[test]
    fn complete_comment_passes() {
        let c = validate_new_comment(Some("mallionaire"), Some("Very good game!")).unwrap();
        assert_eq!(c.username, "mallionaire");
        assert_eq!(c.body, "Very good game!");
    }

    #[rstest]
    #[case(None, Some("text"))]
    #[case(Some("mallionaire"), None)]
    #[case(Some(""), Some("text"))]
    #[case(Some("mallionaire"), Some(""))]
    fn incomplete_comment_is_rejected(#[case] username: Option<&str>, #[case] body: Option<&str>) {
        let err = validate_new_comment(username, body).unwrap_err();
        assert_eq!(err.to_string(), "Incomplete comment");
    }
}
