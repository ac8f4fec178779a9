//! Reply request shape and validation

use std::str::FromStr;

use serde::Deserialize;
use strum::VariantNames;

use crate::error::ReplyError;

/// Rhetorical mode of the generated reply
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr, strum::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Analytical, value-adding
    Smart,
    /// Viral, interactive
    Engagement,
}

/// Target size class of the generated reply
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr, strum::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Length {
    Short,
    Long,
}

/// Request body as received over the wire
///
/// Every field is optional here so that absent fields can be reported
/// precisely instead of failing JSON decoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReplyRequest {
    #[serde(default)]
    pub post_text: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

/// A validated reply request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    /// Post being replied to, never empty
    pub post_text: String,
    /// Extra guidance from the user, possibly empty
    pub context: String,
    pub strategy: Strategy,
    pub length: Length,
}

/// Check a raw request for required fields and allowed values
pub fn validate(raw: RawReplyRequest) -> Result<ReplyRequest, ReplyError> {
    let post_text = raw
        .post_text
        .filter(|text| !text.is_empty())
        .ok_or(ReplyError::MissingField { field: "postText" })?;

    let strategy = parse_tag::<Strategy>("strategy", raw.strategy)?;
    let length = parse_tag::<Length>("length", raw.length)?;

    Ok(ReplyRequest {
        post_text,
        context: raw.context.unwrap_or_default(),
        strategy,
        length,
    })
}

impl TryFrom<RawReplyRequest> for ReplyRequest {
    type Error = ReplyError;

    fn try_from(raw: RawReplyRequest) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

/// Parse a closed enum tag, telling missing values apart from unknown ones
fn parse_tag<T>(field: &'static str, value: Option<String>) -> Result<T, ReplyError>
where
    T: FromStr + VariantNames,
{
    let value = value
        .filter(|value| !value.is_empty())
        .ok_or(ReplyError::MissingField { field })?;

    T::from_str(&value).map_err(|_| ReplyError::InvalidEnum {
        field,
        value,
        expected: T::VARIANTS.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(post_text: Option<&str>, strategy: Option<&str>, length: Option<&str>) -> RawReplyRequest {
        RawReplyRequest {
            post_text: post_text.map(str::to_owned),
            context: None,
            strategy: strategy.map(str::to_owned),
            length: length.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_every_valid_combination() {
        for strategy in ["smart", "engagement"] {
            for length in ["short", "long"] {
                let request = validate(raw(Some("AI is the future"), Some(strategy), Some(length))).unwrap();
                assert_eq!(request.strategy.as_ref(), strategy);
                assert_eq!(request.length.as_ref(), length);
                assert_eq!(request.context, "");
            }
        }
    }

    #[test]
    fn missing_post_text() {
        let err = validate(raw(None, Some("smart"), Some("short"))).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "postText" }));
    }

    #[test]
    fn empty_post_text_is_missing() {
        let err = validate(raw(Some(""), Some("smart"), Some("short"))).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "postText" }));
    }

    #[test]
    fn whitespace_post_text_is_accepted() {
        let request = validate(raw(Some("   "), Some("smart"), Some("short"))).unwrap();
        assert_eq!(request.post_text, "   ");
    }

    #[test]
    fn post_text_is_kept_verbatim() {
        let request = validate(raw(Some("  AI is the future\n"), Some("smart"), Some("short"))).unwrap();
        assert_eq!(request.post_text, "  AI is the future\n");
    }

    #[test]
    fn missing_or_empty_strategy() {
        let err = validate(raw(Some("post"), None, Some("short"))).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "strategy" }));

        let err = validate(raw(Some("post"), Some(""), Some("short"))).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "strategy" }));
    }

    #[test]
    fn missing_length() {
        let err = validate(raw(Some("post"), Some("smart"), None)).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "length" }));
    }

    #[test]
    fn unknown_strategy_is_invalid() {
        let err = validate(raw(Some("post"), Some("funny"), Some("short"))).unwrap_err();
        let ReplyError::InvalidEnum { field, value, expected } = err else {
            panic!("expected invalid enum");
        };
        assert_eq!(field, "strategy");
        assert_eq!(value, "funny");
        assert_eq!(expected, "smart, engagement");
    }

    #[test]
    fn retired_strategies_are_invalid() {
        for strategy in ["supportive", "question"] {
            let err = validate(raw(Some("post"), Some(strategy), Some("short"))).unwrap_err();
            assert!(matches!(err, ReplyError::InvalidEnum { field: "strategy", .. }));
        }
    }

    #[test]
    fn unknown_length_is_invalid() {
        let err = validate(raw(Some("post"), Some("smart"), Some("medium"))).unwrap_err();
        assert!(matches!(err, ReplyError::InvalidEnum { field: "length", .. }));
    }

    #[test]
    fn tags_are_case_sensitive() {
        let err = validate(raw(Some("post"), Some("Smart"), Some("short"))).unwrap_err();
        assert!(matches!(err, ReplyError::InvalidEnum { field: "strategy", .. }));
    }

    #[test]
    fn post_text_is_checked_before_enums() {
        let err = validate(raw(None, Some("funny"), Some("medium"))).unwrap_err();
        assert!(matches!(err, ReplyError::MissingField { field: "postText" }));
    }

    #[test]
    fn decodes_camel_case_body() {
        let raw: RawReplyRequest = serde_json::from_value(serde_json::json!({
            "postText": "AI is the future",
            "context": "I build robots",
            "strategy": "engagement",
            "length": "long"
        }))
        .unwrap();

        let request = ReplyRequest::try_from(raw).unwrap();
        assert_eq!(request.post_text, "AI is the future");
        assert_eq!(request.context, "I build robots");
        assert_eq!(request.strategy, Strategy::Engagement);
        assert_eq!(request.length, Length::Long);
    }
}
