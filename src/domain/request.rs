use serde_json::Value;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CountryCode, MessageText, MobileNumber, ResponseFormat, Route, ScheduleTime, SenderId,
};

/// How optional query fields without a value are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFieldPolicy {
    /// Emit the key with an empty value (`afterminutes=&schtime=`).
    #[default]
    EmitEmpty,
    /// Leave the key out of the query string.
    Omit,
}

/// Messaging parameters sent with every request.
///
/// Every field has a default; override only what you need:
///
/// ```rust
/// use msg91::{CountryCode, RequestConfig, Route};
///
/// let config = RequestConfig {
///     country: CountryCode::INTERNATIONAL,
///     route: Route::Promotional,
///     ..Default::default()
/// };
/// assert_eq!(config.route.code(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestConfig {
    pub country: CountryCode,
    pub sender: SenderId,
    pub route: Route,
    /// Delay in minutes before the message is sent (`afterminutes`).
    pub after_minutes: Option<u32>,
    pub schedule_time: Option<ScheduleTime>,
    pub response_format: ResponseFormat,
    /// Ask MSG91 to treat the content as encrypted (`encrypt`).
    pub encrypt: Option<bool>,
    pub empty_fields: EmptyFieldPolicy,
}

/// A single mobile number and the message to deliver to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    mobile: MobileNumber,
    message: MessageText,
}

impl Recipient {
    pub fn new(mobile: MobileNumber, message: MessageText) -> Self {
        Self { mobile, message }
    }

    pub fn mobile(&self) -> &MobileNumber {
        &self.mobile
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

/// One message of a bulk send and the numbers it goes to.
///
/// Invariant: at least one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    message: MessageText,
    to: Vec<MobileNumber>,
}

impl BulkEntry {
    /// Input key holding the recipient(s) in the loosely-typed form (`phone_number`).
    pub const PHONE_FIELD: &'static str = "phone_number";

    pub fn new(message: MessageText, to: Vec<MobileNumber>) -> Result<Self, ValidationError> {
        if to.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::PHONE_FIELD,
            });
        }
        Ok(Self { message, to })
    }

    pub fn single(message: MessageText, mobile: MobileNumber) -> Self {
        Self {
            message,
            to: vec![mobile],
        }
    }

    /// Build an entry from `{"message": "...", "phone_number": "..." | ["...", ...]}`.
    ///
    /// Phone values may be JSON strings or integers. A scalar becomes a one-element list.
    /// Keys other than `message` and `phone_number` are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or_else(|| ValidationError::InvalidField {
            field: "sms",
            reason: "expected an object".to_owned(),
        })?;

        let message = match object.get(MessageText::FIELD) {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField {
                    field: MessageText::FIELD,
                });
            }
            Some(Value::String(text)) => MessageText::new(text.as_str())?,
            Some(_) => {
                return Err(ValidationError::InvalidField {
                    field: MessageText::FIELD,
                    reason: "expected a string".to_owned(),
                });
            }
        };

        let to = match object.get(Self::PHONE_FIELD) {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField {
                    field: Self::PHONE_FIELD,
                });
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(phone_from_json)
                .collect::<Result<Vec<_>, _>>()?,
            Some(scalar) => vec![phone_from_json(scalar)?],
        };

        Self::new(message, to)
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn to(&self) -> &[MobileNumber] {
        &self.to
    }
}

/// Build bulk entries from a JSON array of loosely-typed entries.
///
/// Fails on the first malformed entry; an empty array is rejected.
pub fn bulk_entries_from_json(value: &Value) -> Result<Vec<BulkEntry>, ValidationError> {
    let items = value.as_array().ok_or_else(|| ValidationError::InvalidField {
        field: "sms",
        reason: "expected an array".to_owned(),
    })?;
    if items.is_empty() {
        return Err(ValidationError::Empty { field: "sms" });
    }
    items.iter().map(BulkEntry::from_json).collect()
}

fn phone_from_json(value: &Value) -> Result<MobileNumber, ValidationError> {
    match value {
        Value::String(raw) => MobileNumber::new(raw.as_str()),
        Value::Number(number) if number.is_u64() => MobileNumber::new(number.to_string()),
        _ => Err(ValidationError::InvalidField {
            field: BulkEntry::PHONE_FIELD,
            reason: format!("expected a string or unsigned integer, got {value}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalar_phone_becomes_single_element_list() {
        let entry = BulkEntry::from_json(&json!({"message": "hi", "phone_number": "111"})).unwrap();
        assert_eq!(entry.message().as_str(), "hi");
        assert_eq!(entry.to(), &[MobileNumber::new("111").unwrap()]);
    }

    #[test]
    fn phone_list_is_passed_through_in_order() {
        let entry =
            BulkEntry::from_json(&json!({"message": "yo", "phone_number": ["222", 333]})).unwrap();
        let raw = entry.to().iter().map(MobileNumber::raw).collect::<Vec<_>>();
        assert_eq!(raw, vec!["222", "333"]);
    }

    #[test]
    fn missing_keys_are_reported() {
        let err = BulkEntry::from_json(&json!({"phone_number": "111"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "message" });

        let err = BulkEntry::from_json(&json!({"message": "hi", "to": "111"})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "phone_number"
            }
        );
    }

    #[test]
    fn empty_phone_list_is_rejected() {
        let err = BulkEntry::from_json(&json!({"message": "hi", "phone_number": []})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "phone_number"
            }
        );
    }

    #[test]
    fn non_scalar_phone_is_rejected() {
        let err = BulkEntry::from_json(&json!({"message": "hi", "phone_number": {"n": 1}}))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidField {
                field: "phone_number",
                ..
            }
        ));
    }

    #[test]
    fn bulk_list_requires_entries() {
        assert_eq!(
            bulk_entries_from_json(&json!([])).unwrap_err(),
            ValidationError::Empty { field: "sms" }
        );
        assert!(bulk_entries_from_json(&json!({"message": "hi"})).is_err());

        let entries = bulk_entries_from_json(&json!([
            {"message": "hi", "phone_number": "111"},
            {"message": "yo", "phone_number": ["222", "333"]},
        ]))
        .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn default_config_matches_provider_defaults() {
        let config = RequestConfig::default();
        assert_eq!(config.country, CountryCode::INDIA);
        assert_eq!(config.sender.as_str(), "HireAJackal");
        assert_eq!(config.route, Route::Transactional);
        assert_eq!(config.response_format, ResponseFormat::Json);
        assert_eq!(config.after_minutes, None);
        assert_eq!(config.schedule_time, None);
        assert_eq!(config.encrypt, None);
        assert_eq!(config.empty_fields, EmptyFieldPolicy::EmitEmpty);
    }
}
