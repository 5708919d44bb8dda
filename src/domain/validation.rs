use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingField { field: &'static str },
    InvalidField { field: &'static str, reason: String },
    TooLong { field: &'static str, max: usize, actual: usize },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
            Self::InvalidField { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "authkey" };
        assert_eq!(err.to_string(), "authkey must not be empty");

        let err = ValidationError::MissingField {
            field: "phone_number",
        };
        assert_eq!(err.to_string(), "missing required field: phone_number");

        let err = ValidationError::InvalidField {
            field: "message",
            reason: "expected a string".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid message: expected a string");

        let err = ValidationError::TooLong {
            field: "sender",
            max: 11,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "sender is too long: 12 characters (max 11)"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
