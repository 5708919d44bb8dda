/// Normalized MSG91 response.
///
/// Which variant you get depends only on the response content type: a body declared as
/// `application/json` is parsed, anything else is returned verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Structured(serde_json::Value),
    /// The body text as sent. It is decoded as UTF-8; invalid byte sequences are replaced
    /// with `U+FFFD`.
    Raw(String),
}

impl Response {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Raw(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    Success,
    Error,
    Other(String),
}

/// The `{"type", "message", "code"}` envelope MSG91 wraps JSON replies in.
///
/// For successful sends `message` carries the request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub kind: ReplyKind,
    pub message: Option<String>,
    pub code: Option<String>,
}
