use serde::Deserialize;

use crate::domain::{ProviderReply, ReplyKind, Response};

#[derive(Debug, Clone, Deserialize)]
struct ReplyJson {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<TransportCode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCode {
    String(String),
    Number(serde_json::Number),
}

impl TransportCode {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn decode_provider_reply(value: &serde_json::Value) -> Option<ProviderReply> {
    let parsed = ReplyJson::deserialize(value).ok()?;
    let kind = match parsed.kind.to_ascii_lowercase().as_str() {
        "success" => ReplyKind::Success,
        "error" => ReplyKind::Error,
        _ => ReplyKind::Other(parsed.kind),
    };
    Some(ProviderReply {
        kind,
        message: parsed.message,
        code: parsed.code.map(TransportCode::into_string),
    })
}

impl Response {
    /// Decode the `{"type", "message", "code"}` envelope of a structured reply.
    ///
    /// Returns `None` for raw replies and for JSON that does not carry a string `type`.
    pub fn provider_reply(&self) -> Option<ProviderReply> {
        self.as_json().and_then(decode_provider_reply)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_reply_carries_request_id() {
        let response = Response::Structured(json!({
            "type": "success",
            "message": "3763646c3058373530393138"
        }));
        let reply = response.provider_reply().unwrap();
        assert_eq!(reply.kind, ReplyKind::Success);
        assert_eq!(reply.message.as_deref(), Some("3763646c3058373530393138"));
        assert_eq!(reply.code, None);
    }

    #[test]
    fn error_reply_code_may_be_number_or_string() {
        let reply = decode_provider_reply(&json!({
            "type": "error",
            "message": "Authentication failure",
            "code": 201
        }))
        .unwrap();
        assert_eq!(reply.kind, ReplyKind::Error);
        assert_eq!(reply.code.as_deref(), Some("201"));

        let reply = decode_provider_reply(&json!({"type": "error", "code": "418"})).unwrap();
        assert_eq!(reply.code.as_deref(), Some("418"));
    }

    #[test]
    fn unknown_shapes_are_not_replies() {
        assert_eq!(decode_provider_reply(&json!({"status": "ok"})), None);
        assert_eq!(Response::Raw("OK".to_owned()).provider_reply(), None);

        let reply = decode_provider_reply(&json!({"type": "queued"})).unwrap();
        assert_eq!(reply.kind, ReplyKind::Other("queued".to_owned()));
    }
}
