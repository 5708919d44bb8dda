use crate::domain::Response;

const JSON_CONTENT_TYPE: &str = "application/json";

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
}

/// Classify a completed HTTP exchange by its content type.
///
/// Only the content type decides whether the body is parsed; a JSON-looking body served as
/// `text/plain` stays raw, and an empty body under `application/json` is a parse error.
pub fn normalize_response(
    content_type: Option<&str>,
    body: String,
) -> Result<Response, serde_json::Error> {
    if is_json_content_type(content_type) {
        return serde_json::from_str(&body).map(Response::Structured);
    }
    Ok(Response::Raw(body))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_content_type_is_parsed() {
        let response = normalize_response(
            Some("application/json; charset=utf-8"),
            r#"{"type":"success"}"#.to_owned(),
        )
        .unwrap();
        assert_eq!(response, Response::Structured(json!({"type": "success"})));
    }

    #[test]
    fn other_content_types_stay_raw() {
        let response =
            normalize_response(Some("text/plain"), r#"{"type":"success"}"#.to_owned()).unwrap();
        assert_eq!(response, Response::Raw(r#"{"type":"success"}"#.to_owned()));

        let response = normalize_response(None, String::new()).unwrap();
        assert_eq!(response, Response::Raw(String::new()));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(normalize_response(Some("application/json"), "{ nope".to_owned()).is_err());
        assert!(normalize_response(Some("Application/JSON"), String::new()).is_err());
    }
}
