use crate::domain::AuthKey;

/// Join `host`, `endpoint` and an already-encoded query, then append the auth key.
///
/// Nothing is re-escaped. A single `/` is kept where the host ends with one and the endpoint
/// starts with one.
pub fn build_url(host: &str, endpoint: &str, query: &str, auth: &AuthKey) -> String {
    let endpoint = if host.ends_with('/') {
        endpoint.strip_prefix('/').unwrap_or(endpoint)
    } else {
        endpoint
    };
    format!(
        "{host}{endpoint}?{query}&{field}={key}",
        field = AuthKey::FIELD,
        key = auth.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "http://api.msg91.com/";

    #[test]
    fn appends_auth_key_last() {
        let auth = AuthKey::new("K").unwrap();
        assert_eq!(
            build_url(HOST, "ep", "a=1", &auth),
            "http://api.msg91.com/ep?a=1&authkey=K"
        );
    }

    #[test]
    fn collapses_duplicate_slash() {
        let auth = AuthKey::new("K").unwrap();
        assert_eq!(
            build_url(HOST, "/api/v2/sendsms", "a=1", &auth),
            "http://api.msg91.com/api/v2/sendsms?a=1&authkey=K"
        );
        assert_eq!(
            build_url("http://localhost:1234", "/api/v2/sendsms", "a=1", &auth),
            "http://localhost:1234/api/v2/sendsms?a=1&authkey=K"
        );
    }

    #[test]
    fn query_is_not_re_escaped() {
        let auth = AuthKey::new("K").unwrap();
        assert_eq!(
            build_url(HOST, "ep", "message=a+b%26c", &auth),
            "http://api.msg91.com/ep?message=a+b%26c&authkey=K"
        );
    }
}
