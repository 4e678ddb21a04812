use mapcheck_auth::{inject_token, AuthError, HttpRequestParts, InjectTarget, TokenResult};

fn token(value: &str) -> TokenResult {
    TokenResult {
        access_token: value.into(),
    }
}

#[test]
fn test_inject_default_is_raw_authorization() {
    let mut request = HttpRequestParts::default();

    inject_token(&mut request, &token("abc123"), &InjectTarget::default()).unwrap();

    assert_eq!(request.headers.get("Authorization").unwrap(), "abc123");
    assert!(request.query.is_empty());
}

#[test]
fn test_inject_bearer_header() {
    let mut request = HttpRequestParts::default();

    let inject = InjectTarget::Header {
        header_name: "Authorization".into(),
        format: "Bearer ${access_token}".into(),
    };

    inject_token(&mut request, &token("abc123"), &inject).unwrap();

    assert_eq!(
        request.headers.get("Authorization").unwrap(),
        "Bearer abc123"
    );
}

#[test]
fn test_inject_token_query() {
    let mut request = HttpRequestParts::default();

    let inject = InjectTarget::Query {
        key: "key".into(),
        format: "${access_token}".into(),
    };

    inject_token(&mut request, &token("xyz789"), &inject).unwrap();

    assert_eq!(request.query.get("key").unwrap(), "xyz789");
    assert!(request.headers.is_empty());
}

#[test]
fn test_inject_empty_header_name_fails() {
    let mut request = HttpRequestParts::default();

    let inject = InjectTarget::Header {
        header_name: " ".into(),
        format: "${access_token}".into(),
    };

    let err = inject_token(&mut request, &token("abc"), &inject).unwrap_err();
    assert!(matches!(err, AuthError::InjectError(_)));
}
