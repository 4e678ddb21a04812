use mapcheck_auth::{resolve_token, AuthError, CredentialSource};

#[test]
fn test_fixed_token() {
    let source = CredentialSource::fixed("LYTICS_AUTH_TOKEN", Some("abc123".into()));
    let token = resolve_token(&source).unwrap();
    assert_eq!(token.access_token, "abc123");
}

#[test]
fn test_fixed_token_is_trimmed() {
    let source = CredentialSource::fixed("LYTICS_AUTH_TOKEN", Some("  abc123\n".into()));
    assert_eq!(resolve_token(&source).unwrap().access_token, "abc123");
}

#[test]
fn test_missing_fixed_token_names_setting() {
    let source = CredentialSource::fixed("LYTICS_AUTH_TOKEN", None);
    let err = resolve_token(&source).unwrap_err();

    assert_eq!(err, AuthError::MissingCredential("LYTICS_AUTH_TOKEN".into()));
    assert!(err.to_string().contains("LYTICS_AUTH_TOKEN"));
}

#[test]
fn test_blank_fixed_token_is_missing() {
    let source = CredentialSource::fixed("LYTICS_AUTH_TOKEN", Some("   ".into()));
    assert!(matches!(
        resolve_token(&source),
        Err(AuthError::MissingCredential(_))
    ));
}

#[test]
fn test_env_token_is_read_on_every_call() {
    let var = "MAPCHECK_AUTH_RESOLVER_TEST_TOKEN";
    let source = CredentialSource::env(var);

    std::env::remove_var(var);
    assert_eq!(
        resolve_token(&source).unwrap_err(),
        AuthError::MissingCredential(var.into())
    );

    std::env::set_var(var, "from-env");
    assert_eq!(resolve_token(&source).unwrap().access_token, "from-env");

    std::env::set_var(var, "rotated");
    assert_eq!(resolve_token(&source).unwrap().access_token, "rotated");

    std::env::remove_var(var);
}

#[test]
fn test_setting_name() {
    assert_eq!(CredentialSource::env("A").setting(), "A");
    assert_eq!(CredentialSource::fixed("B", None).setting(), "B");
}
