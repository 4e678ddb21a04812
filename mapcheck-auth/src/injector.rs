use crate::error::AuthError;
use crate::model::{InjectTarget, TokenResult, TOKEN_PLACEHOLDER};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct HttpRequestParts {
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

pub fn inject_token(
    request: &mut HttpRequestParts,
    token: &TokenResult,
    inject: &InjectTarget,
) -> Result<(), AuthError> {
    let formatted = |tpl: &str| tpl.replace(TOKEN_PLACEHOLDER, &token.access_token);

    match inject {
        InjectTarget::Header { header_name, format } => {
            if header_name.trim().is_empty() {
                return Err(AuthError::InjectError("empty header name".into()));
            }
            request.headers.insert(header_name.clone(), formatted(format));
        }
        InjectTarget::Query { key, format } => {
            if key.trim().is_empty() {
                return Err(AuthError::InjectError("empty query key".into()));
            }
            request.query.insert(key.clone(), formatted(format));
        }
    }

    Ok(())
}
