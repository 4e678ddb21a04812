use crate::error::AuthError;
use crate::model::TokenResult;

/// Blank counts as unset
pub fn get_token(setting: &str, token: Option<&str>) -> Result<TokenResult, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::MissingCredential(setting.to_string()))?;

    Ok(TokenResult {
        access_token: token.to_string(),
    })
}
