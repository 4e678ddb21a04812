use crate::error::AuthError;
use crate::model::TokenResult;

pub fn get_token(var: &str) -> Result<TokenResult, AuthError> {
    let token = std::env::var(var).ok();
    super::fixed::get_token(var, token.as_deref())
}
