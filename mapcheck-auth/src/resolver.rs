use crate::{error::AuthError, model::{CredentialSource, TokenResult}};
use crate::provider;

pub fn resolve_token(source: &CredentialSource) -> Result<TokenResult, AuthError> {
    match source {
        CredentialSource::Env { var } => provider::env::get_token(var),
        CredentialSource::Static { setting, token } => {
            provider::fixed::get_token(setting, token.as_deref())
        }
    }
}
