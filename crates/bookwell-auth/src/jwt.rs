//! JWT verification.
//!
//! Tokens are HS256-signed with [`JwtConfig::secret`]. Verification failures
//! are reported with the raw phrases the error filter knows how to translate
//! (`jwt expired`, `invalid signature`, `jwt malformed`).
//!
//! # Example
//!
//! ```ignore
//! use bookwell_auth::verify_token;
//! use bookwell_config::JwtConfig;
//!
//! let claims = verify_token(&token, &jwt_config)?;
//! println!("User ID: {}", claims.sub);
//! ```

use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use thiserror::Error;

use bookwell_config::JwtConfig;
use bookwell_core::Failure;

use crate::claims::Claims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("jwt expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("jwt malformed")]
    Malformed,
}

impl TokenError {
    /// 401 failure carrying the raw token phrase.
    pub fn into_failure(self) -> Failure {
        Failure::unauthorized(self.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// - [`TokenError::Expired`] when `exp` is in the past
/// - [`TokenError::InvalidSignature`] when the token was signed with another key
/// - [`TokenError::Malformed`] for anything else (bad encoding, unknown role, ...)
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenError::from)
}

/// Signs arbitrary claims. Test helper; the service never issues tokens.
#[cfg(any(test, feature = "test-utils"))]
pub fn sign_claims(
    claims: &Claims,
    jwt_config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
}

/// Mints a valid access token for a principal. Test helper.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_access_token(
    principal: &crate::principal::Principal,
    jwt_config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: principal.user_id.clone(),
        role: principal.role,
        is_global_admin: principal.is_global_admin,
        tenant: principal.tenant.clone(),
        exp: now + jwt_config.access_token_expiry as usize,
        iat: now,
    };
    sign_claims(&claims, jwt_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::{Principal, Role};

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 3600,
        }
    }

    fn principal() -> Principal {
        Principal {
            user_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            role: Role::Admin,
            is_global_admin: false,
            tenant: None,
        }
    }

    #[test]
    fn test_verify_valid_token() {
        let config = config("secret");
        let token = create_access_token(&principal(), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_expired_token() {
        let config = config("secret");
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "u1".to_string(),
            role: Role::Staff,
            is_global_admin: false,
            tenant: None,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = sign_claims(&claims, &config).unwrap();
        assert_eq!(verify_token(&token, &config).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_wrong_secret() {
        let token = create_access_token(&principal(), &config("one")).unwrap();
        assert_eq!(
            verify_token(&token, &config("two")).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_garbage_token() {
        assert_eq!(
            verify_token("not-a-jwt", &config("secret")).unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_into_failure_is_unauthorized() {
        let failure = TokenError::Expired.into_failure();
        assert_eq!(failure.status().as_u16(), 401);
        assert_eq!(failure.to_string(), "HttpFailure(401): jwt expired");
    }
}
