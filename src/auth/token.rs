// Bearer token issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Tokens are valid for 7 days from issuance
const TOKEN_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for issuing and verifying bearer tokens.
///
/// Stateless on the server side: validity is solely a function of the
/// signature and the embedded expiry, so there is nothing to revoke or
/// look up per request.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    /// Create a new TokenService with the process-wide signing secret
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a signed token embedding the user id with a 7-day expiry
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + TOKEN_DURATION_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Expired and malformed/forged tokens are distinct internal errors;
    /// both map to 401 externally.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    /// Craft a token with arbitrary iat/exp, bypassing issue()
    fn forge_token(secret: &str, user_id: i32, iat: i64, exp: i64) -> String {
        let claims = Claims {
            sub: user_id,
            iat,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_token_expiration_is_7_days() {
        let service = test_token_service();
        let token = service.issue(1).unwrap();
        let claims = service.verify(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 604_800, "Token should expire in exactly 7 days");
    }

    #[test]
    fn test_claims_contain_user_id() {
        let service = test_token_service();
        let token = service.issue(42).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        for token in ["", "not.a.token", "random_garbage"] {
            assert!(matches!(
                service.verify(token),
                Err(AuthError::InvalidToken)
            ));
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::new("secret1".to_string());
        let verifier = TokenService::new("secret2".to_string());

        let token = issuer.issue(1).unwrap();

        assert!(issuer.verify(&token).is_ok());
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let service = test_token_service();
        let now = Utc::now().timestamp();

        // Issued 8 days ago, expired a day ago
        let token = forge_token(
            "test_secret_key_for_testing_purposes",
            1,
            now - 8 * 86_400,
            now - 86_400,
        );

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_expired_and_malformed_share_status_code() {
        let service = test_token_service();
        let now = Utc::now().timestamp();

        let expired = forge_token(
            "test_secret_key_for_testing_purposes",
            1,
            now - 700_000,
            now - 100_000,
        );

        let expired_err = service.verify(&expired).unwrap_err();
        let malformed_err = service.verify("junk").unwrap_err();

        // Distinct internal reasons, identical external outcome
        assert_eq!(expired_err.status_code(), malformed_err.status_code());
        assert_eq!(expired_err.status_code().as_u16(), 401);
    }

    proptest! {
        #[test]
        fn prop_issued_tokens_round_trip(user_id in 1i32..1_000_000) {
            let service = test_token_service();
            let token = service.issue(user_id).unwrap();
            let claims = service.verify(&token).unwrap();

            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.exp - claims.iat, 604_800);
        }

        #[test]
        fn prop_random_strings_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&malformed).is_err());
        }
    }
}
