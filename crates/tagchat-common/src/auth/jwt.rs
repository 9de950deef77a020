//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Sessions are stateless: a single access token carries the user id and email,
//! and expiry is the only revocation mechanism.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tagchat_core::Snowflake;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email of the authenticated user
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// An issued access token, ready to hand to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue an access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, user_id: Snowflake, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("test-secret-key-for-unit-tests", 86400)
    }

    #[test]
    fn test_issue_and_decode_token() {
        let service = test_service();
        let user_id = Snowflake::new(123_456_789);

        let issued = service.issue_token(user_id, "alice@example.com").unwrap();
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 86400);

        let claims = service.decode_token(&issued.access_token).unwrap();
        assert_eq!(claims.sub, "123456789");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_decode_garbage_token() {
        let service = test_service();
        let result = service.decode_token("not.a.jwt");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = JwtService::new("secret-one", 86400);
        let verifier = JwtService::new("secret-two", 86400);

        let issued = issuer
            .issue_token(Snowflake::new(42), "bob@example.com")
            .unwrap();
        let result = verifier.decode_token(&issued.access_token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry backdates exp past the validation leeway
        let service = JwtService::new("test-secret-key-for-unit-tests", -120);
        let issued = service
            .issue_token(Snowflake::new(7), "carol@example.com")
            .unwrap();

        let result = service.decode_token(&issued.access_token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_claims_user_id_invalid_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "x@example.com".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert!(matches!(claims.user_id(), Err(AppError::InvalidToken)));
    }
}
