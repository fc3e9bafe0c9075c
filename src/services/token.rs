//! Signed-claims tokens: HS256 JWTs with a fixed one-hour lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_LIFETIME_HOURS, TOKEN_TYPE_BEARER};
use crate::domain::User;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Name of the authenticated user
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: TOKEN_LIFETIME_HOURS * SECONDS_PER_HOUR,
        }
    }
}

/// Mints and checks tokens with one symmetric key.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes())
    }

    /// Issue a token naming `user`, valid for one hour from now.
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TOKEN_LIFETIME_HOURS);

        self.sign(&Claims {
            name: user.user_name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn sign(&self, claims: &Claims) -> AppResult<String> {
        Ok(encode(&Header::default(), claims, &self.encoding)?)
    }
}
