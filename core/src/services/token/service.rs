//! JWT token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TokenPayload;
use crate::errors::{catalog, DomainException, DomainResult};

use super::config::TokenServiceConfig;

/// Issues and verifies access tokens
pub trait TokenService: Send + Sync {
    /// Signs `payload` into a token string
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainException)` - Signing failed
    fn encode(&self, payload: &TokenPayload) -> DomainResult<String>;

    /// Verifies a token and returns its payload
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPayload)` - The token is authentic and not expired
    /// * `Err(DomainException)` - `TOKEN_EXPIRED` for expired tokens,
    ///   `TOKEN_INVALID` for anything else
    fn verify(&self, token: &str) -> DomainResult<TokenPayload>;
}

/// Registered claims wrapped around the payload
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    payload: TokenPayload,
    iat: i64,
    exp: i64,
}

/// HS256 implementation of [`TokenService`]
pub struct JwtTokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }
}

impl TokenService for JwtTokenService {
    fn encode(&self, payload: &TokenPayload) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            payload: payload.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.access_token_expiry_seconds)).timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainException::new(&catalog::general::INTERNAL_SERVER_ERROR)
        })
    }

    fn verify(&self, token: &str) -> DomainResult<TokenPayload> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainException::new(&catalog::auth::TOKEN_EXPIRED),
                _ => DomainException::new(&catalog::auth::TOKEN_INVALID),
            })?;

        Ok(token_data.claims.payload)
    }
}
