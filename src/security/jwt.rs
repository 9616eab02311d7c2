/// JWT validation for article-service
///
/// Tokens are issued by the identity provider; this service only validates
/// them. RS256 only — no symmetric algorithms, so a leaked service cannot
/// mint tokens. The public key is loaded once at startup and immutable
/// thereafter.
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Claims carried by identity-provider access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Email address, used as the principal's display label
    pub email: String,
}

static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Load the RS256 public key from the environment.
pub fn load_validation_key() -> Result<String> {
    std::env::var("JWT_PUBLIC_KEY_PEM").map_err(|_| anyhow!("JWT_PUBLIC_KEY_PEM is not set"))
}

/// Install the validation key. Must be called during startup, once.
pub fn initialize_validation_key(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

/// Validate a bearer token and return its claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT key not initialized. Call initialize_validation_key() during startup.")
    })?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}
