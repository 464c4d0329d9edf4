use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Role;
use super::errors::TokenError;

/// Stateless token issuer and verifier.
///
/// Signs claims with HS256 (HMAC with SHA-256) using a process-wide secret
/// injected at construction. Tokens are never stored server-side; every
/// verification recomputes the signature from the presented claims.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `lifetime` - Finite validity window applied to every issued token
    ///
    /// # Returns
    /// TokenService configured with HS256
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        }
    }

    /// Issue a signed token bound to a subject and role.
    ///
    /// Sets `iat` to `now` and `exp` to `now` plus the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier to bind
    /// * `role` - Subject role at issuance time
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// Encoded JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: impl ToString,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a presented token and return its claims.
    ///
    /// The signature is recomputed from the presented claims and the
    /// process-wide secret; expiry is then checked against the supplied
    /// instant with zero leeway.
    ///
    /// # Arguments
    /// * `token` - Encoded JWT string
    /// * `now` - Instant to evaluate expiry against
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch or malformed token
    /// * `Expired` - Signature valid but the token is past its expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock below, not the
        // library's ambient one.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(SECRET, Duration::hours(1));
        let now = Utc::now();

        let token = service
            .issue("user123", Role::Standard, now)
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = service.verify(&token, now).expect("Failed to verify token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, Role::Standard);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(SECRET, Duration::minutes(5));
        let issued_at = Utc::now();

        let token = service
            .issue("user123", Role::Standard, issued_at)
            .expect("Failed to issue token");

        // Still valid just before expiry
        let just_before = issued_at + Duration::minutes(5);
        assert!(service.verify(&token, just_before).is_ok());

        let after_expiry = issued_at + Duration::minutes(5) + Duration::seconds(1);
        let result = service.verify(&token, after_expiry);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenService::new(b"secret1_at_least_32_bytes_long_key!", Duration::hours(1));
        let verifier = TokenService::new(b"secret2_at_least_32_bytes_long_key!", Duration::hours(1));

        let now = Utc::now();
        let token = issuer
            .issue("user123", Role::Admin, now)
            .expect("Failed to issue token");

        let result = verifier.verify(&token, now);
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let service = TokenService::new(SECRET, Duration::hours(1));
        let now = Utc::now();

        let token = service
            .issue("user123", Role::Standard, now)
            .expect("Failed to issue token");

        // Flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let result = service.verify(&tampered, now);
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_malformed_token() {
        let service = TokenService::new(SECRET, Duration::hours(1));

        let result = service.verify("not.a.token", Utc::now());
        assert!(matches!(result, Err(TokenError::Invalid)));
    }
}
