use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::Role;
use crate::token::TokenError;
use crate::token::TokenService;

/// Well-formed Argon2id digest that no password verifies against.
///
/// Used to burn a full verification when no stored digest exists, so the
/// unknown-username path costs the same as the wrong-password path.
const DUMMY_DIGEST: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication coordinator combining password verification and token issuance.
///
/// Constructed once at startup from the process-wide signing secret and
/// token lifetime, then injected wherever credentials or tokens are checked.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing (at least 32 bytes)
    /// * `token_lifetime` - Finite validity window for issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(secret: &[u8], token_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(secret, token_lifetime),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Passing `None` for the stored digest (no such user) still runs a full
    /// verification against a placeholder digest before failing, keeping the
    /// two failure paths the same shape and roughly the same latency.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest, if the user exists
    /// * `subject` - Subject identifier to bind into the token
    /// * `role` - Subject role
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or password mismatch
    /// * `TokenError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: impl ToString,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self
            .password_hasher
            .verify(password, stored_hash.unwrap_or(DUMMY_DIGEST))
            && stored_hash.is_some();

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(subject, role, now)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Useful when authentication has already been established by other means.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier to bind
    /// * `role` - Subject role
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(
        &self,
        subject: impl ToString,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.token_service.issue(subject, role, now)
    }

    /// Verify a presented bearer token.
    ///
    /// # Arguments
    /// * `token` - Token string from the Authorization header
    /// * `now` - Instant to evaluate expiry against
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch or malformed token
    /// * `Expired` - Token past its expiry
    pub fn verify_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.token_service.verify(token, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::hours(1))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let now = Utc::now();
        let result = authenticator
            .authenticate(password, Some(&hash), "user123", Role::Standard, now)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .verify_token(&result.access_token, now)
            .expect("Token verification failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, Role::Standard);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "wrong_password",
            Some(&hash),
            "user123",
            Role::Standard,
            Utc::now(),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let authenticator = authenticator();

        // No stored digest: same error kind as a wrong password
        let result =
            authenticator.authenticate("any_password", None, "user123", Role::Standard, Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_dummy_digest_never_verifies() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify("", DUMMY_DIGEST));
        assert!(!hasher.verify("password", DUMMY_DIGEST));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let authenticator = authenticator();
        let now = Utc::now();

        let token = authenticator
            .issue_token("user123", Role::Admin, now)
            .expect("Failed to issue token");

        let claims = authenticator
            .verify_token(&token, now)
            .expect("Failed to verify token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_verify_garbage_token() {
        let authenticator = authenticator();

        let result = authenticator.verify_token("invalid.token.here", Utc::now());
        assert!(result.is_err());
    }
}
