//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded bearer tokens (JWT, HS256)
//! - Authentication coordination
//!
//! The service crate defines its own domain traits and adapts these
//! implementations, so domain logic never depends on crypto details.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Role, TokenService};
//! use chrono::{Duration, Utc};
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let now = Utc::now();
//! let token = service.issue("user123", Role::Standard, now).unwrap();
//! let claims = service.verify(&token, now).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role};
//! use chrono::{Duration, Utc};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let now = Utc::now();
//! let result = auth
//!     .authenticate("password123", Some(&hash), "user123", Role::Standard, now)
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.verify_token(&result.access_token, now).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Role;
pub use token::RoleParseError;
pub use token::TokenError;
pub use token::TokenService;
