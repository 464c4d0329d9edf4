pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use claims::Role;
pub use errors::RoleParseError;
pub use errors::TokenError;
pub use service::TokenService;
