pub mod comment;
pub mod user;

pub use comment::PostgresCommentRepository;
pub use user::PostgresUserRepository;
