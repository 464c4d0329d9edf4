use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use comment_service::comment::errors::CommentError;
use comment_service::comment::models::Comment;
use comment_service::comment::models::CommentId;
use comment_service::comment::ports::CommentRepository;
use comment_service::domain::comment::service::CommentService;
use comment_service::domain::user::errors::UserError;
use comment_service::domain::user::models::CreateUserCommand;
use comment_service::domain::user::models::User;
use comment_service::domain::user::models::UserId;
use comment_service::domain::user::models::Username;
use comment_service::domain::user::ports::UserRepository;
use comment_service::domain::user::ports::UserServicePort;
use comment_service::domain::user::service::UserService;
use comment_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store backing the API tests.
///
/// A single mutex over the map makes create an atomic check-and-insert,
/// matching the uniqueness guarantee of the Postgres implementation.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().expect("user store poisoned");
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().expect("user store poisoned");
        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().expect("user store poisoned");
        Ok(users.values().find(|u| &u.username == username).cloned())
    }

    async fn record_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), UserError> {
        let mut users = self.users.lock().expect("user store poisoned");
        match users.get_mut(&id.0) {
            Some(user) => {
                user.last_login = Some(at);
                Ok(())
            }
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

/// In-memory comment store preserving insertion order for list_all.
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        let mut comments = self.comments.lock().expect("comment store poisoned");
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let comments = self.comments.lock().expect("comment store poisoned");
        Ok(comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Comment>, CommentError> {
        let comments = self.comments.lock().expect("comment store poisoned");
        Ok(comments.clone())
    }

    async fn delete(&self, id: &CommentId) -> Result<bool, CommentError> {
        let mut comments = self.comments.lock().expect("comment store poisoned");
        let before = comments.len();
        comments.retain(|c| c.id != *id);
        Ok(comments.len() < before)
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let authenticator = Arc::new(Authenticator::new(
            TEST_SECRET,
            chrono::Duration::minutes(60),
        ));

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let comment_repository = Arc::new(InMemoryCommentRepository::new());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        ));
        let comment_service = Arc::new(CommentService::new(comment_repository, user_repository));

        let router = create_router(
            user_service.clone(),
            comment_service,
            Arc::clone(&authenticator),
        );

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            user_service,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user through the domain service, bypassing the HTTP
    /// surface. Needed for admin accounts, which have no public endpoint.
    pub async fn register_with_role(&self, username: &str, password: &str, role: Role) -> User {
        self.user_service
            .register(CreateUserCommand::new(
                Username::new(username.to_string()).expect("invalid test username"),
                password.to_string(),
                role,
            ))
            .await
            .expect("Failed to register test user")
    }

    /// Log in through the API and return the bearer token.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }
}
