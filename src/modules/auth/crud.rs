use std::collections::HashMap;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::auth::model::User;
use crate::services::{hashing, jwt::JwtService};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Token error: {0}")]
    Token(String),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::UNAUTHORIZED,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// In-memory user records, keyed by email. Constructed once at startup and
/// handed to the router through `AppState`.
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Check-and-insert under a single write lock, so two concurrent
    /// registrations for the same email cannot both succeed.
    pub async fn insert(&self, user: User) -> Result<(), AuthError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AuthError::EmailAlreadyExists);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    pub expires_in: i64,
}

pub struct UserCrud<'a> {
    store: &'a UserStore,
    jwt_service: &'a JwtService,
}

impl<'a> UserCrud<'a> {
    pub fn new(store: &'a UserStore, jwt_service: &'a JwtService) -> Self {
        Self { store, jwt_service }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<LoginResult, AuthError> {
        let password_hash =
            hashing::hash_password(password).map_err(|e| AuthError::Hashing(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
            is_active: true,
        };

        self.store.insert(user.clone()).await?;

        self.issue_token(user)
    }

    /// Unknown email, wrong password and an inactive account all surface
    /// the same `InvalidCredentials`, so callers cannot enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let is_valid = hashing::verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        if !is_valid || !user.is_active {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(user)
    }

    /// Validate a bearer token and resolve its subject to a stored user.
    pub async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let data = self
            .jwt_service
            .verify_access_token(token)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        self.store
            .find_by_email(&data.claims.sub)
            .await
            .ok_or(AuthError::UserNotFound)
    }

    fn issue_token(&self, user: User) -> Result<LoginResult, AuthError> {
        let access_token = self
            .jwt_service
            .create_access_token(&user.email)
            .map_err(|e| AuthError::Token(e.to_string()))?;

        Ok(LoginResult {
            user,
            access_token,
            expires_in: self.jwt_service.get_access_token_duration_secs(),
        })
    }
}
