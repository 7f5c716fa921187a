use axum::{extract::State, http::header, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::modules::auth::{
    crud::{AuthError, UserCrud},
    model::User,
    schema::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest, UserResponse},
};
use crate::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ));
    }

    // The mobile client enforces the same minimum on its side.
    if req.password.len() < 6 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Password must be at least 6 characters")),
        ));
    }

    let crud = UserCrud::new(&state.users, &state.jwt_service);

    let result = crud
        .register(&req.email, &req.password, &req.name)
        .await
        .map_err(|e| (e.status_code(), Json(ErrorResponse::new(e.to_string()))))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token: result.access_token,
            token_type: "Bearer",
            expires_in: result.expires_in,
            user: UserResponse::from(result.user),
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, Json<ErrorResponse>)> {
    let crud = UserCrud::new(&state.users, &state.jwt_service);

    let result = crud
        .login(&req.email, &req.password)
        .await
        .map_err(|e| (e.status_code(), Json(ErrorResponse::new(e.to_string()))))?;

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            access_token: result.access_token,
            token_type: "Bearer",
            expires_in: result.expires_in,
            user: UserResponse::from(result.user),
        }),
    ))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = authenticate_request(&state, &headers)
        .await
        .map_err(|e| (e.status_code(), Json(ErrorResponse::new(e.to_string()))))?;

    Ok(Json(UserResponse::from(user)))
}

/// Resolve the bearer token in `Authorization` to a stored user. Shared
/// with the reports controllers, which gate every `/api` route on it.
pub async fn authenticate_request(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<User, AuthError> {
    let token = bearer_token(headers)?;
    UserCrud::new(&state.users, &state.jwt_service)
        .current_user(token)
        .await
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidToken)
}
