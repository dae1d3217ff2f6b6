//! Operation Handlers
//!
//! Entry points the API layer calls for each auth operation. Every handler
//! works on the per-request [`Session`]; loading it from the cookie and
//! writing it back are separate steps so one request can run several
//! operations against the same session.

use axum::http::{HeaderMap, HeaderValue};
use std::sync::Arc;

use platform::cookie::{extract_cookie, to_header_value};

use crate::application::config::AuthConfig;
use crate::application::{
    ListUsersUseCase, LoginUseCase, LogoutUseCase, MeUseCase, RegisterUseCase, SessionCookie,
    SessionUseCase,
};
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{UserDto, UserNamePasswordInput, UserResponseDto};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Session plumbing
// ============================================================================

/// Session named by the request cookie, or a fresh one
pub async fn load_session<R>(state: &AuthAppState<R>, headers: &HeaderMap) -> AuthResult<Session>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &state.config.session_cookie_name);
    SessionUseCase::new(state.repo.clone(), state.config.clone())
        .resolve(token.as_deref())
        .await
}

/// Persist the session and return the `Set-Cookie` value, if any
pub async fn commit_session<R>(
    state: &AuthAppState<R>,
    session: &Session,
) -> AuthResult<Option<HeaderValue>>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let cookie = SessionUseCase::new(state.repo.clone(), state.config.clone())
        .commit(session)
        .await?;

    match cookie {
        SessionCookie::Unchanged => Ok(None),
        SessionCookie::Set(value) | SessionCookie::Clear(value) => to_header_value(&value)
            .map(Some)
            .map_err(|e| AuthError::Internal(format!("invalid Set-Cookie header: {e}"))),
    }
}

// ============================================================================
// Queries
// ============================================================================

/// `users`
pub async fn users<R>(state: &AuthAppState<R>) -> AuthResult<Vec<UserDto>>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;
    Ok(users.into_iter().map(UserDto::from).collect())
}

/// `me`
pub async fn me<R>(state: &AuthAppState<R>, session: &Session) -> AuthResult<Option<UserDto>>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let user = MeUseCase::new(state.repo.clone()).execute(session).await?;
    Ok(user.map(UserDto::from))
}

// ============================================================================
// Mutations
// ============================================================================

/// `register`
pub async fn register<R>(
    state: &AuthAppState<R>,
    session: &mut Session,
    input: UserNamePasswordInput,
) -> AuthResult<UserResponseDto>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let response = RegisterUseCase::new(state.repo.clone())
        .execute(input.into(), session)
        .await?;
    Ok(response.into())
}

/// `login`
pub async fn login<R>(
    state: &AuthAppState<R>,
    session: &mut Session,
    input: UserNamePasswordInput,
) -> AuthResult<UserResponseDto>
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    let response = LoginUseCase::new(state.repo.clone())
        .execute(input.into(), session)
        .await?;
    Ok(response.into())
}

/// `logout`
pub async fn logout<R>(state: &AuthAppState<R>, session: &mut Session) -> bool
where
    R: UserRepository + SessionStore + Send + Sync + 'static,
{
    LogoutUseCase::new(state.repo.clone()).execute(session).await
}
