//! Operation Endpoint
//!
//! `POST /graphql`. Each request loads the session from its cookie, runs one
//! operation against it and writes the session back. The result is wrapped
//! as `{ "data": { "<operation>": <result> } }`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

use auth::Session;
use auth::domain::repository::{SessionStore, UserRepository};
use auth::handlers as auth_handlers;
use kernel::error::app_error::{AppError, AppResult};
use post::domain::repository::PostRepository;
use post::handlers as post_handlers;

use crate::operation::{Operation, OperationRequest};
use crate::state::AppState;

pub const HELLO: &str = "hello world";

pub async fn graphql<A, P>(
    State(state): State<AppState<A, P>>,
    headers: HeaderMap,
    payload: Result<Json<OperationRequest>, JsonRejection>,
) -> AppResult<Response>
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let name = request.operation;
    let operation = request.into_operation().map_err(|e| {
        AppError::bad_request(format!("Invalid variables for {}: {}", name.as_str(), e))
    })?;

    tracing::debug!(
        operation = name.as_str(),
        mutation = name.is_mutation(),
        "Executing operation"
    );

    let mut session = auth_handlers::load_session(&state.auth, &headers).await?;
    let result = execute(&state, operation, &mut session).await?;
    let set_cookie = auth_handlers::commit_session(&state.auth, &session).await?;

    let mut data = Map::new();
    data.insert(name.as_str().to_string(), result);

    let mut response = Json(json!({ "data": data })).into_response();
    if let Some(cookie) = set_cookie {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

async fn execute<A, P>(
    state: &AppState<A, P>,
    operation: Operation,
    session: &mut Session,
) -> AppResult<Value>
where
    A: UserRepository + SessionStore + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    let auth = &state.auth;
    let posts = &state.posts;

    let value = match operation {
        Operation::Hello => Value::from(HELLO),
        Operation::Users => serde_json::to_value(auth_handlers::users(auth).await?)?,
        Operation::Me => serde_json::to_value(auth_handlers::me(auth, session).await?)?,
        Operation::Register(input) => {
            serde_json::to_value(auth_handlers::register(auth, session, input).await?)?
        }
        Operation::Login(input) => {
            serde_json::to_value(auth_handlers::login(auth, session, input).await?)?
        }
        Operation::Logout => Value::Bool(auth_handlers::logout(auth, session).await),
        Operation::Posts => serde_json::to_value(post_handlers::posts(posts).await?)?,
        Operation::Post(input) => serde_json::to_value(post_handlers::post(posts, input).await?)?,
        Operation::CreatePost(input) => {
            serde_json::to_value(post_handlers::create_post(posts, input).await?)?
        }
        Operation::UpdatePost(input) => {
            serde_json::to_value(post_handlers::update_post(posts, input).await?)?
        }
        Operation::DeletePost(input) => {
            Value::Bool(post_handlers::delete_post(posts, input).await?)
        }
    };

    Ok(value)
}
