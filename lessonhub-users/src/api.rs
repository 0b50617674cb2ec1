use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use crate::entity::User;
use crate::service::{RegisterUserReq, UserService};

#[derive(Clone)]
pub struct ApiState {
    pub users: Arc<dyn UserService>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/users", post(register_user).get(list_users))
        .with_state(state)
}

async fn register_user(
    State(state): State<ApiState>,
    payload: Result<Json<RegisterUserReq>, JsonRejection>,
) -> lessonhub::Result<Json<User>> {
    // An unreadable body reports the same way as absent fields.
    let Json(req) = payload.map_err(|_| lessonhub::Error::Validation)?;
    let user = state.users.register(req).await?;
    Ok(Json(user))
}

async fn list_users(
    State(state): State<ApiState>,
) -> lessonhub::Result<Json<Vec<User>>> {
    Ok(Json(state.users.list().await?))
}
