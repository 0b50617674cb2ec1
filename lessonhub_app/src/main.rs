use std::sync::Arc;

use lessonhub::http::middleware::{basic_auth, trace_layer};
use lessonhub_users::api::{self, ApiState};
use lessonhub_users::infra::SqliteUserRepository;
use lessonhub_users::service::DefaultUserService;

#[tokio::main]
async fn main() -> lessonhub::Result<()> {
    let config = lessonhub::config::AppConfig::new(
        lessonhub::util::workspace_dir().join("configs"),
    )?;

    lessonhub::logging::init_tracing(&config.logging)?;
    tracing::info!("app config: {:?}", config);

    let pool = lessonhub::db::connect(&config.database).await?;
    let repo = SqliteUserRepository::new(pool);
    repo.init_schema().await?;

    let state = ApiState {
        users: Arc::new(DefaultUserService::new(Arc::new(repo))),
    };
    let router = api::router(state)
        .layer(axum::middleware::from_fn_with_state(
            config.auth.clone(),
            basic_auth,
        ))
        .layer(axum::middleware::from_fn(trace_layer));

    lessonhub::http::run(router, &config.server).await
}
