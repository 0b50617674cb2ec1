use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ServerConfig;

pub mod middleware;

pub async fn run(
    router: axum::Router,
    config: &ServerConfig,
) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        config.host.as_str(),
        config.port
    ))
    .await
    .map_err(|e| anyhow::anyhow!("tcp bind failed: {:?}", e))?;
    axum::serve(listener, router)
        .await
        .map_err(|e| anyhow::anyhow!("http serve failed: {:?}", e))?;
    Ok(())
}

// Validation and conflict outcomes are expected; they go out as plain text
// with their contract status and are not logged as failures. Everything else
// is an internal failure with an unspecific body.
impl IntoResponse for crate::Error {
    fn into_response(self) -> Response {
        match self {
            crate::Error::Validation => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            crate::Error::Conflict(_) => {
                (StatusCode::CONFLICT, self.to_string()).into_response()
            }
            crate::Error::UnAuthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            e => {
                tracing::error!("request failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .into_response()
            }
        }
    }
}
