use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::response::IntoResponse;
use base64::Engine;
use opentelemetry::trace::TraceContextExt;
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::config::AuthConfig;

struct HeaderMapExtractor<'a>(&'a axum::http::HeaderMap);

impl<'a> opentelemetry::propagation::Extractor for HeaderMapExtractor<'a> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

fn trace_span<B>(req: &Request<B>) -> (String, tracing::Span) {
    let parent_context =
        opentelemetry::global::get_text_map_propagator(|propagator| {
            propagator.extract(&HeaderMapExtractor(req.headers()))
        });

    let span = tracing::info_span!(
        "http.request",
        method = %req.method(),
        uri = %req.uri(),
        trace_id = tracing::field::Empty,
    );
    // trace_id auto generate if not present (otel)
    span.set_parent(parent_context);
    let trace_id = span.context().span().span_context().trace_id().to_string();
    span.record("trace_id", &trace_id);
    (trace_id, span)
}

fn add_trace_id(response: &mut axum::response::Response, trace_id: String) {
    if let Ok(value) = axum::http::HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert("X-Trace-ID", value);
    }
}

pub async fn trace_layer(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let (trace_id, span) = trace_span(&request);
    let mut response = next.run(request).instrument(span).await;
    add_trace_id(&mut response, trace_id);
    response
}

fn authorized(auth: &AuthConfig, headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = base64::engine::general_purpose::STANDARD.decode(encoded)
    else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };
    decoded == format!("{}:{}", auth.username, auth.password)
}

/// Rejects requests whose `Authorization: Basic` credentials do not match
/// the configured pair. Registration itself never sees the credentials.
pub async fn basic_auth(
    State(auth): State<AuthConfig>,
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    if authorized(&auth, request.headers()) {
        next.run(request).await
    } else {
        crate::Error::UnAuthorized.into_response()
    }
}
