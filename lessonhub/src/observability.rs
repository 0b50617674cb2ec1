use opentelemetry::trace::{TraceContextExt, TraceId};
use rand::Rng;
use rand::rng;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub fn get_current_trace_id() -> Option<TraceId> {
    let span = tracing::Span::current();
    let context = span.context();
    let span_context = context.span().span_context().clone();

    if span_context.is_valid() {
        Some(span_context.trace_id())
    } else {
        None
    }
}

pub fn generate_trace_id() -> TraceId {
    let mut rng = rng();
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    TraceId::from_bytes(bytes)
}

pub fn get_trace_id_string() -> String {
    get_current_trace_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| generate_trace_id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_trace_id_is_valid_hex() {
        let id = generate_trace_id().to_string();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_trace_id_string_without_span() {
        // Outside any otel-backed span we still get a usable id.
        let id = get_trace_id_string();
        assert_eq!(id.len(), 32);
    }
}
