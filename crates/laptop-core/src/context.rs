//! Request Context: per-invocation identity carried into log spans
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub trace_id: String,
    pub operation: &'static str,
    pub started_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            operation,
            started_at: Utc::now(),
        }
    }

    /// Milliseconds since the context was created
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }

    pub fn span(&self) -> tracing::Span {
        tracing::info_span!("advisor", op = self.operation, trace_id = %self.trace_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ids_are_distinct() {
        let a = RequestContext::new("recommend");
        let b = RequestContext::new("recommend");
        assert_ne!(a.trace_id, b.trace_id);
        assert!(a.elapsed_ms() >= 0);
    }
}
