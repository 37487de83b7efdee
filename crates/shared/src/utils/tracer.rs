use crate::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use std::future::Future;
use tokio::time::Instant;
use tracing::{error, info};

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

/// Span and metrics bookkeeping for one service component.
#[derive(Clone)]
pub struct ServiceTracer {
    component: &'static str,
    metrics: Metrics,
}

impl ServiceTracer {
    pub fn new(component: &'static str, metrics: Metrics) -> Self {
        Self { component, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.component)
    }

    pub fn start_tracing(&self, operation_name: &'static str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name)
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![
                KeyValue::new("component", self.component),
                KeyValue::new("operation", operation_name),
            ],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        operation_name: &str,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let (status_str, status) = if is_success {
            ("SUCCESS", Status::Success)
        } else {
            ("ERROR", Status::Error)
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ {operation_name} completed: {message}");
        } else {
            error!("❌ {operation_name} failed: {message}");
        }

        self.metrics.record(operation_name, method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Runs `fut` inside a span and records its outcome.
    pub async fn observe<T, F>(
        &self,
        operation_name: &'static str,
        method: Method,
        attributes: Vec<KeyValue>,
        fut: F,
    ) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        let tracing_ctx = self.start_tracing(operation_name, attributes);
        let result = fut.await;

        match &result {
            Ok(_) => self.complete_tracing(&tracing_ctx, operation_name, method, true, "ok"),
            Err(err) => {
                self.complete_tracing(&tracing_ctx, operation_name, method, false, &err.to_string())
            }
        }

        result
    }
}
