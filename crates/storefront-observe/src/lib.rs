//! Observability setup for Storefront: tracing subscriber with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
