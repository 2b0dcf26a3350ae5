//! Log output for the `sfront` binary.
//!
//! Human-readable events go to stderr so `--json` output on stdout stays
//! parseable. Spans can additionally be exported through OpenTelemetry.
//!
//! ```no_run
//! storefront_observe::tracing_setup::init_tracing("warn", false).unwrap();
//! // ... run the command ...
//! storefront_observe::tracing_setup::shutdown_tracing();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Span exporter installed by [`init_tracing`], flushed by [`shutdown_tracing`].
static SPAN_EXPORT: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Level filter for the process. `RUST_LOG` overrides `fallback` when set.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn span_exporter() -> SdkTracerProvider {
    SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build()
}

/// Install the global subscriber.
///
/// `directives` is used when `RUST_LOG` is unset. With `export_spans`, closed
/// spans are also written as OpenTelemetry records to stdout.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(
    directives: &str,
    export_spans: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let otel_layer = if export_spans {
        let provider = span_exporter();
        let tracer = provider.tracer("storefront");
        let _ = SPAN_EXPORT.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(build_filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush exported spans. Does nothing when span export was never enabled.
pub fn shutdown_tracing() {
    let Some(provider) = SPAN_EXPORT.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        eprintln!("warning: span export did not shut down cleanly: {e}");
    }
}
