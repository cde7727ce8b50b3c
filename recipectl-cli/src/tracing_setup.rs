//! Logging for recipectl
//!
//! Everything goes to stderr so stdout only carries the gate's status
//! lines. `RUST_LOG` wins over `--debug` (e.g.
//! `RUST_LOG=recipectl_db=debug`). With the `telemetry` feature, `--otel`
//! adds an OTLP exporter configured by `OTEL_EXPORTER_OTLP_ENDPOINT` and
//! `OTEL_SERVICE_NAME`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logging flags from the command line
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// `--debug`: fall back to `debug` instead of `info` when RUST_LOG is unset
    pub debug: bool,
    /// `--otel`: also ship spans over OTLP
    pub otel: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let fallback = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Compact stderr logging
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Stderr logging plus an OTLP span exporter
#[cfg(feature = "telemetry")]
pub fn init_tracing_with_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "recipectl".to_string());

    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    let resource = opentelemetry_sdk::Resource::new(vec![KeyValue::new(
        "service.name",
        service_name.clone(),
    )]);

    // recipectl runs on a current-thread runtime
    let provider = TracerProvider::builder()
        .with_batch_exporter(
            otlp_exporter,
            opentelemetry_sdk::runtime::TokioCurrentThread,
        )
        .with_resource(resource)
        .build();

    let tracer = provider.tracer("recipectl");
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    // the global keeps the provider alive for the life of the process
    let _ = opentelemetry::global::set_tracer_provider(provider);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .with(telemetry_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(
        endpoint = %endpoint,
        service = %service_name,
        "OpenTelemetry tracing initialized"
    );

    Ok(())
}

/// Flush buffered spans before exit
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Install the global subscriber; `--otel` only takes effect with the
/// `telemetry` feature
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_tracing_with_otel(config);
    }

    init_tracing(config)?;
    if config.otel {
        tracing::warn!("--otel ignored: recipectl was built without the telemetry feature");
    }
    Ok(())
}
