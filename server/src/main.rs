use anyhow::Context;
use opentelemetry::trace::TracerProvider;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use recipeshare_core::InMemoryRecipeStore;
use recipeshare_server::config::Config;
use recipeshare_server::{api, app, AppState};
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const TRACER_NAME: &str = "recipeshare-server";

/// OpenTelemetry providers that must be flushed before exit.
struct OtelProviders {
    traces: SdkTracerProvider,
    logs: SdkLoggerProvider,
}

impl OtelProviders {
    /// Build OTLP/gRPC exporters for traces and logs pointed at `endpoint`.
    fn connect(endpoint: &str, service_name: &str) -> anyhow::Result<Self> {
        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();

        let span_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create OTLP trace exporter")?;
        let log_exporter = opentelemetry_otlp::LogExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create OTLP log exporter")?;

        let traces = SdkTracerProvider::builder()
            .with_batch_exporter(span_exporter)
            .with_resource(resource.clone())
            .build();
        opentelemetry::global::set_tracer_provider(traces.clone());

        let logs = SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build();

        Ok(Self { traces, logs })
    }

    fn shutdown(self) {
        if let Err(e) = self.traces.shutdown() {
            tracing::warn!("Failed to flush OpenTelemetry traces: {}", e);
        }
        if let Err(e) = self.logs.shutdown() {
            tracing::warn!("Failed to flush OpenTelemetry logs: {}", e);
        }
    }
}

/// Whether something accepts TCP connections at `endpoint` within 100ms.
fn collector_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://");

    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

/// Install the global subscriber: console output always, OTLP export of
/// traces and logs only when the configured collector answers.
fn init_telemetry(config: &Config) -> anyhow::Result<Option<OtelProviders>> {
    let endpoint = config.otlp_endpoint.as_deref();
    let otel = endpoint
        .filter(|endpoint| collector_reachable(endpoint))
        .map(|endpoint| OtelProviders::connect(endpoint, &config.service_name))
        .transpose()?;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(otel.as_ref().map(|otel| {
            tracing_opentelemetry::layer().with_tracer(otel.traces.tracer(TRACER_NAME))
        }))
        .with(otel.as_ref().map(|otel| OpenTelemetryTracingBridge::new(&otel.logs)))
        .init();

    match (endpoint, otel.is_some()) {
        (Some(endpoint), true) => tracing::info!(
            "OpenTelemetry enabled, exporting traces and logs to {} as {}",
            endpoint,
            config.service_name
        ),
        (Some(endpoint), false) => tracing::info!(
            "OpenTelemetry endpoint {} not reachable, using console logging only",
            endpoint
        ),
        (None, _) => {
            tracing::debug!("OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only")
        }
    }

    Ok(otel)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    let config = Config::from_env()?;
    let otel = init_telemetry(&config)?;

    let store: AppState = Arc::new(InMemoryRecipeStore::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(providers) = otel {
        providers.shutdown();
    }

    Ok(())
}
