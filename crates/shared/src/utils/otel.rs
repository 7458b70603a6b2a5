use std::sync::OnceLock;

use anyhow::{Context as _, Result};
use opentelemetry::{Context, global};
use opentelemetry_otlp::{LogExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, logs::SdkLoggerProvider, trace::SdkTracerProvider};
use tokio::time::Instant;

#[derive(Clone)]
pub struct Telemetry {
    service_name: String,
    otel_endpoint: String,
}

/// Span context plus start time of one in-flight dispatch.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: String) -> Self {
        Self {
            service_name: service_name.into(),
            otel_endpoint,
        }
    }

    fn get_resource(&self) -> Resource {
        static RESOURCE: OnceLock<Resource> = OnceLock::new();
        RESOURCE
            .get_or_init(|| {
                Resource::builder()
                    .with_service_name(self.service_name.clone())
                    .build()
            })
            .clone()
    }

    pub fn init_tracer(&self) -> Result<SdkTracerProvider> {
        let exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create span exporter")?;

        let provider = SdkTracerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(exporter)
            .build();

        global::set_tracer_provider(provider.clone());

        Ok(provider)
    }

    pub fn init_logger(&self) -> Result<SdkLoggerProvider> {
        let exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create log exporter")?;

        Ok(SdkLoggerProvider::builder()
            .with_resource(self.get_resource())
            .with_batch_exporter(exporter)
            .build())
    }

    pub fn shutdown(
        tracer_provider: SdkTracerProvider,
        logger_provider: SdkLoggerProvider,
    ) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(e) = tracer_provider.shutdown() {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Err(e) = logger_provider.shutdown() {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}
