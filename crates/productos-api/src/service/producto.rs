use crate::{
    abstract_trait::producto::{
        DynProductoCommandHandler, DynProductoQueryHandler, ProductoCommandHandlerTrait,
        ProductoQueryHandlerTrait,
    },
    domain::{
        messages::producto::{CreateProductoCommand, GetProductoByIdQuery},
        response::producto::ProductoResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

/// Forwards producto queries and commands to the bound handlers, wrapping
/// each dispatch in a span and recording its outcome in the metrics family.
#[derive(Clone)]
pub struct ProductoDispatcherService {
    query_handler: DynProductoQueryHandler,
    command_handler: DynProductoCommandHandler,
    metrics: Arc<Mutex<Metrics>>,
}

impl std::fmt::Debug for ProductoDispatcherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductoDispatcherService")
            .field("query_handler", &"DynProductoQueryHandler")
            .field("command_handler", &"DynProductoCommandHandler")
            .finish()
    }
}

impl ProductoDispatcherService {
    pub async fn new(
        query_handler: DynProductoQueryHandler,
        command_handler: DynProductoCommandHandler,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "producto_dispatcher_request_counter",
            "Total number of requests dispatched by the ProductoDispatcherService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "producto_dispatcher_request_duration",
            "Histogram of request durations for the ProductoDispatcherService",
            metrics.lock().await.request_duration.clone(),
        );
        Self {
            query_handler,
            command_handler,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("producto-dispatcher")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Internal)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    async fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
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
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.lock().await.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ProductoQueryHandlerTrait for ProductoDispatcherService {
    async fn get_producto_by_id(
        &self,
        query: GetProductoByIdQuery,
    ) -> Result<Option<ProductoResponse>, ServiceError> {
        let tracing_ctx = self.start_tracing(
            "GetProductoById",
            vec![
                KeyValue::new("component", "producto"),
                KeyValue::new("operation", "get_by_id"),
                KeyValue::new("producto.id", i64::from(query.id)),
            ],
        );

        match self.query_handler.get_producto_by_id(query).await {
            Ok(result) => {
                let message = if result.is_some() {
                    "Producto fetched"
                } else {
                    "Producto query returned no result"
                };
                self.complete_tracing(&tracing_ctx, Method::Get, true, message)
                    .await;
                Ok(result)
            }
            Err(err) => {
                self.complete_tracing(&tracing_ctx, Method::Get, false, &err.to_string())
                    .await;
                Err(err)
            }
        }
    }
}

#[async_trait]
impl ProductoCommandHandlerTrait for ProductoDispatcherService {
    async fn create_producto(
        &self,
        command: CreateProductoCommand,
    ) -> Result<ProductoResponse, ServiceError> {
        let tracing_ctx = self.start_tracing(
            "CreateProducto",
            vec![
                KeyValue::new("component", "producto"),
                KeyValue::new("operation", "create"),
                KeyValue::new("producto.codigo", command.codigo.clone()),
                KeyValue::new("producto.categoria_id", i64::from(command.categoria_id)),
            ],
        );

        match self.command_handler.create_producto(command).await {
            Ok(created) => {
                self.complete_tracing(&tracing_ctx, Method::Post, true, "Producto created")
                    .await;
                Ok(created)
            }
            Err(err) => {
                self.complete_tracing(&tracing_ctx, Method::Post, false, &err.to_string())
                    .await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;
    use shared::utils::{Labels, Status};

    struct FixedHandler {
        producto: Option<ProductoResponse>,
    }

    #[async_trait]
    impl ProductoQueryHandlerTrait for FixedHandler {
        async fn get_producto_by_id(
            &self,
            _query: GetProductoByIdQuery,
        ) -> Result<Option<ProductoResponse>, ServiceError> {
            Ok(self.producto.clone())
        }
    }

    #[async_trait]
    impl ProductoCommandHandlerTrait for FixedHandler {
        async fn create_producto(
            &self,
            _command: CreateProductoCommand,
        ) -> Result<ProductoResponse, ServiceError> {
            Err(ServiceError::Internal("write failed".into()))
        }
    }

    fn command() -> CreateProductoCommand {
        CreateProductoCommand {
            codigo: "P1".into(),
            nombre: "Widget".into(),
            descripcion: "d".into(),
            precio: 9.99,
            activo: true,
            categoria_id: 3,
        }
    }

    async fn service(
        handler: FixedHandler,
    ) -> (
        ProductoDispatcherService,
        Arc<Mutex<Metrics>>,
        Arc<Mutex<Registry>>,
    ) {
        let handler = Arc::new(handler);
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let registry = Arc::new(Mutex::new(Registry::default()));
        let service = ProductoDispatcherService::new(
            handler.clone(),
            handler,
            metrics.clone(),
            registry.clone(),
        )
        .await;
        (service, metrics, registry)
    }

    #[tokio::test]
    async fn absent_result_is_passed_through_and_counted_as_success() {
        let (service, metrics, _) = service(FixedHandler { producto: None }).await;

        let result = service
            .get_producto_by_id(GetProductoByIdQuery::new(5))
            .await
            .unwrap();
        assert!(result.is_none());

        let labels = Labels {
            method: Method::Get,
            status: Status::Success,
        };
        assert_eq!(
            metrics.lock().await.request_counter.get_or_create(&labels).get(),
            1
        );
    }

    #[tokio::test]
    async fn handler_error_is_returned_and_counted_as_error() {
        let (service, metrics, registry) = service(FixedHandler { producto: None }).await;

        let err = service.create_producto(command()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));

        let labels = Labels {
            method: Method::Post,
            status: Status::Error,
        };
        assert_eq!(
            metrics.lock().await.request_counter.get_or_create(&labels).get(),
            1
        );

        let mut buffer = String::new();
        encode(&mut buffer, &*registry.lock().await).unwrap();
        assert!(buffer.contains("producto_dispatcher_request_counter"));
    }
}
