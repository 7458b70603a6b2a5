mod gracefulshutdown;
mod logs;
mod metrics;
mod otel;

pub use self::gracefulshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::otel::{Telemetry, TracingContext};
