mod logs;
mod metrics;
mod money;
mod otel;
mod paging;
mod shutdown;
mod tracer;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::money::{ensure_positive_amount, round_money, to_fixed};
pub use self::otel::Telemetry;
pub use self::paging::{MAX_PAGE_SIZE, PageWindow};
pub use self::shutdown::shutdown_signal;
pub use self::tracer::{ServiceTracer, TracingContext};
