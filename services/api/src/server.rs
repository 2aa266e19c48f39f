use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_tool_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use galaxy_toolkit::config::AppConfig;
use galaxy_toolkit::error::AppError;
use galaxy_toolkit::notifications::TracingNotificationSink;
use galaxy_toolkit::telemetry;
use galaxy_toolkit::tools::ToolService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(ToolService::new(
        Arc::new(TracingNotificationSink),
        config.tools.latency(),
    ));

    let app = with_tool_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.as_str(),
        simulated_latency = config.tools.simulated_latency,
        %addr,
        "galaxy toolkit ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
