use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_complaint_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use complaint_desk::config::AppConfig;
use complaint_desk::error::AppError;
use complaint_desk::telemetry;
use complaint_desk::workflows::report::HttpComplaintSource;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(HttpComplaintSource::new(&config.report_source)?);
    info!(endpoint = %source.endpoint(), "complaint source configured");

    let app = with_complaint_routes(source)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "complaint desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
