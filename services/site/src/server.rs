use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use local_pros::config::AppConfig;
use local_pros::error::AppError;
use local_pros::forms::{FlowSettings, FormService, HttpAnalyticsSink, HttpFormTransport};
use local_pros::telemetry;
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

    let transport = Arc::new(HttpFormTransport::from_config(&config.forms)?);
    let analytics = Arc::new(HttpAnalyticsSink::from_config(&config.analytics)?);
    let form_service = Arc::new(FormService::new(
        transport.clone(),
        analytics.clone(),
        FlowSettings::from_config(&config.forms),
    ));

    let app = with_site_routes(form_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        forms_endpoint = %transport.endpoint(),
        analytics_endpoint = ?analytics.endpoint().map(|url| url.as_str()),
        region = %config.forms.region_prefix,
        "referral site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
