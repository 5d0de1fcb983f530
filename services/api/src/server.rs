use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryNoticePublisher, InMemoryProfileRepository};
use crate::routes::with_promotion_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use faculty_promotion::config::AppConfig;
use faculty_promotion::error::AppError;
use faculty_promotion::telemetry;
use faculty_promotion::workflows::promotion::PromotionService;
use faculty_promotion::workflows::roster::RosterImporter;
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

    let repository = Arc::new(InMemoryProfileRepository::default());
    if let Some(path) = &config.roster.seed_csv {
        let profiles = RosterImporter::from_path(path)?;
        let seeded = repository.seed(profiles);
        info!(path = %path.display(), seeded, "faculty roster loaded");
    }

    let notices = Arc::new(InMemoryNoticePublisher::default());
    let promotion_service = Arc::new(PromotionService::new(repository, notices));

    let app = with_promotion_routes(promotion_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "faculty promotion service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
