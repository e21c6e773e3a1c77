use candidate_lookup::config::AppConfig;
use candidate_lookup::error::AppError;
use candidate_lookup::lookup::{CandidateLookupService, TeamtailorClient};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_lookup_service(
    config: &AppConfig,
) -> Result<Arc<CandidateLookupService<TeamtailorClient>>, AppError> {
    let client = Arc::new(TeamtailorClient::new(&config.teamtailor)?);
    Ok(Arc::new(CandidateLookupService::new(
        client,
        &config.teamtailor,
        config.phone,
    )))
}
